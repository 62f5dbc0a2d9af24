use std::fmt;

/// Result of the single reachability probe. Consumed immediately by the
/// launch decision; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// HTTP status in [200, 300).
    Reachable,
    /// Any other status, or a transport-level failure (timeout, DNS, TLS,
    /// refusal). Failures are folded in here so the caller always falls
    /// back to the normal app.
    Unreachable,
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeOutcome::Reachable => write!(f, "reachable"),
            ProbeOutcome::Unreachable => write!(f, "unreachable"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    ProbeCompleted { outcome: ProbeOutcome },
}
