use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue the single reachability probe against the resolved endpoint.
    Probe { endpoint: Url },
    /// Durably write both decision flags in one atomic store operation.
    PersistFlags(crate::DecisionFlags),
    /// Load a URL in the existing surface; popups and frameless requests
    /// are folded back into the same surface, never a new one.
    LoadInSurface { url: String },
    /// Hand a non-web scheme to the host OS URL opener.
    OpenExternal { url: String },
    /// Present a blocking script-alert dialog. The host must acknowledge
    /// it on every path or the page hangs.
    PresentAlert { message: String },
}
