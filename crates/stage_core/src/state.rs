use url::Url;

use crate::decode::STAGE_SOURCE;
use crate::view_model::AppViewModel;

/// Storage key for the persisted [`DecisionFlags::in_web_mode`] flag.
pub const BACK_STAGE_KEY: &str = "isOpenBackStageKey";
/// Storage key for the persisted [`DecisionFlags::show_progress`] flag.
pub const STAGE_PROGRESS_KEY: &str = "isOpenStageProgressKey";

/// The two persisted booleans governing which mode is chosen on launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionFlags {
    /// Still deciding: run the probe sequence on this launch. Set false
    /// permanently once a decision is reached.
    pub show_progress: bool,
    /// Render the embedded web surface instead of the normal application.
    pub in_web_mode: bool,
}

impl Default for DecisionFlags {
    fn default() -> Self {
        Self {
            show_progress: true,
            in_web_mode: false,
        }
    }
}

/// Launch phase for the current process. `WebMode` and `NormalMode` are the
/// two rendering outcomes; neither terminates the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LaunchPhase {
    #[default]
    Start,
    Deciding,
    WebMode,
    NormalMode,
}

/// Result of the single reachability probe. Consumed immediately, never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// HTTP status in [200, 300).
    Reachable,
    /// Any other status, or a transport-level failure.
    Unreachable,
}

/// Terminal sub-state of one web-surface session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceResolution {
    /// The surface delivered content; web mode is kept for future launches.
    Confirmed,
    /// The surface delivered nothing; fall back to the normal app.
    Fallback,
}

/// Per-session web-surface bookkeeping, reset on every (re)load.
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct SurfaceSession {
    /// Running sum of declared content lengths across response callbacks.
    /// Signed because the host platform reports an unknown length as -1
    /// and the sum accumulates the raw values.
    pub(crate) bytes_declared: i64,
    /// Fractional load progress in [0, 1], observational only.
    pub(crate) progress: f64,
    /// Set exactly once, at the first terminal navigation event; later
    /// events must not re-decide.
    pub(crate) resolution: Option<SurfaceResolution>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub(crate) flags: DecisionFlags,
    pub(crate) phase: LaunchPhase,
    pub(crate) endpoint: Option<Url>,
    pub(crate) session: SurfaceSession,
    pub(crate) endpoint_source: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            flags: DecisionFlags::default(),
            phase: LaunchPhase::default(),
            endpoint: None,
            session: SurfaceSession::default(),
            endpoint_source: STAGE_SOURCE.to_string(),
        }
    }
}

impl AppState {
    /// State at process start, seeded with the flags loaded from storage.
    pub fn new(flags: DecisionFlags) -> Self {
        Self {
            flags,
            ..Self::default()
        }
    }

    /// Like [`AppState::new`], with an endpoint literal other than the
    /// production one. Used by tests to exercise resolution failure.
    pub fn with_endpoint_source(flags: DecisionFlags, source: impl Into<String>) -> Self {
        Self {
            flags,
            endpoint_source: source.into(),
            ..Self::default()
        }
    }

    pub fn view(&self) -> AppViewModel {
        let show = self.phase == LaunchPhase::WebMode && self.endpoint.is_some();
        AppViewModel {
            show_web_surface: show,
            endpoint: if show { self.endpoint.clone() } else { None },
            deciding: matches!(self.phase, LaunchPhase::Start | LaunchPhase::Deciding),
            progress: self.session.progress,
            loading: show && self.session.progress < 1.0,
        }
    }

    pub fn flags(&self) -> DecisionFlags {
        self.flags
    }

    pub fn phase(&self) -> LaunchPhase {
        self.phase
    }

    pub fn endpoint(&self) -> Option<&Url> {
        self.endpoint.as_ref()
    }

    /// Terminal sub-state of the current surface session, if reached.
    pub fn surface_resolution(&self) -> Option<SurfaceResolution> {
        self.session.resolution
    }
}
