use stage_logging::stage_warn;
use url::Url;

use crate::agent::patch_user_agent;

/// Embedded-surface configuration applied before the initial navigation.
#[derive(Debug, Clone)]
pub struct SurfaceConfig {
    /// Inline media may start playing without a user gesture.
    pub allows_inline_media: bool,
    /// Page scripts are allowed to run.
    pub javascript_enabled: bool,
    /// Scripts may request new windows (folded back into the surface).
    pub javascript_can_open_windows: bool,
    /// Horizontal swipe gestures navigate back/forward.
    pub back_forward_gestures: bool,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            allows_inline_media: true,
            javascript_enabled: true,
            javascript_can_open_windows: true,
            back_forward_gestures: true,
        }
    }
}

/// Port to the embedded browser surface owned by the host UI.
pub trait WebSurface {
    fn apply_config(&mut self, config: &SurfaceConfig);
    /// The surface's self-reported client-identification string.
    fn user_agent(&self) -> String;
    /// Re-apply the outgoing identification string for all subsequent
    /// requests from this surface.
    fn set_user_agent(&mut self, agent: String);
    fn load(&mut self, url: &Url);
}

/// Host-side services the controller needs from the platform.
pub trait SurfaceHost {
    /// Hand a URL to the OS generic opener (non-web schemes).
    fn open_external(&self, url: &str);
    /// Present a blocking alert dialog. Implementations must eventually
    /// release `ack`; a dropped, unacknowledged guard still fires.
    fn present_alert(&self, message: &str, ack: AlertAck);
}

/// Acknowledgement guard for an in-page alert dialog.
///
/// The page stays suspended until the completion fires; the guard fires it
/// on drop, so no host code path (including "no window to present in") can
/// leave the page hanging.
pub struct AlertAck {
    done: Option<Box<dyn FnOnce() + Send>>,
}

impl AlertAck {
    pub fn new(done: impl FnOnce() + Send + 'static) -> Self {
        Self {
            done: Some(Box::new(done)),
        }
    }

    /// Resume the page after the dialog was dismissed.
    pub fn acknowledge(mut self) {
        if let Some(done) = self.done.take() {
            done();
        }
    }
}

impl Drop for AlertAck {
    fn drop(&mut self) {
        if let Some(done) = self.done.take() {
            done();
        }
    }
}

impl std::fmt::Debug for AlertAck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlertAck")
            .field("pending", &self.done.is_some())
            .finish()
    }
}

/// Drives one embedded-surface session: configures the surface, patches
/// its identification string, issues the initial navigation, and executes
/// the navigation effects decided by the core update.
pub struct SurfaceController<S: WebSurface, H: SurfaceHost> {
    surface: S,
    host: H,
    config: SurfaceConfig,
}

impl<S: WebSurface, H: SurfaceHost> SurfaceController<S, H> {
    pub fn new(surface: S, host: H, config: SurfaceConfig) -> Self {
        Self {
            surface,
            host,
            config,
        }
    }

    /// Configure the surface, normalize its identification string, and
    /// kick off the initial navigation.
    pub fn start(&mut self, endpoint: &Url) {
        self.surface.apply_config(&self.config);
        let agent = self.surface.user_agent();
        self.surface.set_user_agent(patch_user_agent(&agent));
        self.surface.load(endpoint);
    }

    /// Fold a popup or frameless navigation back into this surface.
    pub fn load_in_place(&mut self, url: &str) {
        match Url::parse(url) {
            Ok(parsed) => self.surface.load(&parsed),
            Err(err) => stage_warn!("Dropping unparseable in-place load {}: {}", url, err),
        }
    }

    pub fn open_external(&self, url: &str) {
        self.host.open_external(url);
    }

    /// Present an in-page alert; `done` fires on every path.
    pub fn present_alert(&self, message: &str, done: impl FnOnce() + Send + 'static) {
        self.host.present_alert(message, AlertAck::new(done));
    }
}
