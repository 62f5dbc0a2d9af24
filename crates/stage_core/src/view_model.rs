use url::Url;

/// Snapshot handed to the view layer after every update. The host UI
/// observes `show_web_surface` reactively; it is re-evaluated once per
/// launch and may flip later when the surface reverses the decision.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    /// Render the embedded web surface instead of the normal application.
    pub show_web_surface: bool,
    /// Endpoint the surface should display, present only in web mode.
    pub endpoint: Option<Url>,
    /// The launch decision has not settled yet.
    pub deciding: bool,
    /// Fractional load progress in [0, 1] for the surface progress bar.
    pub progress: f64,
    /// Keep the progress bar visible while the surface is below full
    /// progress.
    pub loading: bool,
}
