#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// App launched; consult the persisted flags once.
    LaunchRequested,
    /// The engine finished the single reachability probe.
    ProbeFinished(crate::ProbeOutcome),
    /// The embedded surface received a navigation response with an HTTP
    /// status and a declared content length (-1 when unknown).
    ResponseReceived { status: u16, declared_length: i64 },
    /// The surface could not even start loading.
    ProvisionalNavigationFailed,
    /// The surface failed partway through a load.
    NavigationFailed,
    /// The surface finished its navigation.
    NavigationFinished,
    /// Fractional load progress republished for the UI.
    ProgressChanged(f64),
    /// The surface wants to navigate somewhere; `targets_frame` is false
    /// for requests that would open outside any frame.
    NavigationRequested { url: String, targets_frame: bool },
    /// A page asked for a new window/popup.
    PopupRequested { url: String },
    /// An in-page script posted an alert dialog.
    AlertPosted { message: String },
    /// Fallback for placeholder wiring.
    NoOp,
}
