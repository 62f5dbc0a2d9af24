use stage_logging::stage_info;
use url::Url;

use stage_engine::{AlertAck, SurfaceConfig, SurfaceHost, WebSurface};

/// Headless stand-in for the embedded browser surface. The real view
/// layer is out of scope here; this adapter logs what a platform webview
/// would be told so the whole effect path stays exercised.
#[derive(Debug, Default)]
pub(crate) struct HeadlessSurface {
    agent: String,
    current: Option<Url>,
}

impl HeadlessSurface {
    pub(crate) fn new(agent: impl Into<String>) -> Self {
        Self {
            agent: agent.into(),
            current: None,
        }
    }
}

impl WebSurface for HeadlessSurface {
    fn apply_config(&mut self, config: &SurfaceConfig) {
        stage_info!("Surface configured: {:?}", config);
    }

    fn user_agent(&self) -> String {
        self.agent.clone()
    }

    fn set_user_agent(&mut self, agent: String) {
        stage_info!("Surface identification set to: {}", agent);
        self.agent = agent;
    }

    fn load(&mut self, url: &Url) {
        match &self.current {
            Some(previous) => stage_info!("Surface navigating from {} to {}", previous, url),
            None => stage_info!("Surface loading {}", url),
        }
        self.current = Some(url.clone());
    }
}

/// Host services for the headless adapter. Alerts are acknowledged
/// immediately; there is no dialog to wait for.
#[derive(Debug, Default)]
pub(crate) struct HeadlessHost;

impl SurfaceHost for HeadlessHost {
    fn open_external(&self, url: &str) {
        stage_info!("Handing {} to the OS opener", url);
    }

    fn present_alert(&self, message: &str, ack: AlertAck) {
        stage_info!("Page alert: {}", message);
        ack.acknowledge();
    }
}
