use std::time::Duration;

use stage_logging::{stage_debug, stage_warn};
use url::Url;

use crate::ProbeOutcome;

#[derive(Debug, Clone)]
pub struct ProbeSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// `Reachable` iff `status` lies in [200, 300): inclusive of 200,
/// exclusive of 300.
pub fn outcome_for_status(status: u16) -> ProbeOutcome {
    if (200..300).contains(&status) {
        ProbeOutcome::Reachable
    } else {
        ProbeOutcome::Unreachable
    }
}

#[async_trait::async_trait]
pub trait Prober: Send + Sync {
    /// Issue one GET against `endpoint`, discard the body, and map the
    /// status code through [`outcome_for_status`]. Exactly one attempt per
    /// invocation; retry policy, if any, belongs to the caller.
    async fn probe(&self, endpoint: &Url) -> ProbeOutcome;
}

#[derive(Debug, Clone, Default)]
pub struct ReqwestProber {
    settings: ProbeSettings,
}

impl ReqwestProber {
    pub fn new(settings: ProbeSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> reqwest::Result<reqwest::Client> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
    }
}

#[async_trait::async_trait]
impl Prober for ReqwestProber {
    async fn probe(&self, endpoint: &Url) -> ProbeOutcome {
        let client = match self.build_client() {
            Ok(client) => client,
            Err(err) => {
                stage_warn!("Probe client construction failed: {}", err);
                return ProbeOutcome::Unreachable;
            }
        };

        match client.get(endpoint.as_str()).send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                // Body intentionally dropped unread.
                drop(response);
                stage_debug!("Probe response status: {}", status);
                outcome_for_status(status)
            }
            Err(err) if err.is_timeout() => {
                stage_warn!("Probe timed out: {}", err);
                ProbeOutcome::Unreachable
            }
            Err(err) => {
                stage_warn!("Probe transport failure: {}", err);
                ProbeOutcome::Unreachable
            }
        }
    }
}
