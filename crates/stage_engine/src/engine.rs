use std::sync::{mpsc, Arc};
use std::thread;

use url::Url;

use crate::probe::{ProbeSettings, Prober, ReqwestProber};
use crate::EngineEvent;

enum EngineCommand {
    Probe { endpoint: Url },
}

/// Handle to the engine's worker thread. Commands go in over a channel;
/// events come back out and are polled from the app's sequencing context,
/// so every flag mutation still happens on the UI loop.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ProbeSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let prober = Arc::new(ReqwestProber::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let prober = prober.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(prober.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    /// Issue the single reachability probe for this launch.
    pub fn probe(&self, endpoint: Url) {
        let _ = self.cmd_tx.send(EngineCommand::Probe { endpoint });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    prober: &dyn Prober,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Probe { endpoint } => {
            let outcome = prober.probe(&endpoint).await;
            let _ = event_tx.send(EngineEvent::ProbeCompleted { outcome });
        }
    }
}
