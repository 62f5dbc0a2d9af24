use std::path::PathBuf;

use stage_core::{Effect, Msg, ProbeOutcome};
use stage_engine::{
    EngineEvent, EngineHandle, ProbeSettings, SurfaceConfig, SurfaceController,
};
use stage_logging::stage_info;
use url::Url;

use super::persistence;
use super::surface::{HeadlessHost, HeadlessSurface};

/// Identification string the headless surface starts out with; a real
/// webview would report its own.
const DEFAULT_AGENT: &str =
    "Mozilla/5.0 (iPhone; CPU iPhone OS 16_2 like Mac OS X) AppleWebKit/605.1.15 \
     (KHTML, like Gecko) Mobile/15E148";

/// Executes core effects against the engine, the surface controller, and
/// the flag store, and maps engine events back onto core messages.
pub(crate) struct EffectRunner {
    engine: EngineHandle,
    controller: SurfaceController<HeadlessSurface, HeadlessHost>,
    state_dir: PathBuf,
}

impl EffectRunner {
    pub(crate) fn new(state_dir: PathBuf) -> Self {
        let engine = EngineHandle::new(ProbeSettings::default());
        let controller = SurfaceController::new(
            HeadlessSurface::new(DEFAULT_AGENT),
            HeadlessHost,
            SurfaceConfig::default(),
        );
        Self {
            engine,
            controller,
            state_dir,
        }
    }

    pub(crate) fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Probe { endpoint } => {
                    stage_info!(
                        "Probing endpoint host {}",
                        endpoint.host_str().unwrap_or("<none>")
                    );
                    self.engine.probe(endpoint);
                }
                Effect::PersistFlags(flags) => {
                    persistence::save_flags(&self.state_dir, flags);
                }
                Effect::LoadInSurface { url } => {
                    self.controller.load_in_place(&url);
                }
                Effect::OpenExternal { url } => {
                    self.controller.open_external(&url);
                }
                Effect::PresentAlert { message } => {
                    self.controller.present_alert(&message, || {});
                }
            }
        }
    }

    /// Kick off the embedded-surface session once web mode is entered.
    pub(crate) fn start_surface(&mut self, endpoint: &Url) {
        self.controller.start(endpoint);
    }

    /// Map a pending engine event onto a core message, if any arrived.
    pub(crate) fn try_recv(&self) -> Option<Msg> {
        self.engine.try_recv().map(|event| match event {
            EngineEvent::ProbeCompleted { outcome } => Msg::ProbeFinished(map_outcome(outcome)),
        })
    }
}

fn map_outcome(outcome: stage_engine::ProbeOutcome) -> ProbeOutcome {
    match outcome {
        stage_engine::ProbeOutcome::Reachable => ProbeOutcome::Reachable,
        stage_engine::ProbeOutcome::Unreachable => ProbeOutcome::Unreachable,
    }
}
