use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use stage_core::{update, AppState, AppViewModel, LaunchPhase, Msg};
use stage_logging::stage_info;

use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::persistence;

/// Run one launch decision cycle and report the chosen mode.
///
/// A host UI would keep the process alive afterwards and keep feeding
/// surface navigation events into the same message channel; this binary
/// stops once the decision has settled and the surface session (if any)
/// has been started.
pub(crate) fn run_app() {
    logging::initialize(LogDestination::Both);

    let state_dir = std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("state");

    let flags = persistence::load_flags(&state_dir);
    let mut state = AppState::new(flags);
    let mut runner = EffectRunner::new(state_dir);

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let _ = msg_tx.send(Msg::LaunchRequested);

    let mut last_view: Option<AppViewModel> = None;
    loop {
        // Queued messages and engine events both land on this loop; every
        // flag mutation happens here, so there is never a second writer.
        let msg = match msg_rx.try_recv() {
            Ok(msg) => Some(msg),
            Err(_) => runner.try_recv(),
        };

        let Some(msg) = msg else {
            if decision_settled(&state) {
                break;
            }
            thread::sleep(Duration::from_millis(20));
            continue;
        };

        let was_web = state.view().show_web_surface;
        let (next, effects) = update(state, msg);
        state = next;
        runner.run(effects);

        let view = state.view();
        if !was_web && view.show_web_surface {
            if let Some(endpoint) = state.endpoint() {
                runner.start_surface(endpoint);
            }
        }
        if last_view.as_ref() != Some(&view) {
            render(&view);
            last_view = Some(view);
        }
    }
}

fn decision_settled(state: &AppState) -> bool {
    matches!(
        state.phase(),
        LaunchPhase::WebMode | LaunchPhase::NormalMode
    )
}

/// The view layer observes the mode reactively; here that is a log line
/// per view change.
fn render(view: &AppViewModel) {
    if view.deciding {
        stage_info!("Launch decision pending");
    } else if view.show_web_surface {
        match &view.endpoint {
            Some(endpoint) => stage_info!("Rendering web surface for {}", endpoint),
            None => stage_info!("Rendering web surface"),
        }
    } else {
        stage_info!("Rendering normal application");
    }
}
