use url::Url;

use crate::decode::resolve_endpoint;
use crate::state::SurfaceSession;
use crate::{AppState, DecisionFlags, Effect, LaunchPhase, Msg, ProbeOutcome, SurfaceResolution};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::LaunchRequested => launch(&mut state),
        Msg::ProbeFinished(outcome) => probe_finished(&mut state, outcome),
        Msg::ResponseReceived {
            status,
            declared_length,
        } => response_received(&mut state, status, declared_length),
        Msg::ProvisionalNavigationFailed | Msg::NavigationFailed | Msg::NavigationFinished => {
            navigation_settled(&mut state)
        }
        Msg::ProgressChanged(value) => {
            if state.phase == LaunchPhase::WebMode {
                state.session.progress = value.clamp(0.0, 1.0);
            }
            Vec::new()
        }
        Msg::NavigationRequested { url, targets_frame } => {
            navigation_requested(&state, url, targets_frame)
        }
        Msg::PopupRequested { url } => {
            if state.phase == LaunchPhase::WebMode {
                vec![Effect::LoadInSurface { url }]
            } else {
                Vec::new()
            }
        }
        Msg::AlertPosted { message } => {
            if state.phase == LaunchPhase::WebMode {
                vec![Effect::PresentAlert { message }]
            } else {
                Vec::new()
            }
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Consult the persisted flags exactly once per launch. `show_progress`
/// gates the probe sequence; once it is false the prober is never invoked
/// again and the launch goes straight to whichever branch `in_web_mode`
/// indicates.
fn launch(state: &mut AppState) -> Vec<Effect> {
    if state.phase != LaunchPhase::Start {
        return Vec::new();
    }

    if state.flags.show_progress {
        match resolve_endpoint(&state.endpoint_source) {
            Some(endpoint) => {
                state.phase = LaunchPhase::Deciding;
                state.endpoint = Some(endpoint.clone());
                vec![Effect::Probe { endpoint }]
            }
            None => fall_back(state),
        }
    } else if state.flags.in_web_mode {
        match resolve_endpoint(&state.endpoint_source) {
            Some(endpoint) => {
                state.phase = LaunchPhase::WebMode;
                state.endpoint = Some(endpoint);
                state.session = SurfaceSession::default();
                Vec::new()
            }
            None => fall_back(state),
        }
    } else {
        state.phase = LaunchPhase::NormalMode;
        Vec::new()
    }
}

fn probe_finished(state: &mut AppState, outcome: ProbeOutcome) -> Vec<Effect> {
    if state.phase != LaunchPhase::Deciding {
        return Vec::new();
    }

    match outcome {
        // The endpoint resolved before the probe was issued; a missing one
        // here means the launch sequence was driven out of order.
        ProbeOutcome::Reachable if state.endpoint.is_some() => {
            state.flags = DecisionFlags {
                show_progress: false,
                in_web_mode: true,
            };
            state.phase = LaunchPhase::WebMode;
            state.session = SurfaceSession::default();
            vec![Effect::PersistFlags(state.flags)]
        }
        ProbeOutcome::Reachable | ProbeOutcome::Unreachable => fall_back(state),
    }
}

fn response_received(state: &mut AppState, status: u16, declared_length: i64) -> Vec<Effect> {
    if state.phase != LaunchPhase::WebMode || state.session.resolution.is_some() {
        return Vec::new();
    }

    state.session.bytes_declared += declared_length;
    if !(200..300).contains(&status) {
        state.session.resolution = Some(SurfaceResolution::Fallback);
        return fall_back(state);
    }
    Vec::new()
}

/// First terminal navigation event of the session: evaluate the byte
/// counter once. Zero declared bytes means the page never produced
/// content, so the decision is reversed; anything else confirms web mode
/// for future launches. Latecomer events are ignored.
fn navigation_settled(state: &mut AppState) -> Vec<Effect> {
    if state.phase != LaunchPhase::WebMode || state.session.resolution.is_some() {
        return Vec::new();
    }

    if state.session.bytes_declared == 0 {
        state.session.resolution = Some(SurfaceResolution::Fallback);
        fall_back(state)
    } else {
        state.session.resolution = Some(SurfaceResolution::Confirmed);
        state.flags = DecisionFlags {
            show_progress: false,
            in_web_mode: true,
        };
        vec![Effect::PersistFlags(state.flags)]
    }
}

fn navigation_requested(state: &AppState, url: String, targets_frame: bool) -> Vec<Effect> {
    if state.phase != LaunchPhase::WebMode {
        return Vec::new();
    }

    if !targets_frame {
        return vec![Effect::LoadInSurface { url }];
    }

    match Url::parse(&url) {
        Ok(parsed) if !matches!(parsed.scheme(), "http" | "https") => {
            vec![Effect::OpenExternal { url }]
        }
        _ => Vec::new(),
    }
}

/// Fail to the legitimate app: both flags cleared, written together so a
/// crash between writes cannot leave them inconsistent.
fn fall_back(state: &mut AppState) -> Vec<Effect> {
    state.flags = DecisionFlags {
        show_progress: false,
        in_web_mode: false,
    };
    state.phase = LaunchPhase::NormalMode;
    vec![Effect::PersistFlags(state.flags)]
}
