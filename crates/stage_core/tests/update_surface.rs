use std::sync::Once;

use stage_core::{
    update, AppState, DecisionFlags, Effect, LaunchPhase, Msg, SurfaceResolution,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(stage_logging::initialize_for_tests);
}

/// A launch that lands straight in web mode, as after a confirmed install.
fn web_mode_state() -> AppState {
    let state = AppState::new(DecisionFlags {
        show_progress: false,
        in_web_mode: true,
    });
    let (state, effects) = update(state, Msg::LaunchRequested);
    assert!(effects.is_empty());
    assert_eq!(state.phase(), LaunchPhase::WebMode);
    state
}

fn fallback_flags() -> DecisionFlags {
    DecisionFlags {
        show_progress: false,
        in_web_mode: false,
    }
}

fn confirmed_flags() -> DecisionFlags {
    DecisionFlags {
        show_progress: false,
        in_web_mode: true,
    }
}

#[test]
fn finish_with_zero_bytes_falls_back() {
    init_logging();
    let state = web_mode_state();

    let (state, effects) = update(state, Msg::NavigationFinished);

    assert_eq!(state.surface_resolution(), Some(SurfaceResolution::Fallback));
    assert_eq!(state.flags(), fallback_flags());
    assert_eq!(state.phase(), LaunchPhase::NormalMode);
    assert_eq!(effects, vec![Effect::PersistFlags(fallback_flags())]);
    assert!(!state.view().show_web_surface);
}

#[test]
fn finish_after_content_confirms_web_mode() {
    init_logging();
    let state = web_mode_state();
    let (state, effects) = update(
        state,
        Msg::ResponseReceived {
            status: 200,
            declared_length: 1234,
        },
    );
    assert!(effects.is_empty());

    let (state, effects) = update(state, Msg::NavigationFinished);

    assert_eq!(
        state.surface_resolution(),
        Some(SurfaceResolution::Confirmed)
    );
    assert_eq!(state.flags(), confirmed_flags());
    assert_eq!(state.phase(), LaunchPhase::WebMode);
    assert_eq!(effects, vec![Effect::PersistFlags(confirmed_flags())]);
    assert!(state.view().show_web_surface);
}

#[test]
fn bad_response_status_forces_immediate_fallback() {
    init_logging();
    let state = web_mode_state();

    let (state, effects) = update(
        state,
        Msg::ResponseReceived {
            status: 404,
            declared_length: 512,
        },
    );

    assert_eq!(state.surface_resolution(), Some(SurfaceResolution::Fallback));
    assert_eq!(state.flags(), fallback_flags());
    assert_eq!(state.phase(), LaunchPhase::NormalMode);
    assert_eq!(effects, vec![Effect::PersistFlags(fallback_flags())]);
}

#[test]
fn provisional_failure_evaluates_the_byte_counter() {
    init_logging();
    let state = web_mode_state();

    let (state, effects) = update(state, Msg::ProvisionalNavigationFailed);

    assert_eq!(state.surface_resolution(), Some(SurfaceResolution::Fallback));
    assert_eq!(effects, vec![Effect::PersistFlags(fallback_flags())]);
}

#[test]
fn mid_load_failure_after_content_still_confirms() {
    init_logging();
    let state = web_mode_state();
    let (state, _) = update(
        state,
        Msg::ResponseReceived {
            status: 204,
            declared_length: 10,
        },
    );

    let (state, effects) = update(state, Msg::NavigationFailed);

    assert_eq!(
        state.surface_resolution(),
        Some(SurfaceResolution::Confirmed)
    );
    assert_eq!(effects, vec![Effect::PersistFlags(confirmed_flags())]);
}

#[test]
fn unknown_length_counts_as_content() {
    init_logging();
    let state = web_mode_state();
    // The host platform reports an unknown content length as -1; the
    // counter accumulates it raw, so it is nonzero on finish.
    let (state, _) = update(
        state,
        Msg::ResponseReceived {
            status: 200,
            declared_length: -1,
        },
    );

    let (state, _) = update(state, Msg::NavigationFinished);

    assert_eq!(
        state.surface_resolution(),
        Some(SurfaceResolution::Confirmed)
    );
}

#[test]
fn second_finish_does_not_re_decide() {
    init_logging();
    let state = web_mode_state();
    let (state, _) = update(
        state,
        Msg::ResponseReceived {
            status: 200,
            declared_length: 42,
        },
    );
    let (state, _) = update(state, Msg::NavigationFinished);
    let before = state.clone();

    let (state, effects) = update(state, Msg::NavigationFinished);

    assert_eq!(state, before);
    assert!(effects.is_empty());
}

#[test]
fn events_after_fallback_are_ignored() {
    init_logging();
    let state = web_mode_state();
    let (state, _) = update(state, Msg::NavigationFinished);
    let before = state.clone();

    let (state, effects) = update(
        state,
        Msg::ResponseReceived {
            status: 200,
            declared_length: 9000,
        },
    );

    assert_eq!(state, before);
    assert!(effects.is_empty());
}

#[test]
fn progress_is_observational_and_clamped() {
    init_logging();
    let state = web_mode_state();

    let (state, effects) = update(state, Msg::ProgressChanged(0.4));
    assert!(effects.is_empty());
    assert_eq!(state.view().progress, 0.4);
    assert!(state.view().loading);

    let (state, _) = update(state, Msg::ProgressChanged(1.5));
    assert_eq!(state.view().progress, 1.0);
    assert!(!state.view().loading);
}

#[test]
fn popup_is_folded_into_the_same_surface() {
    init_logging();
    let state = web_mode_state();

    let (_, effects) = update(
        state,
        Msg::PopupRequested {
            url: "https://example.com/popup".to_string(),
        },
    );

    assert_eq!(
        effects,
        vec![Effect::LoadInSurface {
            url: "https://example.com/popup".to_string(),
        }]
    );
}

#[test]
fn frameless_navigation_loads_in_place() {
    init_logging();
    let state = web_mode_state();

    let (_, effects) = update(
        state,
        Msg::NavigationRequested {
            url: "https://example.com/next".to_string(),
            targets_frame: false,
        },
    );

    assert_eq!(
        effects,
        vec![Effect::LoadInSurface {
            url: "https://example.com/next".to_string(),
        }]
    );
}

#[test]
fn non_web_scheme_goes_to_the_host_opener() {
    init_logging();
    let state = web_mode_state();

    let (state, effects) = update(
        state,
        Msg::NavigationRequested {
            url: "tg://resolve?domain=example".to_string(),
            targets_frame: true,
        },
    );

    assert_eq!(
        effects,
        vec![Effect::OpenExternal {
            url: "tg://resolve?domain=example".to_string(),
        }]
    );

    let (_, effects) = update(
        state,
        Msg::NavigationRequested {
            url: "https://example.com/ok".to_string(),
            targets_frame: true,
        },
    );
    assert!(effects.is_empty());
}

#[test]
fn alert_is_forwarded_to_the_host() {
    init_logging();
    let state = web_mode_state();

    let (_, effects) = update(
        state,
        Msg::AlertPosted {
            message: "hello".to_string(),
        },
    );

    assert_eq!(
        effects,
        vec![Effect::PresentAlert {
            message: "hello".to_string(),
        }]
    );
}

#[test]
fn surface_events_are_ignored_in_normal_mode() {
    init_logging();
    let state = AppState::new(fallback_flags());
    let (state, _) = update(state, Msg::LaunchRequested);
    let before = state.clone();

    let (state, effects) = update(
        state,
        Msg::ResponseReceived {
            status: 200,
            declared_length: 100,
        },
    );
    assert_eq!(state, before);
    assert!(effects.is_empty());

    let (state, effects) = update(state, Msg::NavigationFinished);
    assert_eq!(state, before);
    assert!(effects.is_empty());
}
