//! Stage core: pure launch-decision state machine and view-model helpers.
mod decode;
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use decode::{decode_ascii_literal, resolve_endpoint, STAGE_SOURCE};
pub use effect::Effect;
pub use msg::Msg;
pub use state::{
    AppState, DecisionFlags, LaunchPhase, ProbeOutcome, SurfaceResolution, BACK_STAGE_KEY,
    STAGE_PROGRESS_KEY,
};
pub use update::update;
pub use view_model::AppViewModel;
