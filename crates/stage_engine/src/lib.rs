//! Stage engine: reachability probing, web-surface ports, and effect execution.
mod agent;
mod engine;
mod persist;
mod probe;
mod surface;
mod types;

pub use agent::{patch_user_agent, VERSION_TOKEN};
pub use engine::EngineHandle;
pub use persist::{ensure_state_dir, AtomicFileWriter, PersistError};
pub use probe::{outcome_for_status, ProbeSettings, Prober, ReqwestProber};
pub use surface::{AlertAck, SurfaceConfig, SurfaceController, SurfaceHost, WebSurface};
pub use types::{EngineEvent, ProbeOutcome};
