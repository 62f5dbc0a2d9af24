use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use stage_core::DecisionFlags;
use stage_engine::AtomicFileWriter;
use stage_logging::{stage_error, stage_info, stage_warn};

const FLAGS_FILENAME: &str = ".stage_flags.ron";

/// On-disk form of the two decision flags. The serialized field names are
/// the fixed storage keys; both flags always travel in one document so a
/// decision is written atomically.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedFlags {
    #[serde(rename = "isOpenBackStageKey")]
    is_open_back_stage: bool,
    #[serde(rename = "isOpenStageProgressKey")]
    is_open_stage_progress: bool,
}

impl From<DecisionFlags> for PersistedFlags {
    fn from(flags: DecisionFlags) -> Self {
        Self {
            is_open_back_stage: flags.in_web_mode,
            is_open_stage_progress: flags.show_progress,
        }
    }
}

impl From<PersistedFlags> for DecisionFlags {
    fn from(persisted: PersistedFlags) -> Self {
        Self {
            show_progress: persisted.is_open_stage_progress,
            in_web_mode: persisted.is_open_back_stage,
        }
    }
}

/// Load the decision flags, falling back to the first-launch defaults on a
/// missing or unreadable file. A broken state file must never block the
/// app, so every failure path degrades to defaults.
pub(crate) fn load_flags(state_dir: &Path) -> DecisionFlags {
    let path = state_dir.join(FLAGS_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return DecisionFlags::default();
        }
        Err(err) => {
            stage_warn!("Failed to read decision flags from {:?}: {}", path, err);
            return DecisionFlags::default();
        }
    };

    let persisted: PersistedFlags = match ron::from_str(&content) {
        Ok(persisted) => persisted,
        Err(err) => {
            stage_warn!("Failed to parse decision flags from {:?}: {}", path, err);
            return DecisionFlags::default();
        }
    };

    stage_info!("Loaded decision flags from {:?}", path);
    persisted.into()
}

/// Durably store both flags in one atomic write.
pub(crate) fn save_flags(state_dir: &Path, flags: DecisionFlags) {
    let persisted = PersistedFlags::from(flags);
    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(&persisted, pretty) {
        Ok(text) => text,
        Err(err) => {
            stage_error!("Failed to serialize decision flags: {}", err);
            return;
        }
    };

    let writer = AtomicFileWriter::new(PathBuf::from(state_dir));
    if let Err(err) = writer.write(FLAGS_FILENAME, &content) {
        stage_error!("Failed to write decision flags to {:?}: {}", state_dir, err);
    }
}
