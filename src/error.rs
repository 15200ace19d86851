use crate::model::Level;

/// Progression errors. None of these are fatal; callers recover locally.
#[derive(Debug, thiserror::Error)]
pub enum ProgressionError {
    #[error("Corrupted progression state: {0}")]
    CorruptedState(#[from] serde_json::Error),

    #[error("Unsupported progression schema version {found} (supported: {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("Level '{target}' is locked")]
    InvalidLevelTransition { target: Level },

    #[error("Unknown level: {0}")]
    UnknownLevel(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl ProgressionError {
    /// True for every failure that means the persisted record can't be used.
    pub fn is_corrupted(&self) -> bool {
        matches!(
            self,
            ProgressionError::CorruptedState(_) | ProgressionError::UnsupportedVersion { .. }
        )
    }
}
