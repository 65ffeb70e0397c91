use thiserror::Error;

use crate::core::types::CellId;

#[derive(Error, Debug)]
pub enum HiveError {
    #[error("No learner profile has been generated yet")]
    NoLearner,

    #[error("No current cell: the skill map is exhausted")]
    NoCurrentCell,

    #[error("Cell id out of range: {0}")]
    CellOutOfRange(u32),

    #[error("Cell {0} is locked")]
    CellLocked(CellId),

    #[error("Cell {0} is already completed")]
    CellCompleted(CellId),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HiveError>;
