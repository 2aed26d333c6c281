// error.rs — Error types for the goal store, its storage slot and config.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading, mutating or persisting goals.
#[derive(Debug, Error)]
pub enum GoalError {
    /// A file I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The persisted collection could not be parsed (or serialized).
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A persisted goal has `completed` and `completedAt` out of step.
    #[error("goal {id} is inconsistent: completed flag does not match completedAt")]
    InconsistentGoal { id: i64 },

    /// Storage keys become file names, so they are restricted.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    /// The TOML configuration could not be read or parsed.
    #[error("config error at {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// A theme colour is not a `#RGB` / `#RRGGBB` hex value.
    #[error("invalid color {name} = {value:?}: expected #RGB or #RRGGBB")]
    InvalidColor { name: String, value: String },

    #[error("invalid window config: {0}")]
    InvalidWindow(String),
}

impl GoalError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GoalError::Io {
            path: path.into(),
            source,
        }
    }
}
