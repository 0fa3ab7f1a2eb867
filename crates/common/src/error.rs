//! Error types shared across cuetrack crates.

use std::path::PathBuf;

/// Top-level error type for cuetrack operations.
#[derive(Debug, thiserror::Error)]
pub enum CuetrackError {
    #[error("Track error: {message}")]
    Track { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Invalid encoding in {path}: {message}")]
    Encoding { path: PathBuf, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias using CuetrackError.
pub type CuetrackResult<T> = Result<T, CuetrackError>;

impl CuetrackError {
    pub fn track(msg: impl Into<String>) -> Self {
        Self::Track {
            message: msg.into(),
        }
    }

    pub fn encoding(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::Encoding {
            path: path.into(),
            message: msg.into(),
        }
    }
}
