use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VidtagsError {
    #[error("Input file not found at {path}")]
    InputNotFound { path: PathBuf },

    #[error("Could not read {path}: {source}")]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not decode JSON from {path}: {source}")]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Expected {expected} in {path}, but found {found}")]
    UnexpectedShape {
        path: PathBuf,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Error writing output file {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl VidtagsError {
    /// True for failures that happened before any output was written.
    pub fn is_read_failure(&self) -> bool {
        matches!(
            self,
            VidtagsError::InputNotFound { .. }
                | VidtagsError::InputUnreadable { .. }
                | VidtagsError::InvalidJson { .. }
                | VidtagsError::UnexpectedShape { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, VidtagsError>;
