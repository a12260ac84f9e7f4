use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("Failed to read resource {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed line {line} in {path}: {reason}")]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },
}

/// Result type alias for resource loading operations
pub type Result<T> = std::result::Result<T, LexiconError>;
