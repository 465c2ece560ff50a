//! Error types.
//!
//! Rejected answers are not errors; they are `SubmitOutcome` values.
//! These enums cover the narrow set of genuine failures, all of which the
//! engine recovers from locally.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to read a word source.
#[derive(Debug, Error)]
pub enum WordSourceError {
    /// The word file could not be read.
    #[error("failed to read word source {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A reader failed mid-stream.
    #[error("failed to read word source: {0}")]
    Read(#[from] std::io::Error),
}

/// Failure inside a key-value store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem failure in a file-backed store.
    #[error("store I/O error for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The key cannot be stored by this backend.
    #[error("invalid store key '{0}'")]
    InvalidKey(String),

    /// Any other backend failure.
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Failure to save or load session state.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The state could not be encoded or decoded.
    #[error("state serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
