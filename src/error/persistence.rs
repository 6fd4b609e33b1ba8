//! Storage errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A key-value read or write that did not complete.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Filesystem failure for a stored key.
    #[error("storage I/O failed for '{key}' at {path:?}: {source}")]
    Io {
        key: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Stored blob could not be encoded or decoded.
    #[error("could not (de)serialize '{key}': {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Backend refused the operation (quota, read-only, test injection).
    #[error("storage unavailable for '{key}': {reason}")]
    Unavailable { key: String, reason: String },
}

impl PersistenceError {
    /// The storage key involved.
    pub fn key(&self) -> &str {
        match self {
            PersistenceError::Io { key, .. }
            | PersistenceError::Serialization { key, .. }
            | PersistenceError::Unavailable { key, .. } => key,
        }
    }
}
