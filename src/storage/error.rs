use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
/// Errors returned by the key-value stores.
pub enum StorageError {
    /// Reading or preparing the store location failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path being accessed.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store file exists but is not a JSON object.
    #[error("store at {path} is corrupt: {source}")]
    Corrupt {
        /// Store file.
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Serializing the in-memory contents failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The temp file could not be moved over the store file.
    #[error("failed to persist store to {path}: {source}")]
    Persist {
        /// Store file.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("write failed: {0}")]
    WriteFailed(String),
}

/// Convenience result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
