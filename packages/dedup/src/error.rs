//! Typed errors for the dedup library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so the orchestrator
//! can decide per variant whether to abort the run or proceed cold.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during duplicate detection and ledger operations.
#[derive(Debug, Error)]
pub enum DedupError {
    /// Malformed caller input (empty text, empty item ID).
    /// Always a caller bug; never retried.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Ledger storage failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl DedupError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

/// Errors raised by ledger storage adapters.
///
/// A missing backing file is a cold start, not an error. Everything else
/// (permissions, disk full, malformed JSON) propagates: silently proceeding
/// with an empty ledger would risk republishing duplicates.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but does not parse as a ledger.
    #[error("malformed ledger at {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Serializing the ledger for persistence failed.
    #[error("ledger serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Result type alias for dedup operations.
pub type Result<T> = std::result::Result<T, DedupError>;

/// Result type alias for storage operations.
pub type StorageResult<T> = std::result::Result<T, StorageError>;
