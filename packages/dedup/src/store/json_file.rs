//! Flat-file JSON storage with atomic replace.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::error::{StorageError, StorageResult};
use crate::types::Ledger;

use super::LedgerStore;

/// JSON file store for the ledger.
///
/// Writes go to a sibling temp file and are renamed into place, so the
/// durable file is whole at all times. Single-writer: concurrent pipeline
/// runs must be serialized externally (e.g. a CI concurrency group); the
/// file itself carries no multi-writer protection.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given file path.
    ///
    /// The file (and its parent directory) may not exist yet; the first
    /// load is then a cold start and the first persist creates both.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[async_trait]
impl LedgerStore for JsonFileStore {
    async fn load(&self) -> StorageResult<Option<Ledger>> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };

        let ledger = serde_json::from_slice(&bytes).map_err(|source| StorageError::Malformed {
            path: self.path.clone(),
            source,
        })?;
        Ok(Some(ledger))
    }

    async fn persist(&self, ledger: &Ledger) -> StorageResult<()> {
        let json = serde_json::to_vec_pretty(ledger).map_err(StorageError::Serialize)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| self.io_error(e))?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &json).await.map_err(|e| self.io_error(e))?;
        fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| self.io_error(e))?;
        Ok(())
    }
}
