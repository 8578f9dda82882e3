//! In-memory storage for testing and development.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::types::Ledger;

use super::LedgerStore;

/// In-memory ledger store.
///
/// Useful for testing and development. Not suitable for production as
/// state is lost on drop.
#[derive(Default)]
pub struct MemoryStore {
    ledger: RwLock<Option<Ledger>>,
}

impl MemoryStore {
    /// Create an empty store; the first load is a cold start.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a ledger.
    pub fn with_ledger(ledger: Ledger) -> Self {
        Self {
            ledger: RwLock::new(Some(ledger)),
        }
    }

    /// Number of persisted entries (0 before the first persist).
    pub fn entry_count(&self) -> usize {
        self.ledger
            .read()
            .unwrap()
            .as_ref()
            .map_or(0, |l| l.entries.len())
    }
}

#[async_trait]
impl LedgerStore for MemoryStore {
    async fn load(&self) -> StorageResult<Option<Ledger>> {
        Ok(self.ledger.read().unwrap().clone())
    }

    async fn persist(&self, ledger: &Ledger) -> StorageResult<()> {
        *self.ledger.write().unwrap() = Some(ledger.clone());
        Ok(())
    }
}
