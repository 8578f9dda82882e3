//! Ledger storage adapters.
//!
//! Persistence is an interchangeable adapter behind the [`LedgerStore`]
//! trait: a durable JSON file for pipeline runs, an in-memory store for
//! testing and development. The detector itself never touches storage.

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::types::Ledger;

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Storage backend for the processed-content ledger.
///
/// Absent state is a cold start (`Ok(None)`), not an error. Any other
/// fault propagates to the caller, which must decide whether to abort the
/// run or proceed cold.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Read persisted state, if any exists.
    async fn load(&self) -> StorageResult<Option<Ledger>>;

    /// Durably replace persisted state.
    ///
    /// The write must be atomic: a reader never observes a partially
    /// written ledger.
    async fn persist(&self, ledger: &Ledger) -> StorageResult<()>;
}
