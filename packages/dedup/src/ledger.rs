//! The processed-content ledger - the system of record for "have we seen
//! this before".
//!
//! One snapshot is loaded per pipeline run and written incrementally
//! through the storage adapter: one persist per accepted item, one for
//! the retention sweep. Lookups run against the in-memory snapshot.

use chrono::{Duration, Utc};
use tracing::{debug, info};

use crate::error::Result;
use crate::store::LedgerStore;
use crate::types::{Ledger, LedgerEntry};

/// Durable record of previously processed content items.
pub struct ProcessedLedger<S: LedgerStore> {
    store: S,
    ledger: Ledger,
}

impl<S: LedgerStore> ProcessedLedger<S> {
    /// Load persisted state through the given store.
    ///
    /// Absent state is a cold start and yields a fresh, empty ledger.
    /// A corrupt or unreadable backing store propagates as a storage
    /// error instead, so the run aborts rather than republishing.
    pub async fn load(store: S) -> Result<Self> {
        let ledger = match store.load().await? {
            Some(ledger) => {
                debug!(entries = ledger.entries.len(), "Loaded processed ledger");
                ledger
            }
            None => {
                info!("No prior ledger found, starting cold");
                Ledger::new()
            }
        };

        Ok(Self { store, ledger })
    }

    /// Exact lookup by external item ID.
    pub fn find_by_item_id(&self, item_id: &str) -> Option<&LedgerEntry> {
        self.ledger.entries.iter().find(|e| e.item_id == item_id)
    }

    /// Exact lookup by content fingerprint.
    pub fn find_by_hash(&self, hash: &str) -> Option<&LedgerEntry> {
        self.ledger.entries.iter().find(|e| e.content_hash == hash)
    }

    /// Exact lookup by canonical URL.
    ///
    /// Only matches entries that recorded a URL; entries without one never
    /// match, regardless of the query.
    pub fn find_by_url(&self, url: &str) -> Option<&LedgerEntry> {
        self.ledger
            .entries
            .iter()
            .find(|e| e.canonical_url.as_deref() == Some(url))
    }

    /// All retained entries, insertion order.
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.ledger.entries
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.ledger.entries.len()
    }

    /// Whether the ledger holds no entries.
    pub fn is_empty(&self) -> bool {
        self.ledger.entries.is_empty()
    }

    /// The underlying snapshot, for inspection tooling.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Record a successfully published item and persist the result.
    ///
    /// Call this only after the artifact write succeeded: an item that
    /// failed downstream must stay unknown to the ledger so the next run
    /// retries it.
    pub async fn append(&mut self, entry: LedgerEntry) -> Result<()> {
        info!(
            item_id = %entry.item_id,
            filename = %entry.source_filename,
            keywords = entry.keywords.len(),
            "Recording processed item"
        );

        self.ledger.entries.push(entry);
        self.ledger.last_updated = Utc::now();
        self.store.persist(&self.ledger).await?;
        Ok(())
    }

    /// Drop entries older than the retention window and persist the result.
    ///
    /// Entries within the window are never removed. Returns the number of
    /// entries pruned; a sweep that removes nothing leaves the backing
    /// store untouched.
    pub async fn prune_older_than(&mut self, retention_days: i64) -> Result<usize> {
        let cutoff = Utc::now() - Duration::days(retention_days);
        let before = self.ledger.entries.len();
        self.ledger.entries.retain(|e| !e.is_older_than(cutoff));
        let pruned = before - self.ledger.entries.len();

        if pruned > 0 {
            info!(pruned, retention_days, "Pruned expired ledger entries");
            self.ledger.last_updated = Utc::now();
            self.store.persist(&self.ledger).await?;
        } else {
            debug!(retention_days, "No ledger entries past retention");
        }

        Ok(pruned)
    }
}
