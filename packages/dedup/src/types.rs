//! Ledger data model - processed entries and the persisted container.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Schema version written to freshly created ledgers.
pub const LEDGER_SCHEMA_VERSION: &str = "1.0";

/// Upper bound on keywords stored per entry.
pub const MAX_KEYWORDS: usize = 20;

/// One successfully processed content item.
///
/// An entry is created only after the item is confirmed unique AND its
/// artifact was written (write-after-success, so failed generations stay
/// retryable). It is never mutated afterwards and is removed only by the
/// retention sweep.
///
/// Serialized field names are the pipeline's historical wire layout, which
/// predates this crate and is shared with inspection tooling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// External identifier of the source item (e.g. a tweet ID)
    #[serde(rename = "tweetId")]
    pub item_id: String,

    /// SHA-256 hex digest of the normalized content (64 chars)
    #[serde(rename = "contentHash")]
    pub content_hash: String,

    /// When the item was processed; set at insertion
    #[serde(rename = "processedDate")]
    pub processed_at: DateTime<Utc>,

    /// Filename of the generated artifact
    #[serde(rename = "filename")]
    pub source_filename: String,

    /// Origin URL of the content, when known
    #[serde(rename = "tweetUrl", default, skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,

    /// Topical keywords derived once at insertion (at most
    /// [`MAX_KEYWORDS`], lowercase, first-seen order)
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Audit metadata (author, content excerpt, ...) carried verbatim and
    /// ignored by matching logic
    #[serde(flatten)]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl LedgerEntry {
    /// Create an entry for a freshly published artifact.
    ///
    /// Keywords beyond [`MAX_KEYWORDS`] are discarded.
    pub fn new(
        item_id: impl Into<String>,
        content_hash: impl Into<String>,
        source_filename: impl Into<String>,
        mut keywords: Vec<String>,
    ) -> Self {
        keywords.truncate(MAX_KEYWORDS);

        Self {
            item_id: item_id.into(),
            content_hash: content_hash.into(),
            processed_at: Utc::now(),
            source_filename: source_filename.into(),
            canonical_url: None,
            keywords,
            metadata: HashMap::new(),
        }
    }

    /// Set the origin URL.
    pub fn with_canonical_url(mut self, url: impl Into<String>) -> Self {
        self.canonical_url = Some(url.into());
        self
    }

    /// Override the processed timestamp.
    pub fn with_processed_at(mut self, processed_at: DateTime<Utc>) -> Self {
        self.processed_at = processed_at;
        self
    }

    /// Attach an audit metadata field.
    pub fn with_metadata(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Whether this entry falls outside the retention cutoff.
    pub fn is_older_than(&self, cutoff: DateTime<Utc>) -> bool {
        self.processed_at < cutoff
    }
}

/// The persisted container of processed items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    /// Entries in insertion order, bounded only by retention pruning
    #[serde(rename = "processedTweets", default)]
    pub entries: Vec<LedgerEntry>,

    /// Updated on every mutating operation
    #[serde(rename = "lastUpdated")]
    pub last_updated: DateTime<Utc>,

    /// Schema version for forward compatibility
    #[serde(rename = "version")]
    pub version: String,
}

impl Ledger {
    /// Fresh, empty ledger at the current schema version.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            last_updated: Utc::now(),
            version: LEDGER_SCHEMA_VERSION.to_string(),
        }
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
