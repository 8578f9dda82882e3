//! Duplicate Detection & Processed-Content Ledger
//!
//! The publication gate for an automated article pipeline: before a story
//! is rendered, [`DuplicateDetector::check`] classifies it against every
//! previously published item; after the artifact is written, the caller
//! records it in the [`ProcessedLedger`].
//!
//! # Design
//!
//! - Checks run cheapest and most certain first: exact item ID, content
//!   fingerprint, canonical URL, then keyword-overlap similarity.
//! - `check` never mutates. Recording is a separate write-after-success
//!   step, so an item that fails downstream stays retryable.
//! - Persistence sits behind the [`LedgerStore`] trait. The flat JSON
//!   file adapter writes atomically and treats a missing file as a cold
//!   start; any other storage fault aborts the run.
//!
//! # Usage
//!
//! ```rust,ignore
//! use dedup::{
//!     DetectorConfig, DuplicateDetector, JsonFileStore, LedgerEntry,
//!     ProcessedLedger, Verdict,
//! };
//!
//! let store = JsonFileStore::new("data/processed.json");
//! let mut ledger = ProcessedLedger::load(store).await?;
//! let detector = DuplicateDetector::new(DetectorConfig::default());
//!
//! match detector.check(&ledger, item_id, text, Some(url))? {
//!     Verdict::Unique { content_hash, keywords } => {
//!         // ... render and write the article, then:
//!         let entry = LedgerEntry::new(item_id, content_hash, filename, keywords)
//!             .with_canonical_url(url);
//!         ledger.append(entry).await?;
//!     }
//!     Verdict::Duplicate { reason, .. } => {
//!         tracing::info!(%reason, "Skipping duplicate");
//!     }
//! }
//!
//! ledger.prune_older_than(30).await?;
//! ```
//!
//! # Modules
//!
//! - [`detector`] - verdict classification with ordered checks
//! - [`fingerprint`] - content normalization and SHA-256 digests
//! - [`keywords`] - bounded keyword extraction for similarity scoring
//! - [`similarity`] - Jaccard overlap between keyword sets
//! - [`ledger`] - the processed-content ledger
//! - [`store`] - storage adapters (JSON file, in-memory)
//! - [`error`] - typed error taxonomy

pub mod detector;
pub mod error;
pub mod fingerprint;
pub mod keywords;
pub mod ledger;
pub mod similarity;
pub mod store;
pub mod types;

// Re-export the core API at the crate root
pub use detector::{DetectorConfig, DuplicateDetector, DuplicateReason, Verdict};
pub use error::{DedupError, Result, StorageError};
pub use fingerprint::{hash_content, normalize_content};
pub use keywords::KeywordExtractor;
pub use ledger::ProcessedLedger;
pub use similarity::jaccard_similarity;
pub use store::{JsonFileStore, LedgerStore, MemoryStore};
pub use types::{Ledger, LedgerEntry, LEDGER_SCHEMA_VERSION, MAX_KEYWORDS};
