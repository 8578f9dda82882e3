//! Duplicate classification against the processed-content ledger.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{DedupError, Result};
use crate::fingerprint::hash_content;
use crate::keywords::KeywordExtractor;
use crate::ledger::ProcessedLedger;
use crate::similarity::jaccard_similarity;
use crate::store::LedgerStore;
use crate::types::LedgerEntry;

/// Reason code attached to every verdict.
///
/// Serializes as the pipeline's snake_case reason strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateReason {
    /// The exact item ID was already processed
    IdExists,
    /// The normalized content fingerprint matches a retained entry
    HashMatch,
    /// The canonical URL matches a retained entry
    UrlMatch,
    /// Keyword overlap with a retained entry exceeds the threshold
    SemanticSimilarity,
    /// No check matched; the item is new
    UniqueContent,
}

impl std::fmt::Display for DuplicateReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::IdExists => "id_exists",
            Self::HashMatch => "hash_match",
            Self::UrlMatch => "url_match",
            Self::SemanticSimilarity => "semantic_similarity",
            Self::UniqueContent => "unique_content",
        })
    }
}

/// Outcome of a duplicate check.
#[derive(Debug, Clone)]
pub enum Verdict {
    /// The candidate matches a retained entry and must not be republished.
    Duplicate {
        reason: DuplicateReason,
        /// The retained entry that matched (the best-scoring one for
        /// semantic matches)
        matched: Box<LedgerEntry>,
        /// Jaccard score, present for semantic matches
        similarity: Option<f64>,
    },
    /// The candidate is new.
    ///
    /// Carries the computed fingerprint and extracted keywords so the
    /// caller can build the [`LedgerEntry`] without re-deriving them.
    Unique {
        content_hash: String,
        keywords: Vec<String>,
    },
}

impl Verdict {
    /// Whether the candidate must be skipped.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }

    /// The reason code for this verdict.
    pub fn reason(&self) -> DuplicateReason {
        match self {
            Self::Duplicate { reason, .. } => *reason,
            Self::Unique { .. } => DuplicateReason::UniqueContent,
        }
    }
}

/// Configuration for duplicate detection.
///
/// The defaults are the pipeline's operating constants; the orchestrator
/// may override both when constructing the detector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Jaccard score a retained entry must exceed to count as a semantic
    /// duplicate
    pub similarity_threshold: f64,

    /// Days an entry stays in the ledger before the retention sweep is
    /// allowed to drop it
    pub retention_days: i64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.85,
            retention_days: 30,
        }
    }
}

impl DetectorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    pub fn with_retention_days(mut self, days: i64) -> Self {
        self.retention_days = days;
        self
    }
}

/// Classifies candidate content items against the ledger.
///
/// `check` is a pure read; recording an accepted item is the caller's
/// separate write-after-success step.
pub struct DuplicateDetector {
    config: DetectorConfig,
    keywords: KeywordExtractor,
}

impl DuplicateDetector {
    pub fn new(config: DetectorConfig) -> Self {
        Self {
            config,
            keywords: KeywordExtractor::new(),
        }
    }

    /// Replace the default keyword extractor (custom stop words or caps).
    pub fn with_keyword_extractor(mut self, keywords: KeywordExtractor) -> Self {
        self.keywords = keywords;
        self
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Classify one candidate against the ledger.
    ///
    /// Checks run cheapest and most certain first; the first hit wins:
    /// exact item ID, content fingerprint, canonical URL (when provided),
    /// then keyword overlap against every retained entry.
    pub fn check<S: LedgerStore>(
        &self,
        ledger: &ProcessedLedger<S>,
        item_id: &str,
        text: &str,
        url: Option<&str>,
    ) -> Result<Verdict> {
        if item_id.is_empty() {
            return Err(DedupError::invalid_input("item ID must not be empty"));
        }
        if text.is_empty() {
            return Err(DedupError::invalid_input("content must not be empty"));
        }

        if let Some(entry) = ledger.find_by_item_id(item_id) {
            debug!(item_id, "Item ID already processed");
            return Ok(duplicate(DuplicateReason::IdExists, entry, None));
        }

        let content_hash = hash_content(text)?;
        if let Some(entry) = ledger.find_by_hash(&content_hash) {
            debug!(item_id, matched_id = %entry.item_id, "Content fingerprint already processed");
            return Ok(duplicate(DuplicateReason::HashMatch, entry, None));
        }

        if let Some(url) = url {
            if let Some(entry) = ledger.find_by_url(url) {
                debug!(item_id, url, matched_id = %entry.item_id, "Canonical URL already processed");
                return Ok(duplicate(DuplicateReason::UrlMatch, entry, None));
            }
        }

        let candidate_keywords = self.keywords.extract(text);
        let mut best: Option<(&LedgerEntry, f64)> = None;
        for entry in ledger.entries() {
            let score = jaccard_similarity(&candidate_keywords, &entry.keywords);
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((entry, score));
            }
        }

        if let Some((entry, score)) = best {
            if score > self.config.similarity_threshold {
                info!(
                    item_id,
                    matched_id = %entry.item_id,
                    score,
                    "Semantic near-duplicate"
                );
                return Ok(duplicate(
                    DuplicateReason::SemanticSimilarity,
                    entry,
                    Some(score),
                ));
            }
        }

        debug!(item_id, keywords = candidate_keywords.len(), "Content is new");
        Ok(Verdict::Unique {
            content_hash,
            keywords: candidate_keywords,
        })
    }
}

fn duplicate(reason: DuplicateReason, matched: &LedgerEntry, similarity: Option<f64>) -> Verdict {
    Verdict::Duplicate {
        reason,
        matched: Box::new(matched.clone()),
        similarity,
    }
}
