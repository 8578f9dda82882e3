//! Keyword extraction - reduce text to a bounded set of topical tokens.
//!
//! Tokenization is Unicode-aware and deliberately permissive: CJK
//! ideographs count as alphanumeric, so tokens from bilingual feeds pass
//! through intact. An input with zero qualifying tokens yields an empty
//! set, which downstream means "cannot assess similarity", never an error.

use std::collections::HashSet;

/// English stop words (articles, prepositions, conjunctions, auxiliaries).
const ENGLISH_STOP_WORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "can", "had", "her", "was", "one",
    "our", "out", "has", "have", "this", "that", "these", "those", "with", "from", "they", "will",
    "would", "could", "should", "been", "being", "were", "what", "when", "where", "which", "who",
    "whom", "why", "how", "than", "then", "them", "there", "here", "about", "into", "over",
    "under", "again", "once", "only", "just", "also", "very", "more", "most", "some", "such",
    "does", "did", "its",
];

/// Chinese function words for the bilingual feeds.
const CHINESE_STOP_WORDS: &[&str] = &[
    "的", "了", "是", "在", "和", "就", "都", "而", "及", "与", "着", "或", "一个", "没有",
    "我们", "你们", "他们", "这个", "那个", "这些", "那些", "因为", "所以", "但是", "而且",
];

/// Extracts a bounded, ordered keyword set from raw text.
///
/// Defaults match the pipeline's matching contract: tokens shorter than
/// three characters are noise, stop words are dropped, survivors are
/// lowercased and deduplicated in first-seen order, capped at twenty.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    stop_words: HashSet<String>,
    min_token_chars: usize,
    max_keywords: usize,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordExtractor {
    /// Create an extractor with the default bilingual stop word set.
    pub fn new() -> Self {
        let stop_words = ENGLISH_STOP_WORDS
            .iter()
            .chain(CHINESE_STOP_WORDS)
            .map(|w| (*w).to_string())
            .collect();

        Self {
            stop_words,
            min_token_chars: 3,
            max_keywords: crate::types::MAX_KEYWORDS,
        }
    }

    /// Add custom stop words (e.g. feed-specific boilerplate).
    pub fn with_stop_words(mut self, words: &[&str]) -> Self {
        self.stop_words
            .extend(words.iter().map(|w| w.to_lowercase()));
        self
    }

    /// Set the minimum token length in characters.
    pub fn with_min_token_chars(mut self, chars: usize) -> Self {
        self.min_token_chars = chars;
        self
    }

    /// Set the maximum number of keywords to extract.
    pub fn with_max_keywords(mut self, max: usize) -> Self {
        self.max_keywords = max;
        self
    }

    /// Extract keywords from `text`.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut keywords = Vec::new();

        for token in text.split(|c: char| !c.is_alphanumeric()) {
            if token.chars().count() < self.min_token_chars {
                continue;
            }

            let token = token.to_lowercase();
            if self.stop_words.contains(&token) {
                continue;
            }
            if !seen.insert(token.clone()) {
                continue;
            }

            keywords.push(token);
            if keywords.len() == self.max_keywords {
                break;
            }
        }

        keywords
    }
}
