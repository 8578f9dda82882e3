//! Content fingerprinting - normalization plus a stable SHA-256 digest.
//!
//! The fingerprint is the first line of duplicate defense: two texts that
//! differ only in casing, embedded links, or whitespace density must hash
//! identically.

use std::sync::LazyLock;

use regex::Regex;
use sha2::{Digest, Sha256};

use crate::error::{DedupError, Result};

/// Matches `scheme://...` tokens so tracking links never affect the digest.
static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z][a-zA-Z0-9+.-]*://\S+").unwrap());

/// Normalize text for consistent hashing.
///
/// Steps run in order and each is idempotent: strip URL-like tokens,
/// collapse whitespace runs to a single space, lowercase, trim.
pub fn normalize_content(content: &str) -> String {
    let stripped = URL_PATTERN.replace_all(content, "");
    stripped
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Compute the SHA-256 fingerprint of normalized content, as lowercase hex.
///
/// Fails on empty input; an item with no content is a caller bug, not a
/// hashable document.
pub fn hash_content(content: &str) -> Result<String> {
    if content.is_empty() {
        return Err(DedupError::invalid_input("cannot fingerprint empty content"));
    }

    let normalized = normalize_content(content);
    let mut hasher = Sha256::new();
    hasher.update(normalized.as_bytes());
    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_hash_is_64_hex_chars() {
        let hash = hash_content("Bitcoin breaks $100k").unwrap();
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_empty_content_rejected() {
        assert!(matches!(
            hash_content(""),
            Err(DedupError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_case_and_whitespace_invariance() {
        assert_eq!(
            hash_content("Bitcoin is UP").unwrap(),
            hash_content("  bitcoin   is up  ").unwrap()
        );
    }

    #[test]
    fn test_url_stripping_invariance() {
        assert_eq!(
            hash_content("Check https://x.co/1 now").unwrap(),
            hash_content("Check now").unwrap()
        );
        assert_eq!(
            hash_content("Read ftp://mirror.example/file then decide").unwrap(),
            hash_content("Read then decide").unwrap()
        );
    }

    #[test]
    fn test_distinct_content_distinct_hash() {
        assert_ne!(
            hash_content("Bitcoin breaks $100k").unwrap(),
            hash_content("Ethereum breaks $10k").unwrap()
        );
    }

    #[test]
    fn test_url_only_content_hashes_empty_normal_form() {
        // Normalizes to the empty string but still yields a stable digest.
        let a = hash_content("https://t.co/abc").unwrap();
        let b = hash_content("https://t.co/xyz").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_content("Check https://x.co/1  NOW  ");
        assert_eq!(normalize_content(&once), once);
    }

    #[test]
    fn test_cjk_content_survives_normalization() {
        let normalized = normalize_content("比特币 突破 新高 https://t.co/1");
        assert_eq!(normalized, "比特币 突破 新高");
    }

    proptest! {
        #[test]
        fn prop_hash_is_deterministic(text in ".{1,200}") {
            prop_assert_eq!(hash_content(&text).unwrap(), hash_content(&text).unwrap());
        }

        #[test]
        fn prop_hash_ignores_surrounding_whitespace(text in "[a-z0-9 ]{1,80}") {
            let padded = format!("  {text}\t\n ");
            prop_assert_eq!(hash_content(&padded).unwrap(), hash_content(&text).unwrap());
        }

        #[test]
        fn prop_hash_ignores_case(text in "[a-zA-Z ]{1,80}") {
            prop_assert_eq!(
                hash_content(&text.to_uppercase()).unwrap(),
                hash_content(&text.to_lowercase()).unwrap()
            );
        }

        #[test]
        fn prop_hash_length_stable(text in ".{1,200}") {
            prop_assert_eq!(hash_content(&text).unwrap().len(), 64);
        }
    }
}
