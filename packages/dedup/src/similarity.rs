//! Set-overlap similarity between keyword sets.

use std::collections::HashSet;

/// Jaccard index of two keyword sets: intersection size over union size.
///
/// Pure, deterministic, and commutative. Returns 0.0 when either side is
/// empty: an empty keyword set means "cannot assess similarity", and a
/// zero score keeps such candidates out of the semantic-duplicate path.
pub fn jaccard_similarity(a: &[String], b: &[String]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let a: HashSet<&str> = a.iter().map(String::as_str).collect();
    let b: HashSet<&str> = b.iter().map(String::as_str).collect();

    let intersection = a.intersection(&b).count();
    let union = a.union(&b).count();

    intersection as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_identical_sets_score_one() {
        let a = words(&["bitcoin", "rally", "resistance"]);
        assert_eq!(jaccard_similarity(&a, &a), 1.0);
    }

    #[test]
    fn test_disjoint_sets_score_zero() {
        let a = words(&["bitcoin", "rally"]);
        let b = words(&["ethereum", "merge"]);
        assert_eq!(jaccard_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_empty_input_scores_zero() {
        let a = words(&["bitcoin"]);
        assert_eq!(jaccard_similarity(&a, &[]), 0.0);
        assert_eq!(jaccard_similarity(&[], &a), 0.0);
        assert_eq!(jaccard_similarity(&[], &[]), 0.0);
    }

    #[test]
    fn test_partial_overlap() {
        // 4 shared, 5 in the union.
        let a = words(&["bitcoin", "rally", "breaks", "resistance"]);
        let b = words(&["bitcoin", "rally", "breaks", "resistance", "today"]);
        assert_eq!(jaccard_similarity(&a, &b), 0.8);
    }

    #[test]
    fn test_repeated_tokens_use_set_semantics() {
        let a = words(&["bitcoin", "bitcoin", "rally"]);
        let b = words(&["bitcoin", "rally"]);
        assert_eq!(jaccard_similarity(&a, &b), 1.0);
    }

    proptest! {
        #[test]
        fn prop_symmetric(
            a in proptest::collection::vec("[a-z]{1,8}", 0..12),
            b in proptest::collection::vec("[a-z]{1,8}", 0..12),
        ) {
            prop_assert_eq!(jaccard_similarity(&a, &b), jaccard_similarity(&b, &a));
        }

        #[test]
        fn prop_bounded(
            a in proptest::collection::vec("[a-z]{1,8}", 0..12),
            b in proptest::collection::vec("[a-z]{1,8}", 0..12),
        ) {
            let score = jaccard_similarity(&a, &b);
            prop_assert!((0.0..=1.0).contains(&score));
        }

        #[test]
        fn prop_self_similarity_is_one(
            a in proptest::collection::vec("[a-z]{1,8}", 1..12),
        ) {
            prop_assert_eq!(jaccard_similarity(&a, &a), 1.0);
        }
    }
}
