//! Integration tests for the duplicate-detection pipeline seam.
//!
//! These exercise the full orchestrator workflow:
//! 1. Check a candidate against the ledger
//! 2. On unique, record it (write-after-success)
//! 3. Re-check later candidates against the grown ledger
//! 4. Prune once per run

use dedup::{
    DetectorConfig, DuplicateDetector, DuplicateReason, JsonFileStore, LedgerEntry, MemoryStore,
    ProcessedLedger, Verdict,
};

/// Helper to record a unique verdict the way the orchestrator does.
async fn record(
    ledger: &mut ProcessedLedger<MemoryStore>,
    item_id: &str,
    filename: &str,
    url: Option<&str>,
    verdict: Verdict,
) {
    let Verdict::Unique {
        content_hash,
        keywords,
    } = verdict
    else {
        panic!("expected unique verdict for {item_id}");
    };

    let mut entry = LedgerEntry::new(item_id, content_hash, filename, keywords);
    if let Some(url) = url {
        entry = entry.with_canonical_url(url);
    }
    ledger.append(entry).await.unwrap();
}

#[tokio::test]
async fn test_unique_then_id_exists() {
    let mut ledger = ProcessedLedger::load(MemoryStore::new()).await.unwrap();
    let detector = DuplicateDetector::new(DetectorConfig::default());

    let verdict = detector
        .check(&ledger, "123", "Bitcoin breaks $100k", Some("https://t.co/123"))
        .unwrap();
    assert_eq!(verdict.reason(), DuplicateReason::UniqueContent);

    record(
        &mut ledger,
        "123",
        "2026-08-07-bitcoin.md",
        Some("https://t.co/123"),
        verdict,
    )
    .await;

    // Same ID comes back with different text and URL: the ID decides.
    let second = detector
        .check(&ledger, "123", "different text", Some("https://t.co/999"))
        .unwrap();
    assert_eq!(second.reason(), DuplicateReason::IdExists);
}

#[tokio::test]
async fn test_near_duplicate_below_threshold_publishes() {
    let mut ledger = ProcessedLedger::load(MemoryStore::new()).await.unwrap();
    let detector = DuplicateDetector::new(DetectorConfig::default());

    let verdict = detector
        .check(&ledger, "1", "bitcoin rally breaks resistance", None)
        .unwrap();
    record(&mut ledger, "1", "a.md", None, verdict).await;

    // One extra keyword: Jaccard 4/5 = 0.8, below the 0.85 threshold.
    let near = detector
        .check(&ledger, "2", "bitcoin rally breaks resistance today", None)
        .unwrap();
    assert_eq!(near.reason(), DuplicateReason::UniqueContent);

    // Identical keyword set under a new ID: Jaccard 1.0.
    let exact = detector
        .check(&ledger, "3", "resistance breaks rally bitcoin", None)
        .unwrap();
    assert_eq!(exact.reason(), DuplicateReason::SemanticSimilarity);
    match exact {
        Verdict::Duplicate { matched, similarity, .. } => {
            assert_eq!(matched.item_id, "1");
            assert_eq!(similarity, Some(1.0));
        }
        Verdict::Unique { .. } => unreachable!(),
    }
}

#[tokio::test]
async fn test_tracking_url_and_casing_still_hash_match() {
    let mut ledger = ProcessedLedger::load(MemoryStore::new()).await.unwrap();
    let detector = DuplicateDetector::new(DetectorConfig::default());

    let verdict = detector
        .check(
            &ledger,
            "1",
            "Bitcoin ETF inflows hit records https://t.co/track1",
            Some("https://example.com/a"),
        )
        .unwrap();
    record(&mut ledger, "1", "a.md", Some("https://example.com/a"), verdict).await;

    // New ID, no matching URL, different tracking link and casing: the
    // normalized fingerprint is identical.
    let second = detector
        .check(
            &ledger,
            "2",
            "BITCOIN etf INFLOWS hit records https://t.co/track2",
            Some("https://example.com/b"),
        )
        .unwrap();
    assert_eq!(second.reason(), DuplicateReason::HashMatch);
}

#[tokio::test]
async fn test_full_run_against_file_store() {
    let dir = std::env::temp_dir().join(format!("dedup-it-{}", uuid::Uuid::new_v4()));
    let path = dir.join("processed.json");
    let detector = DuplicateDetector::new(DetectorConfig::default());

    // Run one: cold start, publish one story.
    {
        let mut ledger = ProcessedLedger::load(JsonFileStore::new(&path)).await.unwrap();
        assert!(ledger.is_empty());

        let verdict = detector
            .check(&ledger, "123", "Bitcoin breaks $100k", None)
            .unwrap();
        let Verdict::Unique {
            content_hash,
            keywords,
        } = verdict
        else {
            panic!("expected unique verdict");
        };
        ledger
            .append(LedgerEntry::new("123", content_hash, "bitcoin.md", keywords))
            .await
            .unwrap();
        ledger.prune_older_than(30).await.unwrap();
    }

    // Run two: a fresh process sees the persisted entry.
    {
        let ledger = ProcessedLedger::load(JsonFileStore::new(&path)).await.unwrap();
        assert_eq!(ledger.len(), 1);

        let verdict = detector
            .check(&ledger, "456", "bitcoin   BREAKS $100k", None)
            .unwrap();
        assert_eq!(verdict.reason(), DuplicateReason::HashMatch);
    }

    std::fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn test_retention_sweep_reopens_old_stories() {
    let mut ledger = ProcessedLedger::load(MemoryStore::new()).await.unwrap();
    let detector = DuplicateDetector::new(DetectorConfig::default());

    let verdict = detector
        .check(&ledger, "1", "Bitcoin halving approaches", None)
        .unwrap();
    let Verdict::Unique {
        content_hash,
        keywords,
    } = verdict
    else {
        panic!("expected unique verdict");
    };
    ledger
        .append(
            LedgerEntry::new("1", content_hash, "a.md", keywords)
                .with_processed_at(chrono::Utc::now() - chrono::Duration::days(40)),
        )
        .await
        .unwrap();

    assert_eq!(ledger.prune_older_than(30).await.unwrap(), 1);

    // With the entry pruned, the same story is publishable again.
    let verdict = detector
        .check(&ledger, "1", "Bitcoin halving approaches", None)
        .unwrap();
    assert_eq!(verdict.reason(), DuplicateReason::UniqueContent);
}
