//! Manual inspection tool for the processed-content ledger.
//!
//! The pipeline maintains the ledger on its own; this tool exists for
//! operators poking at it by hand.
//!
//! Usage:
//!   ledger-cli <ledger.json> stats
//!   ledger-cli <ledger.json> show <item-id>
//!   ledger-cli <ledger.json> check <item-id> <text> [url]
//!   ledger-cli <ledger.json> prune [days]

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::env;

use dedup::{DetectorConfig, DuplicateDetector, JsonFileStore, ProcessedLedger, Verdict};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (path, command, rest) = match args.as_slice() {
        [path, command, rest @ ..] => (path.clone(), command.clone(), rest.to_vec()),
        _ => {
            print_usage();
            bail!("expected a ledger path and a command");
        }
    };

    let store = JsonFileStore::new(&path);
    let mut ledger = ProcessedLedger::load(store)
        .await
        .with_context(|| format!("loading ledger from {path}"))?;

    let rest: Vec<&str> = rest.iter().map(String::as_str).collect();
    match (command.as_str(), rest.as_slice()) {
        ("stats", []) => stats(&ledger),
        ("show", [item_id]) => show(&ledger, item_id)?,
        ("check", [item_id, text]) => check(&ledger, item_id, text, None)?,
        ("check", [item_id, text, url]) => check(&ledger, item_id, text, Some(url))?,
        ("prune", []) => prune(&mut ledger, DetectorConfig::default().retention_days).await?,
        ("prune", [days]) => {
            let days = days.parse().context("retention days must be a number")?;
            prune(&mut ledger, days).await?;
        }
        _ => {
            print_usage();
            bail!("unknown command: {command}");
        }
    }

    Ok(())
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  ledger-cli <ledger.json> stats");
    eprintln!("  ledger-cli <ledger.json> show <item-id>");
    eprintln!("  ledger-cli <ledger.json> check <item-id> <text> [url]");
    eprintln!("  ledger-cli <ledger.json> prune [days]");
}

fn stats(ledger: &ProcessedLedger<JsonFileStore>) {
    let snapshot = ledger.ledger();
    println!("{}", "Processed-content ledger".bold());
    println!("  entries:      {}", ledger.len().to_string().bright_green());
    println!("  last updated: {}", snapshot.last_updated);
    println!("  version:      {}", snapshot.version);

    if let Some(oldest) = ledger.entries().iter().map(|e| e.processed_at).min() {
        println!("  oldest entry: {oldest}");
    }
    if let Some(newest) = ledger.entries().iter().map(|e| e.processed_at).max() {
        println!("  newest entry: {newest}");
    }
}

fn show(ledger: &ProcessedLedger<JsonFileStore>, item_id: &str) -> Result<()> {
    match ledger.find_by_item_id(item_id) {
        Some(entry) => {
            println!("{}", serde_json::to_string_pretty(entry)?);
            Ok(())
        }
        None => bail!("no entry with item ID {item_id}"),
    }
}

fn check(
    ledger: &ProcessedLedger<JsonFileStore>,
    item_id: &str,
    text: &str,
    url: Option<&str>,
) -> Result<()> {
    let detector = DuplicateDetector::new(DetectorConfig::default());

    match detector.check(ledger, item_id, text, url)? {
        Verdict::Unique { content_hash, keywords } => {
            println!(
                "{} ({})",
                "unique".bright_green().bold(),
                dedup::DuplicateReason::UniqueContent
            );
            println!("  hash:     {content_hash}");
            println!("  keywords: {}", keywords.join(", "));
        }
        Verdict::Duplicate {
            reason,
            matched,
            similarity,
        } => {
            println!("{} ({})", "duplicate".bright_red().bold(), reason);
            println!("  matched:  {} ({})", matched.item_id, matched.source_filename);
            if let Some(score) = similarity {
                println!("  score:    {score:.3}");
            }
        }
    }

    Ok(())
}

async fn prune(ledger: &mut ProcessedLedger<JsonFileStore>, retention_days: i64) -> Result<()> {
    let pruned = ledger.prune_older_than(retention_days).await?;
    if pruned > 0 {
        println!(
            "{} {} entries older than {} days",
            "pruned".bright_yellow().bold(),
            pruned,
            retention_days
        );
    } else {
        println!("nothing to prune (retention {retention_days} days)");
    }
    Ok(())
}
