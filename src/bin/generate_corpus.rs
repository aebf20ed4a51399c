//! Utility to generate the synthetic labeled lead corpus and write it to a
//! flat CSV file for the training pipeline.
//!
//! Environment:
//! - `GOOD_LEADS` / `MID_LEADS` / `BAD_LEADS`: segment sample counts
//!   (defaults 5000 / 1500 / 5000).
//! - `CORPUS_SEED`: optional u64 for reproducible runs.
//! - `CORPUS_PATH`: output file (default `Datasets/synthetic_leads.csv`).

use dotenvy::dotenv;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::path::PathBuf;

use stormsales_api::corpus::write_corpus_csv;
use stormsales_api::generator::{generate_corpus, GeneratorConfig};

fn env_count(name: &str, default: usize) -> anyhow::Result<usize> {
    match env::var(name) {
        Ok(raw) => raw
            .parse::<usize>()
            .map_err(|_| anyhow::anyhow!("{} must be a non-negative integer, got '{}'", name, raw)),
        Err(_) => Ok(default),
    }
}

/// Main entry point for the corpus generation utility.
///
/// Validates the segment configuration, samples every segment in order,
/// applies the score-consistency overrides, and writes the CSV.
fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stormsales_api=info,generate_corpus=info".into()),
        )
        .init();

    let good = env_count("GOOD_LEADS", 5000)?;
    let mid = env_count("MID_LEADS", 1500)?;
    let bad = env_count("BAD_LEADS", 5000)?;
    let path = PathBuf::from(
        env::var("CORPUS_PATH").unwrap_or_else(|_| "Datasets/synthetic_leads.csv".to_string()),
    );

    let mut rng = match env::var("CORPUS_SEED") {
        Ok(raw) => {
            let seed = raw
                .parse::<u64>()
                .map_err(|_| anyhow::anyhow!("CORPUS_SEED must be a u64, got '{}'", raw))?;
            tracing::info!("Using fixed corpus seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        Err(_) => StdRng::from_entropy(),
    };

    let config = GeneratorConfig::with_counts(good, mid, bad);
    tracing::info!(
        "Generating corpus: good={}, mid={}, bad={} ({} total)",
        good,
        mid,
        bad,
        config.total()
    );

    let leads = generate_corpus(&config, &mut rng)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    write_corpus_csv(&path, &leads)?;

    tracing::info!("Wrote {} leads to {}", leads.len(), path.display());
    Ok(())
}
