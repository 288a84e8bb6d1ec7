//! Generates a driver config of synthetic sensor packages.
//!
//! Run with:
//! ```
//! cargo run -p test-data --bin generate > packages.json
//! WORKOUTS_CONFIG=packages.json cargo run -p workouts
//! ```
//!
//! `TEST_DATA_COUNT` (default 30), `TEST_DATA_SEED` (default 12345) and
//! `TEST_DATA_UNKNOWN` (fraction of unknown codes, default 0) tune the output.

use std::env;

use anyhow::Context;
use test_data::prelude::*;
use tracing_subscriber::EnvFilter;

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> anyhow::Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(value) => value.parse().with_context(|| format!("Invalid {key}: {value}")),
        Err(_) => Ok(default),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let count: usize = env_or("TEST_DATA_COUNT", 30)?;
    let seed: u64 = env_or("TEST_DATA_SEED", 12345)?;
    let unknown: f64 = env_or("TEST_DATA_UNKNOWN", 0.0)?;

    let mut generator = PackageGenerator::new(seed).with_unknown_codes(unknown);
    let config = generator.config(count, ErrorPolicy::Skip);

    println!("{}", serde_json::to_string_pretty(&config)?);

    tracing::info!("Generated {} packages (seed {seed})", config.packages.len());

    Ok(())
}
