// crates/engine/src/lib.rs
use chrono::Local;

pub mod config;
pub mod error;
pub mod index;
pub mod join;
pub mod model;
pub mod options;
pub mod runner;
pub mod seed;
pub mod stats;

pub use crate::join::{aggregate, aggregate_with_index};

use crate::config::Config;
use crate::error::Result;
use crate::seed::Dataset;
use crate::stats::RunReport;

/// Seed the input collections and time every configured strategy on them.
///
/// All strategies share one dataset, so their timings are comparable.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or a strategy rejects
/// duplicate preference ids.
pub fn run(config: &Config) -> Result<RunReport> {
    config.validate()?;

    let started_at = Local::now();
    let dataset = Dataset::seed(&config.seed);
    log::info!(
        "start ... {} customers, {} preferences",
        dataset.customers.len(),
        dataset.preferences.len()
    );

    let strategies = config
        .strategies
        .iter()
        .map(|&strategy| runner::run_strategy(strategy, &dataset, config))
        .collect::<Result<Vec<_>>>()?;

    Ok(RunReport {
        started_at,
        seed: config.seed.clone(),
        on_duplicate: config.on_duplicate,
        iterations: config.iterations,
        warmup: config.warmup,
        strategies,
    })
}
