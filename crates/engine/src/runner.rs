use crate::config::Config;
use crate::error::Result;
use crate::index::PreferenceIndex;
use crate::join;
use crate::model::CustomerAggregate;
use crate::options::Strategy;
use crate::seed::Dataset;
use crate::stats::{StrategyReport, Timing};
use std::hint::black_box;
use std::time::Instant;

/// Time one strategy against an already seeded dataset.
///
/// Seeding and, for [`Strategy::PreIndexed`], index construction happen
/// outside the measured region.
///
/// # Errors
///
/// Propagates duplicate-key errors raised under a rejecting policy.
pub fn run_strategy(
    strategy: Strategy,
    dataset: &Dataset,
    config: &Config,
) -> Result<StrategyReport> {
    let index = match strategy {
        Strategy::PreIndexed => Some(PreferenceIndex::build(
            &dataset.preferences,
            config.on_duplicate,
        )?),
        _ => None,
    };

    let execute = || -> Result<Vec<CustomerAggregate>> {
        match &index {
            Some(index) => Ok(join::aggregate_with_index(&dataset.customers, index)),
            None => join::aggregate(
                &dataset.customers,
                &dataset.preferences,
                strategy,
                config.on_duplicate,
            ),
        }
    };

    for _ in 0..config.warmup {
        black_box(execute()?);
    }

    let mut samples = Vec::with_capacity(config.iterations);
    let mut output = Vec::new();
    for _ in 0..config.iterations {
        let start = Instant::now();
        output = black_box(execute()?);
        samples.push(start.elapsed());
    }

    let matched = output.iter().filter(|a| a.is_matched()).count();
    let timing = Timing::from_samples(&samples);
    log::info!(
        "{strategy}: {} customers in {:.3} ms (mean of {})",
        dataset.customers.len(),
        timing.mean_ms,
        samples.len()
    );

    Ok(StrategyReport {
        strategy,
        size: dataset.customers.len(),
        output_len: output.len(),
        matched,
        unmatched: output.len() - matched,
        timing,
    })
}
