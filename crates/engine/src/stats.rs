use crate::options::{DuplicatePolicy, Strategy};
use crate::seed::SeedOptions;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::time::Duration;

/// Wall-clock samples of one strategy, in milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Timing {
    pub samples_ms: Vec<f64>,
    pub min_ms: f64,
    pub mean_ms: f64,
    pub max_ms: f64,
}

impl Timing {
    pub fn from_samples(samples: &[Duration]) -> Self {
        if samples.is_empty() {
            return Self::default();
        }

        let samples_ms: Vec<f64> = samples.iter().map(|d| d.as_secs_f64() * 1_000.0).collect();
        let min_ms = samples_ms.iter().copied().fold(f64::INFINITY, f64::min);
        let max_ms = samples_ms.iter().copied().fold(0.0, f64::max);
        #[allow(clippy::cast_precision_loss)]
        let mean_ms = samples_ms.iter().sum::<f64>() / samples_ms.len() as f64;

        Self {
            samples_ms,
            min_ms,
            mean_ms,
            max_ms,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyReport {
    pub strategy: Strategy,
    pub size: usize,
    pub output_len: usize,
    pub matched: usize,
    pub unmatched: usize,
    pub timing: Timing,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub started_at: DateTime<Local>,
    pub seed: SeedOptions,
    pub on_duplicate: DuplicatePolicy,
    pub iterations: usize,
    pub warmup: usize,
    pub strategies: Vec<StrategyReport>,
}
