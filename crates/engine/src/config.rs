use crate::error::{EngineError, Result};
use crate::options::{DuplicatePolicy, OutputFormat, Strategy};
use crate::seed::SeedOptions;
use derive_builder::Builder;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default = "vec![Strategy::HashJoin]")]
    pub strategies: Vec<Strategy>,
    #[builder(default)]
    pub seed: SeedOptions,
    #[builder(default = "1")]
    pub iterations: usize,
    #[builder(default)]
    pub warmup: usize,
    #[builder(default)]
    pub on_duplicate: DuplicatePolicy,

    #[builder(default = "OutputFormat::Table")]
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategies: vec![Strategy::HashJoin],
            seed: SeedOptions::default(),
            iterations: 1,
            warmup: 0,
            on_duplicate: DuplicatePolicy::default(),
            format: OutputFormat::Table,
        }
    }
}

impl Config {
    /// Reject settings the runner cannot honour.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] naming the offending setting.
    pub fn validate(&self) -> Result<()> {
        if self.strategies.is_empty() {
            return Err(EngineError::Config("no strategy selected".into()));
        }
        if self.iterations == 0 {
            return Err(EngineError::Config("iterations must be at least 1".into()));
        }
        if self.seed.sparse_every == Some(0) {
            return Err(EngineError::Config("sparse_every must be at least 1".into()));
        }
        if self.seed.duplicate_every == Some(0) {
            return Err(EngineError::Config("duplicate_every must be at least 1".into()));
        }
        Ok(())
    }
}
