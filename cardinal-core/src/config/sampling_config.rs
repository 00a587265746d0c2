use serde::{Deserialize, Serialize};

use super::defaults;

/// Settings shared by every batch sampler.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Number of samples selected per call.
    pub batch_size: usize,
    /// Scored selection policy: "top", "linear_choice" or "squared_choice".
    /// Parsed when samples are selected.
    pub strategy: String,
    /// RNG seed for randomized samplers. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            batch_size: defaults::DEFAULT_BATCH_SIZE,
            strategy: defaults::DEFAULT_STRATEGY.to_string(),
            seed: None,
        }
    }
}
