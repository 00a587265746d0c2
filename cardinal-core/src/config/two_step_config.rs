use serde::{Deserialize, Serialize};

use super::defaults;

/// Two-step (uncertainty then K-Means) sampler configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TwoStepConfig {
    /// Preselection size as a multiple of the batch size.
    pub beta: usize,
}

impl Default for TwoStepConfig {
    fn default() -> Self {
        Self {
            beta: defaults::DEFAULT_TWO_STEP_BETA,
        }
    }
}
