use serde::{Deserialize, Serialize};

use super::defaults;

/// Adaptive sampler configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdaptiveConfig {
    /// Labeled-set size up to which the exploration sampler is used.
    pub switch_threshold: usize,
}

impl Default for AdaptiveConfig {
    fn default() -> Self {
        Self {
            switch_threshold: defaults::DEFAULT_SWITCH_THRESHOLD,
        }
    }
}
