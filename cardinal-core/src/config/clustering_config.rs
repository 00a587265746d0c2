use serde::{Deserialize, Serialize};

use super::defaults;

/// K-Means clustering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusteringConfig {
    /// Maximum Lloyd iterations per run.
    pub max_iter: usize,
    /// Stop once no centroid moves more than this (Euclidean).
    pub tolerance: f64,
    /// Number of seeded restarts; the lowest inertia wins.
    pub n_init: usize,
    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            max_iter: defaults::DEFAULT_KMEANS_MAX_ITER,
            tolerance: defaults::DEFAULT_KMEANS_TOLERANCE,
            n_init: defaults::DEFAULT_KMEANS_N_INIT,
            seed: None,
        }
    }
}
