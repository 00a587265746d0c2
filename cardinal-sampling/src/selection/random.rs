//! Uniform random selection.

use rand::rngs::StdRng;
use tracing::info;

use cardinal_core::config::SamplingConfig;
use cardinal_core::errors::CardinalResult;
use cardinal_core::traits::IQuerySampler;
use cardinal_core::FeatureMatrix;

use crate::utils::{ensure_candidates, make_rng};

/// Picks `batch_size` distinct rows uniformly at random.
pub struct RandomSampler {
    batch_size: usize,
    rng: StdRng,
}

impl RandomSampler {
    pub fn new(batch_size: usize, seed: Option<u64>) -> Self {
        Self {
            batch_size,
            rng: make_rng(seed),
        }
    }

    pub fn from_config(config: &SamplingConfig) -> Self {
        Self::new(config.batch_size, config.seed)
    }
}

impl IQuerySampler for RandomSampler {
    fn name(&self) -> &str {
        "random"
    }

    fn batch_size(&self) -> usize {
        self.batch_size
    }

    fn select_samples(&mut self, x: &FeatureMatrix) -> CardinalResult<Vec<usize>> {
        ensure_candidates(self.batch_size, x.n_rows())?;
        let selected =
            rand::seq::index::sample(&mut self.rng, x.n_rows(), self.batch_size).into_vec();
        info!(
            sampler = "random",
            batch_size = self.batch_size,
            pool_size = x.n_rows(),
            "random selection complete"
        );
        Ok(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn picks_distinct_rows_reproducibly() {
        let x = FeatureMatrix::from_column(&[0.0; 20]);
        let a = RandomSampler::new(8, Some(3)).select_samples(&x).unwrap();
        let b = RandomSampler::new(8, Some(3)).select_samples(&x).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.iter().collect::<HashSet<_>>().len(), 8);
        assert!(a.iter().all(|&i| i < 20));
    }

    #[test]
    fn rejects_oversized_batch() {
        let x = FeatureMatrix::from_column(&[0.0; 2]);
        assert!(RandomSampler::new(3, None).select_samples(&x).is_err());
    }
}
