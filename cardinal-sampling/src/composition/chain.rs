//! Successive narrowing: each sampler selects within the previous selection.

use tracing::{debug, info};

use cardinal_core::errors::{CardinalResult, SamplingError};
use cardinal_core::traits::IQuerySampler;
use cardinal_core::{FeatureMatrix, Label};

use crate::utils::map_back;

/// Runs samplers in order. The first selects over the whole pool; each
/// following sampler is fit on the current selection and selects within
/// it. The result is always a subset of the first sampler's output.
pub struct ChainSampler {
    samplers: Vec<Box<dyn IQuerySampler>>,
}

impl ChainSampler {
    pub fn new(samplers: Vec<Box<dyn IQuerySampler>>) -> CardinalResult<Self> {
        if samplers.is_empty() {
            return Err(
                SamplingError::invalid_configuration("a sampler chain needs at least one sampler")
                    .into(),
            );
        }
        Ok(Self { samplers })
    }

    pub fn len(&self) -> usize {
        self.samplers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samplers.is_empty()
    }
}

impl IQuerySampler for ChainSampler {
    fn name(&self) -> &str {
        "chain"
    }

    /// Size of the final selection.
    fn batch_size(&self) -> usize {
        self.samplers.last().map_or(0, |s| s.batch_size())
    }

    /// Only the first sampler sees the labeled data.
    fn fit(&mut self, x: &FeatureMatrix, y: Option<&[Label]>) -> CardinalResult<()> {
        match self.samplers.first_mut() {
            Some(first) => first.fit(x, y),
            None => Ok(()),
        }
    }

    fn select_samples(&mut self, x: &FeatureMatrix) -> CardinalResult<Vec<usize>> {
        let Some((first, rest)) = self.samplers.split_first_mut() else {
            return Err(SamplingError::invalid_configuration("empty sampler chain").into());
        };
        let mut selected = first.select_samples(x)?;
        debug!(stage = first.name(), selected = selected.len(), "chain stage");

        for sampler in rest {
            let subset = x.select_rows(&selected)?;
            sampler.fit(&subset, None)?;
            let inner = sampler.select_samples(&subset)?;
            selected = map_back(&selected, &inner)?;
            debug!(stage = sampler.name(), selected = selected.len(), "chain stage");
        }

        info!(
            sampler = "chain",
            stages = self.samplers.len(),
            batch_size = selected.len(),
            pool_size = x.n_rows(),
            "chain selection complete"
        );
        Ok(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardinal_core::CardinalError;

    /// Selects the last `n` rows.
    struct Tail(usize);

    impl IQuerySampler for Tail {
        fn name(&self) -> &str {
            "tail"
        }

        fn batch_size(&self) -> usize {
            self.0
        }

        fn select_samples(&mut self, x: &FeatureMatrix) -> CardinalResult<Vec<usize>> {
            Ok((x.n_rows() - self.0..x.n_rows()).collect())
        }
    }

    #[test]
    fn empty_chain_is_rejected() {
        let err = ChainSampler::new(Vec::new()).err().unwrap();
        assert!(matches!(
            err,
            CardinalError::Sampling(SamplingError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn later_stages_map_back_to_pool_rows() {
        let x = FeatureMatrix::from_column(&[0.0; 10]);
        let stages: Vec<Box<dyn IQuerySampler>> = vec![Box::new(Tail(5)), Box::new(Tail(2))];
        let mut chain = ChainSampler::new(stages).unwrap();
        assert_eq!(chain.batch_size(), 2);
        assert_eq!(chain.select_samples(&x).unwrap(), vec![8, 9]);
    }
}
