//! Switch from an exploration sampler to an exploitation sampler once
//! enough samples are labeled.

use tracing::info;

use cardinal_core::config::AdaptiveConfig;
use cardinal_core::errors::{CardinalResult, SamplingError};
use cardinal_core::traits::IQuerySampler;
use cardinal_core::{FeatureMatrix, Label};

pub struct AdaptiveSampler {
    exploration: Box<dyn IQuerySampler>,
    exploitation: Box<dyn IQuerySampler>,
    switch_threshold: usize,
    labeled_size: Option<usize>,
}

impl AdaptiveSampler {
    pub fn new(
        exploration: Box<dyn IQuerySampler>,
        exploitation: Box<dyn IQuerySampler>,
        switch_threshold: usize,
    ) -> Self {
        Self {
            exploration,
            exploitation,
            switch_threshold,
            labeled_size: None,
        }
    }

    pub fn from_config(
        exploration: Box<dyn IQuerySampler>,
        exploitation: Box<dyn IQuerySampler>,
        config: &AdaptiveConfig,
    ) -> Self {
        Self::new(exploration, exploitation, config.switch_threshold)
    }

    pub fn switch_threshold(&self) -> usize {
        self.switch_threshold
    }

    /// Whether the next selection explores. `None` before `fit`.
    pub fn is_exploring(&self) -> Option<bool> {
        self.labeled_size.map(|n| n <= self.switch_threshold)
    }

    fn active(&self) -> &dyn IQuerySampler {
        match self.is_exploring() {
            Some(false) => self.exploitation.as_ref(),
            _ => self.exploration.as_ref(),
        }
    }
}

impl IQuerySampler for AdaptiveSampler {
    fn name(&self) -> &str {
        "adaptive"
    }

    fn batch_size(&self) -> usize {
        self.active().batch_size()
    }

    /// Fit both samplers and record the labeled-set size.
    fn fit(&mut self, x: &FeatureMatrix, y: Option<&[Label]>) -> CardinalResult<()> {
        self.exploration.fit(x, y)?;
        self.exploitation.fit(x, y)?;
        self.labeled_size = Some(x.n_rows());
        Ok(())
    }

    fn select_samples(&mut self, x: &FeatureMatrix) -> CardinalResult<Vec<usize>> {
        let Some(labeled_size) = self.labeled_size else {
            return Err(SamplingError::precondition("adaptive sampler used before fit").into());
        };
        let exploring = labeled_size <= self.switch_threshold;
        let sampler = if exploring {
            &mut self.exploration
        } else {
            &mut self.exploitation
        };
        info!(
            sampler = "adaptive",
            delegate = sampler.name(),
            labeled_size,
            switch_threshold = self.switch_threshold,
            exploring,
            "adaptive routing"
        );
        sampler.select_samples(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardinal_core::CardinalError;

    struct Fixed(Vec<usize>);

    impl IQuerySampler for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }

        fn batch_size(&self) -> usize {
            self.0.len()
        }

        fn select_samples(&mut self, _x: &FeatureMatrix) -> CardinalResult<Vec<usize>> {
            Ok(self.0.clone())
        }
    }

    fn adaptive() -> AdaptiveSampler {
        AdaptiveSampler::new(Box::new(Fixed(vec![0])), Box::new(Fixed(vec![1, 2])), 3)
    }

    #[test]
    fn select_before_fit_is_rejected() {
        let err = adaptive()
            .select_samples(&FeatureMatrix::from_column(&[0.0]))
            .unwrap_err();
        assert!(matches!(
            err,
            CardinalError::Sampling(SamplingError::PreconditionViolation { .. })
        ));
    }

    #[test]
    fn threshold_is_inclusive_for_exploration() {
        let pool = FeatureMatrix::from_column(&[0.0; 4]);
        let mut sampler = adaptive();
        sampler.fit(&FeatureMatrix::from_column(&[0.0; 3]), None).unwrap();
        assert_eq!(sampler.is_exploring(), Some(true));
        assert_eq!(sampler.select_samples(&pool).unwrap(), vec![0]);

        sampler.fit(&FeatureMatrix::from_column(&[0.0; 4]), None).unwrap();
        assert_eq!(sampler.is_exploring(), Some(false));
        assert_eq!(sampler.batch_size(), 2);
        assert_eq!(sampler.select_samples(&pool).unwrap(), vec![1, 2]);
    }
}
