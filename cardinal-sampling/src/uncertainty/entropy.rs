use cardinal_core::errors::CardinalResult;
use cardinal_core::traits::{IModel, IScorer};
use cardinal_core::{FeatureMatrix, Label};

use super::{fit_model, score_probabilities};

/// Shannon entropy of the class distribution, in nats.
#[derive(Debug, Clone)]
pub struct EntropyScorer<M> {
    model: M,
}

impl<M: IModel> EntropyScorer<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &M {
        &self.model
    }
}

pub(crate) fn entropy(p: &[f64]) -> f64 {
    -p.iter()
        .filter(|&&v| v > 0.0)
        .map(|&v| v * v.ln())
        .sum::<f64>()
}

impl<M: IModel> IScorer for EntropyScorer<M> {
    fn name(&self) -> &str {
        "entropy"
    }

    fn fit(&mut self, x: &FeatureMatrix, y: Option<&[Label]>) -> CardinalResult<()> {
        fit_model(&mut self.model, "entropy", x, y)
    }

    fn score_samples(&self, x: &FeatureMatrix) -> CardinalResult<Vec<f64>> {
        score_probabilities(&self.model, x, entropy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entropy_ignores_zero_probabilities() {
        assert!((entropy(&[0.5, 0.5, 0.0]) - std::f64::consts::LN_2).abs() < 1e-12);
        assert_eq!(entropy(&[1.0, 0.0]), 0.0);
    }
}
