use cardinal_core::errors::CardinalResult;
use cardinal_core::traits::{IModel, IScorer};
use cardinal_core::{FeatureMatrix, Label};

use super::{fit_model, score_probabilities};

/// Least confidence: `1 - max p`.
#[derive(Debug, Clone)]
pub struct ConfidenceScorer<M> {
    model: M,
}

impl<M: IModel> ConfidenceScorer<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &M {
        &self.model
    }
}

pub(crate) fn least_confidence(p: &[f64]) -> f64 {
    1.0 - p.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
}

impl<M: IModel> IScorer for ConfidenceScorer<M> {
    fn name(&self) -> &str {
        "confidence"
    }

    fn fit(&mut self, x: &FeatureMatrix, y: Option<&[Label]>) -> CardinalResult<()> {
        fit_model(&mut self.model, "confidence", x, y)
    }

    fn score_samples(&self, x: &FeatureMatrix) -> CardinalResult<Vec<f64>> {
        score_probabilities(&self.model, x, least_confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn least_confidence_of_rows() {
        assert!((least_confidence(&[0.7, 0.2, 0.1]) - 0.3).abs() < 1e-12);
        assert!(least_confidence(&[1.0]).abs() < 1e-12);
    }
}
