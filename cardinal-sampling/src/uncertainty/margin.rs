use cardinal_core::errors::CardinalResult;
use cardinal_core::traits::{IModel, IScorer};
use cardinal_core::{FeatureMatrix, Label};

use super::{fit_model, score_probabilities};

/// Smallest margin: `1 - (p1 - p2)` for the two most likely classes.
/// Rows with a single class score 0.
#[derive(Debug, Clone)]
pub struct MarginScorer<M> {
    model: M,
}

impl<M: IModel> MarginScorer<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &M {
        &self.model
    }
}

pub(crate) fn margin(p: &[f64]) -> f64 {
    if p.len() < 2 {
        return 0.0;
    }
    let (mut first, mut second) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for &v in p {
        if v > first {
            second = first;
            first = v;
        } else if v > second {
            second = v;
        }
    }
    1.0 - (first - second)
}

impl<M: IModel> IScorer for MarginScorer<M> {
    fn name(&self) -> &str {
        "margin"
    }

    fn fit(&mut self, x: &FeatureMatrix, y: Option<&[Label]>) -> CardinalResult<()> {
        fit_model(&mut self.model, "margin", x, y)
    }

    fn score_samples(&self, x: &FeatureMatrix) -> CardinalResult<Vec<f64>> {
        score_probabilities(&self.model, x, margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn margin_uses_top_two() {
        assert!((margin(&[0.1, 0.6, 0.3]) - 0.7).abs() < 1e-12);
        assert!((margin(&[0.5, 0.5]) - 1.0).abs() < 1e-12);
        assert_eq!(margin(&[1.0]), 0.0);
    }
}
