use crate::errors::{CardinalResult, ModelError, SamplingError};
use crate::matrix::{FeatureMatrix, Label};

/// Trainable classifier consumed by uncertainty-based scorers.
pub trait IModel: Send + Sync {
    fn name(&self) -> &str;

    fn fit(&mut self, x: &FeatureMatrix, y: &[Label]) -> CardinalResult<()>;

    fn predict(&self, x: &FeatureMatrix) -> CardinalResult<Vec<Label>>;

    /// Class probabilities, one row per sample, one column per class.
    /// Models that cannot produce probabilities keep the default.
    fn predict_proba(&self, x: &FeatureMatrix) -> CardinalResult<Vec<Vec<f64>>> {
        let _ = x;
        Err(SamplingError::NotImplemented {
            capability: format!("{}::predict_proba", self.name()),
        }
        .into())
    }

    /// Mean accuracy of `predict` against `y`.
    fn score(&self, x: &FeatureMatrix, y: &[Label]) -> CardinalResult<f64> {
        if x.n_rows() != y.len() {
            return Err(ModelError::LabelMismatch {
                rows: x.n_rows(),
                labels: y.len(),
            }
            .into());
        }
        if y.is_empty() {
            return Ok(0.0);
        }
        let predicted = self.predict(x)?;
        let correct = predicted.iter().zip(y).filter(|(p, t)| p == t).count();
        Ok(correct as f64 / y.len() as f64)
    }
}
