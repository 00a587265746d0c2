use crate::errors::CardinalResult;
use crate::matrix::{FeatureMatrix, Label};

/// Per-sample informativeness score. Higher means more worth labeling.
pub trait IScorer: Send + Sync {
    fn name(&self) -> &str;

    /// Fit whatever the scorer relies on. Default: nothing to fit.
    fn fit(&mut self, x: &FeatureMatrix, y: Option<&[Label]>) -> CardinalResult<()> {
        let _ = (x, y);
        Ok(())
    }

    /// One score per row of `x`.
    fn score_samples(&self, x: &FeatureMatrix) -> CardinalResult<Vec<f64>>;
}
