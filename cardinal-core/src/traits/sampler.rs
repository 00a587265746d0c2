use crate::errors::CardinalResult;
use crate::matrix::{FeatureMatrix, Label};

/// A query sampler picks which unlabeled samples should be labeled next.
///
/// Implementations are owned by one caller at a time: `fit` and
/// `select_samples` both take `&mut self`.
pub trait IQuerySampler: Send + Sync {
    /// Human-readable sampler name, used in logs.
    fn name(&self) -> &str;

    /// Number of samples returned by `select_samples`.
    fn batch_size(&self) -> usize;

    /// Learn from the labeled samples. Unsupervised samplers ignore it.
    fn fit(&mut self, x: &FeatureMatrix, y: Option<&[Label]>) -> CardinalResult<()> {
        let _ = (x, y);
        Ok(())
    }

    /// Select `batch_size` distinct row indices of `x` to label.
    fn select_samples(&mut self, x: &FeatureMatrix) -> CardinalResult<Vec<usize>>;
}
