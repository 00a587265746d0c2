use crate::errors::CardinalResult;
use crate::matrix::FeatureMatrix;
use crate::models::Clustering;

/// Clustering capability consumed by cluster-based samplers.
pub trait IClusterer: Send + Sync {
    fn name(&self) -> &str;

    /// Partition the rows of `x` into `n_clusters` groups.
    fn cluster(&self, x: &FeatureMatrix, n_clusters: usize) -> CardinalResult<Clustering>;
}
