//! Clustering capability errors.

use super::error_code::{self, CardinalErrorCode};

/// Errors surfaced by [`crate::traits::IClusterer`] implementations.
#[derive(Debug, thiserror::Error)]
pub enum ClusteringError {
    #[error("invalid cluster count: requested {requested}, {available} samples available")]
    InvalidClusterCount { requested: usize, available: usize },

    #[error("clustering failed: {reason}")]
    ClusteringFailed { reason: String },
}

impl CardinalErrorCode for ClusteringError {
    fn error_code(&self) -> &'static str {
        error_code::CLUSTERING_ERROR
    }
}
