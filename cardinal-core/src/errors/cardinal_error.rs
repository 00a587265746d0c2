//! Top-level error aggregating every subsystem via `From` conversions.

use super::error_code::CardinalErrorCode;
use super::{ClusteringError, ConfigError, ModelError, SamplingError};

#[derive(Debug, thiserror::Error)]
pub enum CardinalError {
    #[error("sampling error: {0}")]
    Sampling(#[from] SamplingError),

    #[error("model error: {0}")]
    Model(#[from] ModelError),

    #[error("clustering error: {0}")]
    Clustering(#[from] ClusteringError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl CardinalErrorCode for CardinalError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Sampling(e) => e.error_code(),
            Self::Model(e) => e.error_code(),
            Self::Clustering(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

pub type CardinalResult<T> = Result<T, CardinalError>;
