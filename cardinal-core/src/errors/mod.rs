//! Error handling for Cardinal.
//! One error enum per subsystem, `thiserror` only.

pub mod cardinal_error;
pub mod clustering_error;
pub mod config_error;
pub mod error_code;
pub mod model_error;
pub mod sampling_error;

pub use cardinal_error::{CardinalError, CardinalResult};
pub use clustering_error::ClusteringError;
pub use config_error::ConfigError;
pub use error_code::CardinalErrorCode;
pub use model_error::ModelError;
pub use sampling_error::SamplingError;
