//! Configuration for every Cardinal subsystem.

pub mod adaptive_config;
pub mod cardinal_config;
pub mod clustering_config;
pub mod defaults;
pub mod observability_config;
pub mod ranked_batch_config;
pub mod sampling_config;
pub mod two_step_config;

pub use adaptive_config::AdaptiveConfig;
pub use cardinal_config::CardinalConfig;
pub use clustering_config::ClusteringConfig;
pub use observability_config::ObservabilityConfig;
pub use ranked_batch_config::{EmptyReferencePolicy, RankedBatchConfig};
pub use sampling_config::SamplingConfig;
pub use two_step_config::TwoStepConfig;
