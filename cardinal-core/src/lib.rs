//! # cardinal-core
//!
//! Foundation crate for the Cardinal query samplers.
//! Defines the feature matrix, capability traits, errors, config, tracing
//! setup, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod matrix;
pub mod models;
pub mod traits;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::CardinalConfig;
pub use errors::{CardinalError, CardinalResult};
pub use matrix::{FeatureMatrix, Label};
pub use models::{Clustering, SelectionStrategy};
