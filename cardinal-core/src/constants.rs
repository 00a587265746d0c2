/// Cardinal version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Weights at or below this value flag a row as already labeled.
pub const LABELED_WEIGHT_CUTOFF: f64 = -0.5;

/// Weight used to flag a reference (labeled) row when building weight vectors.
pub const LABELED_WEIGHT: f64 = -1.0;

/// Environment variable read by [`crate::tracing_setup::init_tracing`].
pub const LOG_ENV_VAR: &str = "CARDINAL_LOG";
