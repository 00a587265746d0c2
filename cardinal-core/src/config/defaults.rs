// Single source of truth for all default values.

// --- Sampling ---
pub const DEFAULT_BATCH_SIZE: usize = 20;
pub const DEFAULT_STRATEGY: &str = "top";

// --- Ranked batch ---
pub const DEFAULT_METRIC: &str = "euclidean";

// --- Adaptive ---
pub const DEFAULT_SWITCH_THRESHOLD: usize = 50;

// --- Clustering ---
pub const DEFAULT_KMEANS_MAX_ITER: usize = 300;
pub const DEFAULT_KMEANS_TOLERANCE: f64 = 1e-4;
pub const DEFAULT_KMEANS_N_INIT: usize = 3;

// --- Two-step ---
pub const DEFAULT_TWO_STEP_BETA: usize = 5;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = false;
