use serde::{Deserialize, Serialize};

use super::defaults;

/// What the ranked batch selector does when no labeled row exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyReferencePolicy {
    /// Fail with a precondition violation.
    #[default]
    Reject,
    /// Treat every candidate as maximally dissimilar (similarity 0).
    MaxDissimilarity,
}

/// Ranked batch selector configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankedBatchConfig {
    /// Distance metric name, e.g. "euclidean", "manhattan", "cosine".
    pub metric: String,
    /// Behaviour when the labeled reference set is empty.
    pub empty_reference: EmptyReferencePolicy,
}

impl Default for RankedBatchConfig {
    fn default() -> Self {
        Self {
            metric: defaults::DEFAULT_METRIC.to_string(),
            empty_reference: EmptyReferencePolicy::default(),
        }
    }
}
