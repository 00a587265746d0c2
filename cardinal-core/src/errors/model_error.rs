//! Model capability errors.

use super::error_code::{self, CardinalErrorCode};

/// Errors surfaced by [`crate::traits::IModel`] implementations.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("model {model} used before fit")]
    NotFitted { model: String },

    #[error("feature dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("label count mismatch: {rows} rows, {labels} labels")]
    LabelMismatch { rows: usize, labels: usize },
}

impl CardinalErrorCode for ModelError {
    fn error_code(&self) -> &'static str {
        error_code::MODEL_ERROR
    }
}
