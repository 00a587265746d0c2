//! Query sampling errors.

use super::error_code::{self, CardinalErrorCode};

/// Errors raised by samplers and selection policies.
#[derive(Debug, thiserror::Error)]
pub enum SamplingError {
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("insufficient candidates: requested {requested}, only {available} eligible")]
    InsufficientCandidates { requested: usize, available: usize },

    #[error("precondition violated: {reason}")]
    PreconditionViolation { reason: String },

    #[error("not implemented: {capability}")]
    NotImplemented { capability: String },
}

impl SamplingError {
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    pub fn precondition(reason: impl Into<String>) -> Self {
        Self::PreconditionViolation {
            reason: reason.into(),
        }
    }
}

impl CardinalErrorCode for SamplingError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidConfiguration { .. } => error_code::SAMPLING_INVALID_CONFIGURATION,
            Self::InsufficientCandidates { .. } => error_code::SAMPLING_INSUFFICIENT_CANDIDATES,
            Self::PreconditionViolation { .. } => error_code::SAMPLING_PRECONDITION_VIOLATION,
            Self::NotImplemented { .. } => error_code::SAMPLING_NOT_IMPLEMENTED,
        }
    }
}
