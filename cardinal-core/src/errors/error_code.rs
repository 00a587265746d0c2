//! Stable string codes for every error family.

pub const SAMPLING_INVALID_CONFIGURATION: &str = "SAMPLING_INVALID_CONFIGURATION";
pub const SAMPLING_INSUFFICIENT_CANDIDATES: &str = "SAMPLING_INSUFFICIENT_CANDIDATES";
pub const SAMPLING_PRECONDITION_VIOLATION: &str = "SAMPLING_PRECONDITION_VIOLATION";
pub const SAMPLING_NOT_IMPLEMENTED: &str = "SAMPLING_NOT_IMPLEMENTED";
pub const MODEL_ERROR: &str = "MODEL_ERROR";
pub const CLUSTERING_ERROR: &str = "CLUSTERING_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";

/// Maps an error to a stable code that callers can match on without
/// depending on the display message.
pub trait CardinalErrorCode {
    fn error_code(&self) -> &'static str;
}
