//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;
use crate::constants::{LOG_ENV_VAR, VERSION};

static INIT: Once = Once::new();

/// Initialize the Cardinal tracing/logging system.
///
/// Reads the `CARDINAL_LOG` environment variable for per-crate log levels,
/// e.g. `CARDINAL_LOG=cardinal_sampling=debug,cardinal_clustering=warn`.
/// Falls back to `cardinal=info` when unset or invalid.
///
/// Idempotent. A subscriber installed elsewhere is left in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("cardinal=info"));
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
        tracing::debug!(version = VERSION, "cardinal tracing initialized");
    });
}

/// Initialize tracing from an [`ObservabilityConfig`]. `CARDINAL_LOG`, when
/// set, still wins over `log_level`.
pub fn init_tracing_with_config(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(format!("cardinal={}", config.log_level)));
        if config.json {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .json()
                .try_init();
        } else {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .try_init();
        }
        tracing::debug!(version = VERSION, json = config.json, "cardinal tracing initialized");
    });
}
