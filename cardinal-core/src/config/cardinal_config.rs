//! Top-level Cardinal configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{
    AdaptiveConfig, ClusteringConfig, ObservabilityConfig, RankedBatchConfig, SamplingConfig,
    TwoStepConfig,
};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`CARDINAL_*`)
/// 2. Config file passed to [`CardinalConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CardinalConfig {
    pub sampling: SamplingConfig,
    pub ranked_batch: RankedBatchConfig,
    pub adaptive: AdaptiveConfig,
    pub clustering: ClusteringConfig,
    pub two_step: TwoStepConfig,
    pub observability: ObservabilityConfig,
}

impl CardinalConfig {
    /// Load configuration from `path` (if it exists), apply environment
    /// overrides, then validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let content =
                std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `CARDINAL_*` environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_with(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup. Unparseable values are
    /// logged and ignored.
    pub fn apply_overrides_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("CARDINAL_BATCH_SIZE") {
            match val.parse() {
                Ok(v) => self.sampling.batch_size = v,
                Err(_) => warn!(value = %val, "ignoring invalid CARDINAL_BATCH_SIZE"),
            }
        }
        if let Some(val) = lookup("CARDINAL_STRATEGY") {
            self.sampling.strategy = val;
        }
        if let Some(val) = lookup("CARDINAL_SEED") {
            match val.parse() {
                Ok(v) => {
                    self.sampling.seed = Some(v);
                    self.clustering.seed = Some(v);
                }
                Err(_) => warn!(value = %val, "ignoring invalid CARDINAL_SEED"),
            }
        }
        if let Some(val) = lookup("CARDINAL_METRIC") {
            self.ranked_batch.metric = val;
        }
        if let Some(val) = lookup("CARDINAL_SWITCH_THRESHOLD") {
            match val.parse() {
                Ok(v) => self.adaptive.switch_threshold = v,
                Err(_) => warn!(value = %val, "ignoring invalid CARDINAL_SWITCH_THRESHOLD"),
            }
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sampling.batch_size == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "sampling.batch_size".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if !(self.clustering.tolerance >= 0.0) {
            return Err(ConfigError::ValidationFailed {
                field: "clustering.tolerance".to_string(),
                message: "must be a non-negative number".to_string(),
            });
        }
        if self.clustering.n_init == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "clustering.n_init".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.clustering.max_iter == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "clustering.max_iter".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.two_step.beta == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "two_step.beta".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
