//! Top-level Concord configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::defaults;
use super::{ConsensusConfig, LoggingConfig, MissingObjectPolicy};
use crate::constants::PROJECT_CONFIG_FILENAME;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`CONCORD_*`)
/// 3. Project config (`concord.toml` in the given root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ConcordConfig {
    pub consensus: ConsensusConfig,
    pub logging: LoggingConfig,
}

/// Caller-supplied overrides that win over every other layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub strict_duplicates: Option<bool>,
    pub missing_objects: Option<MissingObjectPolicy>,
    pub max_objects: Option<usize>,
    pub log_level: Option<String>,
}

impl ConcordConfig {
    /// Load configuration with layered resolution.
    ///
    /// A missing `concord.toml` is not an error; compiled defaults apply.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILENAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config)?;

        // Layer 1 (highest priority): explicit overrides
        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: ConcordConfig = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &ConcordConfig) -> Result<(), ConfigError> {
        if config.consensus.max_objects == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "consensus.max_objects".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(ref level) = config.logging.level {
            if !defaults::VALID_LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: "logging.level".to_string(),
                    message: format!(
                        "'{level}' is not one of {}",
                        defaults::VALID_LOG_LEVELS.join(", ")
                    ),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut ConcordConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: ConcordConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut ConcordConfig, other: &ConcordConfig) {
        if other.consensus.strict_duplicates.is_some() {
            base.consensus.strict_duplicates = other.consensus.strict_duplicates;
        }
        if other.consensus.missing_objects.is_some() {
            base.consensus.missing_objects = other.consensus.missing_objects;
        }
        if other.consensus.max_objects.is_some() {
            base.consensus.max_objects = other.consensus.max_objects;
        }
        if other.logging.level.is_some() {
            base.logging.level = other.logging.level.clone();
        }
        if other.logging.json.is_some() {
            base.logging.json = other.logging.json;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `CONCORD_STRICT_DUPLICATES`, `CONCORD_MISSING_OBJECTS`, etc.
    fn apply_env_overrides(config: &mut ConcordConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("CONCORD_STRICT_DUPLICATES") {
            let v = val.parse::<bool>().map_err(|e| ConfigError::InvalidValue {
                field: "CONCORD_STRICT_DUPLICATES".to_string(),
                message: e.to_string(),
            })?;
            config.consensus.strict_duplicates = Some(v);
        }
        if let Ok(val) = std::env::var("CONCORD_MISSING_OBJECTS") {
            let v = val
                .parse::<MissingObjectPolicy>()
                .map_err(|message| ConfigError::InvalidValue {
                    field: "CONCORD_MISSING_OBJECTS".to_string(),
                    message,
                })?;
            config.consensus.missing_objects = Some(v);
        }
        if let Ok(val) = std::env::var("CONCORD_MAX_OBJECTS") {
            let v = val.parse::<usize>().map_err(|e| ConfigError::InvalidValue {
                field: "CONCORD_MAX_OBJECTS".to_string(),
                message: e.to_string(),
            })?;
            config.consensus.max_objects = Some(v);
        }
        if let Ok(val) = std::env::var("CONCORD_LOG_LEVEL") {
            config.logging.level = Some(val);
        }
        Ok(())
    }

    /// Apply explicit overrides (highest priority).
    fn apply_overrides(config: &mut ConcordConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.strict_duplicates {
            config.consensus.strict_duplicates = Some(v);
        }
        if let Some(v) = overrides.missing_objects {
            config.consensus.missing_objects = Some(v);
        }
        if let Some(v) = overrides.max_objects {
            config.consensus.max_objects = Some(v);
        }
        if let Some(ref v) = overrides.log_level {
            config.logging.level = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
