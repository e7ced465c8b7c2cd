//! Configuration types and loading.
//!
//! The main entry point is [`QiitaConfig`], which represents the contents of
//! a `qiita.yaml` file. Configuration is loaded with [`load_config`] and
//! saved with [`save_config`].

use std::path::Path;

use qiita_core::{DecodeOptions, Decoder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file: {0}")]
    ReadError(#[source] std::io::Error),

    /// The configuration file could not be written.
    #[error("failed to write config file: {0}")]
    WriteError(#[source] std::io::Error),

    /// The configuration file contained invalid YAML.
    #[error("failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// A configuration value was invalid.
    #[error("invalid configuration value for key '{key}': {reason}")]
    InvalidValue {
        /// The configuration key that had an invalid value.
        key: String,
        /// A description of why the value is invalid.
        reason: String,
    },
}

/// A specialized `Result` type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// Decoder configuration section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeConfig {
    /// Accept legacy spellings of wire keys (`craeated_at`, `taggings`).
    #[serde(default = "default_true", rename = "legacy-keys")]
    pub legacy_keys: bool,

    /// Reject response bodies larger than this many bytes. Unlimited when unset.
    #[serde(
        default,
        rename = "max-payload-bytes",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_payload_bytes: Option<usize>,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            legacy_keys: default_true(),
            max_payload_bytes: None,
        }
    }
}

fn default_true() -> bool {
    true
}

impl From<&DecodeConfig> for DecodeOptions {
    fn from(config: &DecodeConfig) -> Self {
        Self {
            legacy_keys: config.legacy_keys,
            max_payload_bytes: config.max_payload_bytes,
        }
    }
}

// ---------------------------------------------------------------------------
// Main config struct
// ---------------------------------------------------------------------------

/// The full configuration, corresponding to `qiita.yaml`.
///
/// All fields use `serde` defaults so that a partially-specified YAML file
/// will be deserialized correctly with sensible default values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct QiitaConfig {
    /// Decoder configuration.
    #[serde(default)]
    pub decode: DecodeConfig,
}

impl QiitaConfig {
    /// Checks values that YAML typing alone cannot rule out.
    pub fn validate(&self) -> Result<()> {
        if self.decode.max_payload_bytes == Some(0) {
            return Err(ConfigError::InvalidValue {
                key: "decode.max-payload-bytes".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }

    /// Builds a decoder from the `decode` section.
    pub fn decoder(&self) -> Decoder {
        Decoder::new(DecodeOptions::from(&self.decode))
    }
}

// ---------------------------------------------------------------------------
// Load / save
// ---------------------------------------------------------------------------

/// Loads the configuration file at `path`.
///
/// A missing or empty file yields the default configuration.
pub fn load_config(path: &Path) -> Result<QiitaConfig> {
    if !path.exists() {
        return Ok(QiitaConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;

    if content.trim().is_empty() {
        return Ok(QiitaConfig::default());
    }

    let config: QiitaConfig = serde_yaml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Saves the configuration to `path`, creating parent directories as needed.
pub fn save_config(path: &Path, config: &QiitaConfig) -> Result<()> {
    config.validate()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(ConfigError::WriteError)?;
    }
    let yaml = serde_yaml::to_string(config)?;
    std::fs::write(path, yaml).map_err(ConfigError::WriteError)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
