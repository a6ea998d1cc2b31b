//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::TransformConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading and middleware construction.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

impl From<Vec<ValidationError>> for ConfigError {
    fn from(errors: Vec<ValidationError>) -> Self {
        ConfigError::Validation(errors)
    }
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl TransformConfig {
    /// Parse and validate configuration from a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: TransformConfig = toml::from_str(content)?;
        validate_config(&config)?;
        Ok(config)
    }
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<TransformConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config = TransformConfig::from_toml(&content)?;

    tracing::debug!(path = ?path, rules = config.rule_count(), "Configuration loaded");
    Ok(config)
}
