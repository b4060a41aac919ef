//! Configuration validation and loading

use super::defaults::{MAX_PATH_LEN_LIMIT, MAX_SEGMENTS_LIMIT};
use super::types::EngineConfig;

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid limit: {0}")]
    InvalidLimit(String),

    #[error("Malformed configuration: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidLimit` if a limit is zero or
    /// exceeds its hard upper bound.
    fn validate(&self) -> ConfigResult<()>;
}

fn check_limit(value: usize, max: usize, name: &str) -> ConfigResult<()> {
    if value == 0 {
        return Err(ConfigurationError::InvalidLimit(format!(
            "{name} cannot be zero"
        )));
    }
    if value > max {
        return Err(ConfigurationError::InvalidLimit(format!(
            "{name} cannot exceed {max}"
        )));
    }
    Ok(())
}

impl Validator for EngineConfig {
    fn validate(&self) -> ConfigResult<()> {
        check_limit(self.max_path_len, MAX_PATH_LEN_LIMIT, "max_path_len")?;
        check_limit(self.max_segments, MAX_SEGMENTS_LIMIT, "max_segments")?;
        Ok(())
    }
}

impl EngineConfig {
    /// Load and validate a configuration from a JSON document
    ///
    /// Fields absent from the document keep their default values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::Malformed` for invalid JSON and
    /// `ConfigurationError::InvalidLimit` when validation fails.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
