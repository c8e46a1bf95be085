//! Configuration error types.

use thiserror::Error;

/// Errors that occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read or deserialize the environment.
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// Configuration loaded but failed validation.
    #[error("invalid configuration: {0}")]
    Validation(#[from] ValidationError),
}

/// Validation failures over loaded configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required setting is missing.
    #[error("missing required setting: {0}")]
    MissingRequired(&'static str),

    /// A setting has an unusable value.
    #[error("invalid value for {field}: {reason}")]
    InvalidValue {
        /// The offending setting.
        field: &'static str,
        /// Why it is unusable.
        reason: String,
    },
}

impl ValidationError {
    /// Creates an invalid value error.
    pub fn invalid_value(field: &'static str, reason: impl Into<String>) -> Self {
        ValidationError::InvalidValue {
            field,
            reason: reason.into(),
        }
    }
}
