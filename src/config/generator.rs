//! Question generator configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Question generator (Gemini) configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// Gemini API key
    pub api_key: Option<String>,

    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL for the API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl GeneratorConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if an API key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Validate generator configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_api_key() {
            return Err(ValidationError::MissingRequired("GENERATOR__API_KEY"));
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::invalid_value(
                "generator.timeout_secs",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_model() -> String {
    "gemini-2.0-flash-exp".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_gemini_flash() {
        let config = GeneratorConfig::default();
        assert_eq!(config.model, "gemini-2.0-flash-exp");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(!config.has_api_key());
    }

    #[test]
    fn validation_requires_api_key() {
        let config = GeneratorConfig::default();
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("GENERATOR__API_KEY"))
        );

        let config = GeneratorConfig {
            api_key: Some("key".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_api_key_counts_as_missing() {
        let config = GeneratorConfig {
            api_key: Some(String::new()),
            ..Default::default()
        };
        assert!(!config.has_api_key());
        assert!(config.validate().is_err());
    }
}
