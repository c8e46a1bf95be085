//! Translation provider configuration

use serde::Deserialize;
use std::time::Duration;

use crate::domain::foundation::LanguageCode;

use super::error::ValidationError;

/// Translation provider (Google Translate) configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationConfig {
    /// Google Cloud Translation API key
    pub api_key: Option<String>,

    /// Base URL for the API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Source language all authored content is written in
    #[serde(default)]
    pub source_language: LanguageCode,
}

impl TranslationConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if an API key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Validate translation configuration
    ///
    /// Translation is optional: without an API key the platform simply
    /// renders source-language text, so a missing key is valid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 {
            return Err(ValidationError::invalid_value(
                "translation.timeout_secs",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            source_language: LanguageCode::default(),
        }
    }
}

fn default_base_url() -> String {
    "https://translation.googleapis.com".to_string()
}

fn default_timeout() -> u64 {
    15
}
