//! Google Translator - TextTranslator implementation for the Google
//! Cloud Translation v2 API.
//!
//! Sends the whole batch in one request and requires the response to
//! carry exactly one translation per input, in order; anything else is
//! a malformed response.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::foundation::LanguageCode;
use crate::ports::{TextTranslator, TranslationError};

/// Configuration for the Google translator.
#[derive(Debug, Clone)]
pub struct GoogleTranslateConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl GoogleTranslateConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: "https://translation.googleapis.com".to_string(),
            timeout: Duration::from_secs(15),
        }
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Google Cloud Translation v2 implementation of the translator port.
pub struct GoogleTranslator {
    config: GoogleTranslateConfig,
    client: Client,
}

impl GoogleTranslator {
    /// Creates a new translator with the given configuration.
    pub fn new(config: GoogleTranslateConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the translate endpoint URL.
    fn translate_url(&self) -> String {
        format!(
            "{}/language/translate/v2?key={}",
            self.config.base_url,
            self.config.api_key()
        )
    }

    /// Parses the API response status and handles errors.
    async fn handle_response_status(
        &self,
        response: Response,
    ) -> Result<Response, TranslationError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();
        Err(map_error_status(status, &error_body))
    }
}

/// Maps a non-success HTTP status to a translation error.
fn map_error_status(status: StatusCode, error_body: &str) -> TranslationError {
    match status.as_u16() {
        401 | 403 => TranslationError::AuthenticationFailed,
        429 => TranslationError::RateLimited {
            retry_after_secs: 60,
        },
        500..=599 => TranslationError::unavailable(format!(
            "Server error {}: {}",
            status, error_body
        )),
        _ => TranslationError::network(format!("Unexpected status {}: {}", status, error_body)),
    }
}

#[async_trait]
impl TextTranslator for GoogleTranslator {
    async fn translate(
        &self,
        texts: &[String],
        source: LanguageCode,
        target: LanguageCode,
    ) -> Result<Vec<String>, TranslationError> {
        let request = TranslateRequest {
            q: texts.to_vec(),
            source: source.as_str(),
            target: target.as_str(),
            format: "text",
        };

        let response = self
            .client
            .post(self.translate_url())
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TranslationError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    TranslationError::network(format!("Connection failed: {}", e))
                } else {
                    TranslationError::network(e.to_string())
                }
            })?;

        let response = self.handle_response_status(response).await?;

        let body: TranslateResponse = response
            .json()
            .await
            .map_err(|e| TranslationError::malformed(format!("invalid response body: {}", e)))?;

        let translations: Vec<String> = body
            .data
            .translations
            .into_iter()
            .map(|t| t.translated_text)
            .collect();

        if translations.len() != texts.len() {
            return Err(TranslationError::malformed(format!(
                "expected {} translations, got {}",
                texts.len(),
                translations.len()
            )));
        }

        Ok(translations)
    }
}

/// translate v2 request body.
#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: Vec<String>,
    source: &'a str,
    target: &'a str,
    format: &'a str,
}

/// translate v2 response body.
#[derive(Debug, Deserialize)]
struct TranslateResponse {
    data: TranslateData,
}

#[derive(Debug, Deserialize)]
struct TranslateData {
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
struct Translation {
    #[serde(rename = "translatedText")]
    translated_text: String,
}
