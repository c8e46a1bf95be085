//! Text Translator Port - Interface for machine translation backends.
//!
//! The provider translates batches of source-language strings into a
//! target language, preserving length and order. Failures never surface
//! to students: the resolver falls back to the untranslated source text.

use async_trait::async_trait;

use crate::domain::foundation::LanguageCode;

/// Port for the machine translation backend.
#[async_trait]
pub trait TextTranslator: Send + Sync {
    /// Translates each string in `texts` from `source` to `target`.
    ///
    /// Implementations must return exactly one translation per input,
    /// in input order, or an error.
    async fn translate(
        &self,
        texts: &[String],
        source: LanguageCode,
        target: LanguageCode,
    ) -> Result<Vec<String>, TranslationError>;
}

/// Translation provider errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslationError {
    /// Rate limited by the provider.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds until retry is allowed.
        retry_after_secs: u32,
    },

    /// Provider is unavailable.
    #[error("translator unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u32,
    },

    /// Response shape did not match the request.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl TranslationError {
    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a malformed response error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }
}
