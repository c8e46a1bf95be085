//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is
//! loaded with the `CAREER_COMPASS_` prefix and nested values use double
//! underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use career_compass::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Quiz asks {} questions", config.quiz.question_ceiling);
//! ```

mod error;
mod generator;
mod quiz;
mod translation;

pub use error::{ConfigError, ValidationError};
pub use generator::GeneratorConfig;
pub use quiz::QuizConfig;
pub use translation::TranslationConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Contains all configuration sections for Career Compass. Load using
/// [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Quiz behavior (question ceiling)
    #[serde(default)]
    pub quiz: QuizConfig,

    /// Question generator (Gemini)
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Translation provider (Google Translate)
    #[serde(default)]
    pub translation: TranslationConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `CAREER_COMPASS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// For example `CAREER_COMPASS_GENERATOR__API_KEY` sets
    /// `generator.api_key`.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("CAREER_COMPASS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Validate every configuration section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.quiz.validate()?;
        self.generator.validate()?;
        self.translation.validate()?;
        Ok(())
    }
}
