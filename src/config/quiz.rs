//! Quiz configuration

use serde::Deserialize;

use crate::domain::quiz::DEFAULT_QUESTION_CEILING;

use super::error::ValidationError;

/// Quiz behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct QuizConfig {
    /// Total number of questions per quiz
    #[serde(default = "default_question_ceiling")]
    pub question_ceiling: usize,
}

impl QuizConfig {
    /// Validate quiz configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.question_ceiling == 0 {
            return Err(ValidationError::invalid_value(
                "quiz.question_ceiling",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            question_ceiling: default_question_ceiling(),
        }
    }
}

fn default_question_ceiling() -> usize {
    DEFAULT_QUESTION_CEILING
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ceiling_is_fifteen() {
        let config = QuizConfig::default();
        assert_eq!(config.question_ceiling, 15);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_ceiling_is_rejected() {
        let config = QuizConfig {
            question_ceiling: 0,
        };
        assert!(config.validate().is_err());
    }
}
