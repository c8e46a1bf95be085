//! Question Generator Port - Interface for AI question generation.
//!
//! Abstracts the generative backend that produces adaptive quiz
//! questions and the final career recommendation. Implementations are
//! treated as unreliable: every response passes strict shape validation,
//! and any failure feeds the engine's deterministic fallback path.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::LanguageCode;
use crate::domain::quiz::{
    AnsweredQuestion, Question, QuestionCategory, QuestionOption, StreamTag, StreamWeights,
};

/// Number of options every generated question must carry.
pub const OPTIONS_PER_QUESTION: usize = 4;

/// Port for the AI question/recommendation backend.
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    /// Generates the next question from the answers so far.
    ///
    /// Single attempt; callers do not retry. The returned question has
    /// already passed [`GeneratedQuestion::validate`].
    async fn next_question(
        &self,
        request: QuestionRequest,
    ) -> Result<GeneratedQuestion, GeneratorError>;

    /// Produces the final career recommendation from the complete
    /// answer log.
    async fn recommendation(
        &self,
        request: RecommendationRequest,
    ) -> Result<CareerRecommendation, GeneratorError>;
}

/// A prior question/answer pair, without scoring weights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorAnswer {
    /// The question text as shown.
    pub question: String,
    /// The chosen option text.
    pub answer: String,
}

impl From<&AnsweredQuestion> for PriorAnswer {
    fn from(answered: &AnsweredQuestion) -> Self {
        Self {
            question: answered.question.clone(),
            answer: answered.answer.clone(),
        }
    }
}

/// Request for the next adaptive question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRequest {
    /// All prior answers, in submission order.
    pub prior_answers: Vec<PriorAnswer>,
    /// Zero-based index of the question being generated.
    pub question_index: usize,
    /// Language the question should be written in.
    pub language: LanguageCode,
}

/// Request for the final recommendation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationRequest {
    /// The complete answer log, in submission order.
    pub answers: Vec<PriorAnswer>,
    /// Language the recommendation should be written in.
    pub language: LanguageCode,
}

/// A generated question as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedQuestion {
    /// The question text.
    pub question: String,
    /// Exactly four options.
    pub options: Vec<GeneratedOption>,
    /// Topic area claimed by the generator.
    pub category: QuestionCategory,
}

/// One option of a generated question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedOption {
    /// Option text.
    pub text: String,
    /// Stream weights; keys the generator omits default to zero.
    pub weight: StreamWeights,
}

impl GeneratedQuestion {
    /// Validates the response shape.
    ///
    /// Any violation means the response is malformed and the caller must
    /// fall back, never use a partially-valid question.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.question.trim().is_empty() {
            return Err(GeneratorError::malformed("empty question text"));
        }
        if self.options.len() != OPTIONS_PER_QUESTION {
            return Err(GeneratorError::malformed(format!(
                "expected {} options, got {}",
                OPTIONS_PER_QUESTION,
                self.options.len()
            )));
        }
        if self.options.iter().any(|o| o.text.trim().is_empty()) {
            return Err(GeneratorError::malformed("empty option text"));
        }
        Ok(())
    }

    /// Converts into a pool [`Question`] with the given ordinal.
    pub fn into_question(self, id: u32) -> Question {
        Question::new(
            id,
            self.question,
            self.options
                .into_iter()
                .map(|o| QuestionOption::new(o.text, o.weight))
                .collect(),
            self.category,
        )
    }
}

/// The rich recommendation returned by the backend's terminal call.
///
/// Field names mirror the backend's JSON, including the historical
/// `skillsTodevelop` spelling accepted as an alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerRecommendation {
    /// Recommended academic stream.
    pub primary_stream: StreamTag,
    /// Confidence 0-100.
    pub confidence: u8,
    /// Suggested career paths.
    pub career_paths: Vec<String>,
    /// Suitable degree programs.
    #[serde(default)]
    pub degree_programs: Vec<String>,
    /// Suggested colleges or universities.
    #[serde(default)]
    pub top_colleges: Vec<String>,
    /// Skills the student should develop.
    #[serde(alias = "skillsTodevelop")]
    pub skills_to_develop: Vec<String>,
    /// Industry outlook summary.
    #[serde(default)]
    pub industry_outlook: String,
    /// Expected salary range.
    #[serde(default)]
    pub salary_range: String,
    /// Alternative paths if the primary stream is not pursued.
    #[serde(default)]
    pub alternative_paths: Vec<String>,
    /// Longer analysis paragraph.
    #[serde(default)]
    pub detailed_analysis: String,
}

impl CareerRecommendation {
    /// Validates the response shape.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.confidence > 100 {
            return Err(GeneratorError::malformed(format!(
                "confidence {} out of range",
                self.confidence
            )));
        }
        if self.career_paths.is_empty() {
            return Err(GeneratorError::malformed("no career paths"));
        }
        if self.skills_to_develop.is_empty() {
            return Err(GeneratorError::malformed("no skills to develop"));
        }
        Ok(())
    }
}

/// Question generator errors.
///
/// None of these surface to students; the engine absorbs them all into
/// its fallback content.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeneratorError {
    /// Rate limited by the backend.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds until retry is allowed.
        retry_after_secs: u32,
    },

    /// Backend is unavailable.
    #[error("generator unavailable: {message}")]
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

    /// Response did not match the expected schema.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Invalid request configuration.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl GeneratorError {
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

    /// Returns true if a later attempt could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            GeneratorError::RateLimited { .. }
                | GeneratorError::Unavailable { .. }
                | GeneratorError::Network(_)
                | GeneratorError::Timeout { .. }
        )
    }
}
