//! Answered-question log entries.

use serde::{Deserialize, Serialize};

use super::question::{Question, QuestionOption, StreamWeights};

/// One recorded answer: the question asked, the option chosen, and the
/// option's scoring weights.
///
/// Entries are append-only for the lifetime of a session and cleared on
/// reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnsweredQuestion {
    /// The question text as shown.
    pub question: String,
    /// The chosen option text.
    pub answer: String,
    /// Scoring contribution of the chosen option.
    pub weights: StreamWeights,
}

impl AnsweredQuestion {
    /// Records the choice of `option` for `question`.
    pub fn from_choice(question: &Question, option: &QuestionOption) -> Self {
        Self {
            question: question.prompt.clone(),
            answer: option.text.clone(),
            weights: option.weight,
        }
    }
}
