//! Quiz session error types.
//!
//! Only internal contract violations surface here. External collaborator
//! failures are absorbed by the engine's fallback policy and never reach
//! the caller.

use thiserror::Error;

use super::session::QuizPhase;

/// Errors surfaced by quiz session operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// Answer index outside the current question's options.
    ///
    /// Recoverable: the session state is unchanged and the caller can
    /// re-prompt.
    #[error("invalid selection: index {index} out of {option_count} options")]
    InvalidSelection {
        /// The rejected index.
        index: usize,
        /// How many options the current question has.
        option_count: usize,
    },

    /// Operation called while the session is in the wrong phase.
    #[error("cannot {operation} while session is {phase:?}")]
    InvalidPhase {
        /// The attempted operation.
        operation: &'static str,
        /// The phase the session was in.
        phase: QuizPhase,
    },
}

impl QuizError {
    /// Creates an invalid selection error.
    pub fn invalid_selection(index: usize, option_count: usize) -> Self {
        QuizError::InvalidSelection {
            index,
            option_count,
        }
    }

    /// Creates an invalid phase error.
    pub fn invalid_phase(operation: &'static str, phase: QuizPhase) -> Self {
        QuizError::InvalidPhase { operation, phase }
    }
}
