//! Quiz module - adaptive career aptitude quiz.
//!
//! The session aggregate holds the state machine; the engine orchestrates
//! generator calls around it with an absorb-all-failures fallback policy;
//! scoring is the deterministic local fallback for the recommendation.

mod answer;
mod engine;
mod errors;
mod question;
pub mod question_bank;
mod result;
pub mod scoring;
mod session;

pub use answer::AnsweredQuestion;
pub use engine::{QuizEngine, SubmitOutcome, DEFAULT_QUESTION_CEILING};
pub use errors::QuizError;
pub use question::{Question, QuestionCategory, QuestionOption, StreamTag, StreamWeights};
pub use result::QuizResult;
pub use session::{NextAction, QuizPhase, QuizSession};
