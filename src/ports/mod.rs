//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `QuestionGenerator` - AI backend producing adaptive questions and
//!   the final recommendation
//! - `TextTranslator` - machine translation backend
//! - `ProfileStore` - one-way sink for completed quiz results

mod profile_store;
mod question_generator;
mod text_translator;

pub use profile_store::{ClassLevel, ProfileStore, UserProfile};
pub use question_generator::{
    CareerRecommendation, GeneratedOption, GeneratedQuestion, GeneratorError, PriorAnswer,
    QuestionGenerator, QuestionRequest, RecommendationRequest, OPTIONS_PER_QUESTION,
};
pub use text_translator::{TextTranslator, TranslationError};
