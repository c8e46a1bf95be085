//! Quiz engine - orchestrates one quiz session against the generator.
//!
//! The engine serves pool questions synchronously and issues at most one
//! outstanding generator call at a time (a question generation or the
//! terminal recommendation). Every generator failure is absorbed:
//! generation failures substitute an authored fallback question,
//! recommendation failures fall back to the deterministic weight-sum
//! scoring. Students never see an external error.
//!
//! The session lock is never held across an await; a reset during an
//! outstanding call bumps the session epoch, and the late response is
//! discarded when it lands.

use std::sync::{Arc, Mutex};

use crate::domain::foundation::{LanguageCode, Percentage, UserId};
use crate::ports::{
    PriorAnswer, ProfileStore, QuestionGenerator, QuestionRequest, RecommendationRequest,
};

use super::errors::QuizError;
use super::question::Question;
use super::question_bank;
use super::result::QuizResult;
use super::scoring;
use super::session::{NextAction, QuizPhase, QuizSession};

/// Default number of questions per quiz.
pub const DEFAULT_QUESTION_CEILING: usize = 15;

/// Outcome of a successful answer submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The next question to display.
    NextQuestion(Question),
    /// The quiz finished and published this result.
    Completed(QuizResult),
    /// The session was reset while the call was outstanding; the
    /// response was discarded and no state changed.
    Superseded,
}

/// What must happen after an answer is recorded, with everything the
/// asynchronous leg needs captured under the lock.
enum Plan {
    Ask(Question),
    Generate {
        epoch: u64,
        language: LanguageCode,
        request: QuestionRequest,
        next_id: u32,
        rotation: usize,
    },
    Score {
        epoch: u64,
        request: RecommendationRequest,
    },
}

/// Orchestrates a single quiz session.
pub struct QuizEngine {
    generator: Arc<dyn QuestionGenerator>,
    profile_sink: Option<(Arc<dyn ProfileStore>, UserId)>,
    session: Mutex<QuizSession>,
}

impl QuizEngine {
    /// Creates an engine with the default question ceiling.
    pub fn new(generator: Arc<dyn QuestionGenerator>) -> Self {
        Self::with_question_ceiling(generator, DEFAULT_QUESTION_CEILING)
    }

    /// Creates an engine asking exactly `question_ceiling` questions.
    pub fn with_question_ceiling(
        generator: Arc<dyn QuestionGenerator>,
        question_ceiling: usize,
    ) -> Self {
        Self {
            generator,
            profile_sink: None,
            session: Mutex::new(QuizSession::new(question_ceiling)),
        }
    }

    /// Attaches a profile that receives the result on completion.
    pub fn with_profile_sink(mut self, store: Arc<dyn ProfileStore>, user_id: UserId) -> Self {
        self.profile_sink = Some((store, user_id));
        self
    }

    /// Starts the quiz in the given language and returns the first
    /// question. The opening pool is served locally with no external
    /// call.
    ///
    /// # Errors
    ///
    /// - `InvalidPhase` if a quiz is already in progress
    pub fn start(&self, language: LanguageCode) -> Result<Question, QuizError> {
        let mut session = self.session.lock().unwrap();
        let first = session.begin(language, question_bank::standard_questions(language))?;
        Ok(first.clone())
    }

    /// Submits the answer at `option_index` for the current question.
    ///
    /// Completes synchronously while the pool has unused questions;
    /// otherwise suspends on a single generator call (question
    /// generation, or the recommendation once the ceiling is reached)
    /// and falls back to authored content if it fails.
    ///
    /// # Errors
    ///
    /// - `InvalidPhase` unless a question is awaiting an answer
    /// - `InvalidSelection` if the index is out of range
    pub async fn submit_answer(&self, option_index: usize) -> Result<SubmitOutcome, QuizError> {
        let plan = {
            let mut session = self.session.lock().unwrap();
            let action = session.record_answer(option_index)?;
            let epoch = session.epoch();
            let language = session.language();
            let prior_answers: Vec<PriorAnswer> =
                session.answers().iter().map(PriorAnswer::from).collect();

            match action {
                NextAction::Ask => {
                    let question = session
                        .current_question()
                        .cloned()
                        .ok_or_else(|| QuizError::invalid_phase("serve question", session.phase()))?;
                    Plan::Ask(question)
                }
                NextAction::Generate => Plan::Generate {
                    epoch,
                    language,
                    request: QuestionRequest {
                        prior_answers,
                        question_index: session.answered_count(),
                        language,
                    },
                    next_id: session.next_question_id(),
                    rotation: session.answered_count(),
                },
                NextAction::Score => Plan::Score {
                    epoch,
                    request: RecommendationRequest {
                        answers: prior_answers,
                        language,
                    },
                },
            }
        };

        match plan {
            Plan::Ask(question) => Ok(SubmitOutcome::NextQuestion(question)),
            Plan::Generate {
                epoch,
                language,
                request,
                next_id,
                rotation,
            } => self.generate_next(epoch, language, request, next_id, rotation).await,
            Plan::Score { epoch, request } => self.finish(epoch, request).await,
        }
    }

    /// Discards the session and returns to `NotStarted`.
    ///
    /// Responses from calls still outstanding at reset time are ignored
    /// when they land.
    pub fn reset(&self) {
        self.session.lock().unwrap().reset();
    }

    /// Returns the current phase.
    pub fn phase(&self) -> QuizPhase {
        self.session.lock().unwrap().phase()
    }

    /// Returns the question currently awaiting an answer, if any.
    pub fn current_question(&self) -> Option<Question> {
        self.session.lock().unwrap().current_question().cloned()
    }

    /// Returns the number of answers recorded so far.
    pub fn answered_count(&self) -> usize {
        self.session.lock().unwrap().answered_count()
    }

    /// Returns the published result, if the quiz completed.
    pub fn result(&self) -> Option<QuizResult> {
        self.session.lock().unwrap().result().cloned()
    }

    /// Runs the single-attempt generation call, substituting an authored
    /// fallback question on any failure.
    async fn generate_next(
        &self,
        epoch: u64,
        language: LanguageCode,
        request: QuestionRequest,
        next_id: u32,
        rotation: usize,
    ) -> Result<SubmitOutcome, QuizError> {
        let question = match self.generator.next_question(request).await {
            Ok(generated) => match generated.validate() {
                Ok(()) => generated.into_question(next_id),
                Err(err) => {
                    tracing::warn!(error = %err, "generator returned malformed question, substituting fallback");
                    question_bank::fallback_question(next_id, rotation, language)
                }
            },
            Err(err) => {
                tracing::warn!(error = %err, "question generation unavailable, substituting fallback");
                question_bank::fallback_question(next_id, rotation, language)
            }
        };

        let mut session = self.session.lock().unwrap();
        if session.epoch() != epoch {
            tracing::debug!("discarding generated question for reset session");
            return Ok(SubmitOutcome::Superseded);
        }
        let installed = session.install_question(question)?;
        Ok(SubmitOutcome::NextQuestion(installed.clone()))
    }

    /// Runs the terminal recommendation call, falling back to the
    /// deterministic weight-sum result, then publishes to the profile.
    async fn finish(
        &self,
        epoch: u64,
        request: RecommendationRequest,
    ) -> Result<SubmitOutcome, QuizError> {
        let result = match self.generator.recommendation(request).await {
            Ok(rec) => match rec.validate() {
                Ok(()) => QuizResult::new(
                    rec.primary_stream,
                    Percentage::new(rec.confidence),
                    rec.skills_to_develop,
                    rec.career_paths,
                ),
                Err(err) => {
                    tracing::warn!(error = %err, "generator returned malformed recommendation, using local scoring");
                    self.fallback_result()
                }
            },
            Err(err) => {
                tracing::warn!(error = %err, "recommendation unavailable, using local scoring");
                self.fallback_result()
            }
        };

        {
            let mut session = self.session.lock().unwrap();
            if session.epoch() != epoch {
                tracing::debug!("discarding recommendation for reset session");
                return Ok(SubmitOutcome::Superseded);
            }
            session.complete(result.clone())?;
        }

        if let Some((store, user_id)) = &self.profile_sink {
            store.record_quiz_result(user_id, result.clone()).await;
        }

        Ok(SubmitOutcome::Completed(result))
    }

    /// Builds the deterministic fallback result from the answer log.
    ///
    /// An epoch mismatch is caught before the result is installed, so a
    /// reset racing this read at worst aggregates an empty log and the
    /// result is then discarded.
    fn fallback_result(&self) -> QuizResult {
        let session = self.session.lock().unwrap();
        let (stream, score) = scoring::aggregate(session.answers());
        QuizResult::new(
            stream,
            score,
            question_bank::fallback_strengths(),
            question_bank::fallback_recommendations(),
        )
    }
}
