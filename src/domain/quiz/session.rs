//! Quiz session aggregate.
//!
//! Holds the state machine for one run of the quiz: the append-only
//! question pool, the answer log, and the current phase. All mutations
//! are validated; the asynchronous orchestration around generation and
//! scoring lives in [`super::engine`].
//!
//! # Invariants
//!
//! - Answers are recorded in strict submission order.
//! - The question pool only ever appends, never reorders or removes.
//! - The session completes after exactly `question_ceiling` answers.
//! - `epoch` changes on every reset, so responses from calls issued
//!   before a reset can be detected and discarded.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{LanguageCode, SessionId, StateMachine};

use super::answer::AnsweredQuestion;
use super::errors::QuizError;
use super::question::Question;
use super::result::QuizResult;

/// Lifecycle phase of a quiz session.
///
/// `AwaitingAnswer`, `Generating`, and `Scoring` are the sub-states of
/// an in-progress session: `Generating` while a question-generation call
/// is outstanding, `Scoring` while the recommendation call is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizPhase {
    /// No quiz in progress.
    NotStarted,
    /// A question is displayed and an answer can be submitted.
    AwaitingAnswer,
    /// Waiting on the question generator; submissions are suspended.
    Generating,
    /// Waiting on the recommendation call; submissions are suspended.
    Scoring,
    /// A result has been published.
    Completed,
}

impl StateMachine for QuizPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use QuizPhase::*;
        // Reset is valid from any state.
        if *target == NotStarted {
            return true;
        }
        matches!(
            (self, target),
            (NotStarted, AwaitingAnswer)
                | (AwaitingAnswer, Generating)
                | (AwaitingAnswer, Scoring)
                | (Generating, AwaitingAnswer)
                | (Scoring, Completed)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use QuizPhase::*;
        match self {
            NotStarted => vec![AwaitingAnswer, NotStarted],
            AwaitingAnswer => vec![Generating, Scoring, NotStarted],
            Generating => vec![AwaitingAnswer, NotStarted],
            Scoring => vec![Completed, NotStarted],
            Completed => vec![NotStarted],
        }
    }
}

/// What the orchestrator must do after an answer is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextAction {
    /// The pool already holds the next question; ask it.
    Ask,
    /// The pool is exhausted; a generation call is needed.
    Generate,
    /// The ceiling was reached; a recommendation call is needed.
    Score,
}

/// State for one run of the quiz.
#[derive(Debug, Clone)]
pub struct QuizSession {
    id: SessionId,
    language: LanguageCode,
    phase: QuizPhase,
    questions: Vec<Question>,
    current: usize,
    answers: Vec<AnsweredQuestion>,
    result: Option<QuizResult>,
    epoch: u64,
    question_ceiling: usize,
}

impl QuizSession {
    /// Creates an idle session with the given answer ceiling.
    pub fn new(question_ceiling: usize) -> Self {
        Self {
            id: SessionId::new(),
            language: LanguageCode::En,
            phase: QuizPhase::NotStarted,
            questions: Vec::new(),
            current: 0,
            answers: Vec::new(),
            result: None,
            epoch: 0,
            question_ceiling,
        }
    }

    // ─────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────

    /// Returns the session ID.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Returns the session language.
    pub fn language(&self) -> LanguageCode {
        self.language
    }

    /// Returns the current phase.
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    /// Returns the question currently awaiting an answer, if any.
    pub fn current_question(&self) -> Option<&Question> {
        if self.phase == QuizPhase::AwaitingAnswer {
            self.questions.get(self.current)
        } else {
            None
        }
    }

    /// Returns the answer log in submission order.
    pub fn answers(&self) -> &[AnsweredQuestion] {
        &self.answers
    }

    /// Returns the number of answers recorded so far.
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Returns how many questions the session asks in total.
    pub fn question_ceiling(&self) -> usize {
        self.question_ceiling
    }

    /// Returns the number of questions in the pool.
    pub fn pool_size(&self) -> usize {
        self.questions.len()
    }

    /// Returns the published result, if the session completed.
    pub fn result(&self) -> Option<&QuizResult> {
        self.result.as_ref()
    }

    /// Returns the reset epoch. Responses captured under an older epoch
    /// are stale and must be discarded.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    // ─────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────

    /// Begins the quiz with the fixed opening pool.
    ///
    /// # Errors
    ///
    /// - `InvalidPhase` unless the session is `NotStarted`
    pub fn begin(
        &mut self,
        language: LanguageCode,
        pool: Vec<Question>,
    ) -> Result<&Question, QuizError> {
        self.ensure_phase(QuizPhase::NotStarted, "start")?;
        debug_assert!(!pool.is_empty());

        self.language = language;
        self.questions = pool;
        self.current = 0;
        self.phase = QuizPhase::AwaitingAnswer;
        Ok(&self.questions[0])
    }

    /// Records the answer at `option_index` for the current question and
    /// decides what happens next.
    ///
    /// # Errors
    ///
    /// - `InvalidPhase` unless a question is awaiting an answer
    /// - `InvalidSelection` if the index is out of range; the answer log
    ///   is left unmodified
    pub fn record_answer(&mut self, option_index: usize) -> Result<NextAction, QuizError> {
        self.ensure_phase(QuizPhase::AwaitingAnswer, "submit answer")?;

        let question = &self.questions[self.current];
        let option = question
            .option(option_index)
            .ok_or_else(|| QuizError::invalid_selection(option_index, question.option_count()))?;

        self.answers
            .push(AnsweredQuestion::from_choice(question, option));

        if self.answers.len() >= self.question_ceiling {
            self.set_phase(QuizPhase::Scoring);
            return Ok(NextAction::Score);
        }

        if self.current + 1 < self.questions.len() {
            self.current += 1;
            Ok(NextAction::Ask)
        } else {
            self.set_phase(QuizPhase::Generating);
            Ok(NextAction::Generate)
        }
    }

    /// Appends a question to the pool and resumes answering.
    ///
    /// Called with either a generated question or a fallback substitute.
    ///
    /// # Errors
    ///
    /// - `InvalidPhase` unless a generation call was outstanding
    pub fn install_question(&mut self, question: Question) -> Result<&Question, QuizError> {
        self.ensure_phase(QuizPhase::Generating, "install question")?;

        self.questions.push(question);
        self.current = self.questions.len() - 1;
        self.set_phase(QuizPhase::AwaitingAnswer);
        Ok(&self.questions[self.current])
    }

    /// Ordinal for the next question appended to the pool (1-based).
    pub fn next_question_id(&self) -> u32 {
        self.questions.len() as u32 + 1
    }

    /// Publishes the result and completes the session.
    ///
    /// # Errors
    ///
    /// - `InvalidPhase` unless the session was scoring
    pub fn complete(&mut self, result: QuizResult) -> Result<(), QuizError> {
        self.ensure_phase(QuizPhase::Scoring, "complete")?;

        self.result = Some(result);
        self.set_phase(QuizPhase::Completed);
        Ok(())
    }

    /// Discards all session data and returns to `NotStarted`.
    ///
    /// Valid from any phase. Bumps the epoch so responses from calls
    /// issued before the reset are ignored when they eventually land.
    pub fn reset(&mut self) {
        self.id = SessionId::new();
        self.language = LanguageCode::En;
        self.questions.clear();
        self.current = 0;
        self.answers.clear();
        self.result = None;
        self.epoch += 1;
        self.set_phase(QuizPhase::NotStarted);
    }

    // ─────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────

    fn ensure_phase(&self, expected: QuizPhase, operation: &'static str) -> Result<(), QuizError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(QuizError::invalid_phase(operation, self.phase))
        }
    }

    fn set_phase(&mut self, target: QuizPhase) {
        debug_assert!(self.phase.can_transition_to(&target));
        self.phase = target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quiz::question_bank::standard_questions;
    use crate::domain::quiz::result::QuizResult;
    use crate::domain::quiz::scoring;

    fn started_session(ceiling: usize) -> QuizSession {
        let mut session = QuizSession::new(ceiling);
        session
            .begin(LanguageCode::En, standard_questions(LanguageCode::En))
            .unwrap();
        session
    }

    #[test]
    fn begin_serves_the_first_pool_question() {
        let session = started_session(15);
        assert_eq!(session.phase(), QuizPhase::AwaitingAnswer);
        assert_eq!(session.current_question().unwrap().id, 1);
        assert_eq!(session.pool_size(), 3);
    }

    #[test]
    fn begin_twice_is_rejected() {
        let mut session = started_session(15);
        let err = session
            .begin(LanguageCode::En, standard_questions(LanguageCode::En))
            .unwrap_err();
        assert!(matches!(err, QuizError::InvalidPhase { .. }));
    }

    #[test]
    fn record_answer_appends_to_the_log_in_order() {
        let mut session = started_session(15);
        session.record_answer(0).unwrap();
        session.record_answer(2).unwrap();

        assert_eq!(session.answered_count(), 2);
        let first = &session.answers()[0];
        assert_eq!(first.question, standard_questions(LanguageCode::En)[0].prompt);
    }

    #[test]
    fn record_answer_rejects_out_of_range_index_without_logging() {
        let mut session = started_session(15);
        let err = session.record_answer(99).unwrap_err();

        assert_eq!(err, QuizError::invalid_selection(99, 4));
        assert_eq!(session.answered_count(), 0);
        assert_eq!(session.phase(), QuizPhase::AwaitingAnswer);
    }

    #[test]
    fn pool_exhaustion_suspends_in_generating() {
        let mut session = started_session(15);
        assert_eq!(session.record_answer(0).unwrap(), NextAction::Ask);
        assert_eq!(session.record_answer(0).unwrap(), NextAction::Ask);
        assert_eq!(session.record_answer(0).unwrap(), NextAction::Generate);

        assert_eq!(session.phase(), QuizPhase::Generating);
        assert!(session.current_question().is_none());

        // Submissions are suspended while generating.
        let err = session.record_answer(0).unwrap_err();
        assert!(matches!(err, QuizError::InvalidPhase { .. }));
    }

    #[test]
    fn install_question_appends_and_resumes() {
        let mut session = started_session(15);
        for _ in 0..3 {
            session.record_answer(0).unwrap();
        }

        let id = session.next_question_id();
        assert_eq!(id, 4);
        let question = crate::domain::quiz::question_bank::fallback_question(
            id,
            0,
            LanguageCode::En,
        );
        session.install_question(question).unwrap();

        assert_eq!(session.phase(), QuizPhase::AwaitingAnswer);
        assert_eq!(session.current_question().unwrap().id, 4);
        assert_eq!(session.pool_size(), 4);
    }

    #[test]
    fn ceiling_moves_session_to_scoring() {
        let mut session = started_session(3);
        session.record_answer(0).unwrap();
        session.record_answer(0).unwrap();
        assert_eq!(session.record_answer(0).unwrap(), NextAction::Score);
        assert_eq!(session.phase(), QuizPhase::Scoring);
    }

    #[test]
    fn complete_publishes_the_result() {
        let mut session = started_session(3);
        for _ in 0..3 {
            session.record_answer(0).unwrap();
        }

        let (stream, score) = scoring::aggregate(session.answers());
        let result = QuizResult::new(stream, score, vec![], vec![]);
        session.complete(result.clone()).unwrap();

        assert_eq!(session.phase(), QuizPhase::Completed);
        assert_eq!(session.result(), Some(&result));
    }

    #[test]
    fn reset_discards_state_and_bumps_epoch() {
        let mut session = started_session(15);
        session.record_answer(1).unwrap();
        let old_epoch = session.epoch();
        let old_id = *session.id();

        session.reset();

        assert_eq!(session.phase(), QuizPhase::NotStarted);
        assert_eq!(session.answered_count(), 0);
        assert_eq!(session.pool_size(), 0);
        assert!(session.result().is_none());
        assert_eq!(session.epoch(), old_epoch + 1);
        assert_ne!(*session.id(), old_id);
    }

    #[test]
    fn reset_is_valid_mid_generation() {
        let mut session = started_session(15);
        for _ in 0..3 {
            session.record_answer(0).unwrap();
        }
        assert_eq!(session.phase(), QuizPhase::Generating);

        session.reset();
        assert_eq!(session.phase(), QuizPhase::NotStarted);
    }

    #[test]
    fn phase_transition_map_matches_lifecycle() {
        use QuizPhase::*;
        assert!(NotStarted.can_transition_to(&AwaitingAnswer));
        assert!(AwaitingAnswer.can_transition_to(&Generating));
        assert!(AwaitingAnswer.can_transition_to(&Scoring));
        assert!(Generating.can_transition_to(&AwaitingAnswer));
        assert!(Scoring.can_transition_to(&Completed));
        // Reset from anywhere.
        for phase in [NotStarted, AwaitingAnswer, Generating, Scoring, Completed] {
            assert!(phase.can_transition_to(&NotStarted));
        }
        // No skipping straight to completion.
        assert!(!AwaitingAnswer.can_transition_to(&Completed));
        assert!(!Generating.can_transition_to(&Scoring));
    }
}
