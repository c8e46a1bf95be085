//! Mock Question Generator for testing.
//!
//! Configurable mock implementation of the QuestionGenerator port,
//! allowing quiz flows to run without calling a real model.
//!
//! # Features
//!
//! - Queued question/recommendation replies (consumed in order)
//! - A failing mode where every call errors
//! - Simulated delay for reset-race and timeout testing
//! - Call recording for verification

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::quiz::{QuestionCategory, StreamTag, StreamWeights};
use crate::ports::{
    CareerRecommendation, GeneratedOption, GeneratedQuestion, GeneratorError, QuestionGenerator,
    QuestionRequest, RecommendationRequest,
};

/// Mock question generator.
///
/// Queued replies are consumed first; with an empty queue the mock
/// produces a valid default reply, or an error in failing mode.
#[derive(Debug, Clone, Default)]
pub struct MockQuestionGenerator {
    questions: Arc<Mutex<VecDeque<Result<GeneratedQuestion, GeneratorError>>>>,
    recommendations: Arc<Mutex<VecDeque<Result<CareerRecommendation, GeneratorError>>>>,
    fail_all: bool,
    delay: Duration,
    question_calls: Arc<Mutex<Vec<QuestionRequest>>>,
    recommendation_calls: Arc<Mutex<Vec<RecommendationRequest>>>,
}

impl MockQuestionGenerator {
    /// Creates a mock that answers every call with a valid default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a question reply.
    pub fn with_question(self, question: GeneratedQuestion) -> Self {
        self.questions.lock().unwrap().push_back(Ok(question));
        self
    }

    /// Queues a question error.
    pub fn with_question_error(self, error: GeneratorError) -> Self {
        self.questions.lock().unwrap().push_back(Err(error));
        self
    }

    /// Queues a recommendation reply.
    pub fn with_recommendation(self, recommendation: CareerRecommendation) -> Self {
        self.recommendations
            .lock()
            .unwrap()
            .push_back(Ok(recommendation));
        self
    }

    /// Queues a recommendation error.
    pub fn with_recommendation_error(self, error: GeneratorError) -> Self {
        self.recommendations.lock().unwrap().push_back(Err(error));
        self
    }

    /// Makes every call fail (after queued replies are exhausted the
    /// queue is ignored; failing mode always errors).
    pub fn failing(mut self) -> Self {
        self.fail_all = true;
        self
    }

    /// Sets simulated latency per call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns how many question calls were made.
    pub fn question_call_count(&self) -> usize {
        self.question_calls.lock().unwrap().len()
    }

    /// Returns all recorded question calls.
    pub fn question_calls(&self) -> Vec<QuestionRequest> {
        self.question_calls.lock().unwrap().clone()
    }

    /// Returns how many recommendation calls were made.
    pub fn recommendation_call_count(&self) -> usize {
        self.recommendation_calls.lock().unwrap().len()
    }

    /// Returns all recorded recommendation calls.
    pub fn recommendation_calls(&self) -> Vec<RecommendationRequest> {
        self.recommendation_calls.lock().unwrap().clone()
    }

    fn default_question() -> GeneratedQuestion {
        GeneratedQuestion {
            question: "Which kind of task would you pick first?".to_string(),
            options: vec![
                GeneratedOption {
                    text: "Running an experiment".to_string(),
                    weight: StreamWeights::new(3, 1, 0, 1),
                },
                GeneratedOption {
                    text: "Planning a budget".to_string(),
                    weight: StreamWeights::new(1, 3, 0, 1),
                },
                GeneratedOption {
                    text: "Writing an essay".to_string(),
                    weight: StreamWeights::new(0, 1, 3, 1),
                },
                GeneratedOption {
                    text: "Repairing a machine".to_string(),
                    weight: StreamWeights::new(1, 0, 1, 3),
                },
            ],
            category: QuestionCategory::Interests,
        }
    }

    fn default_recommendation() -> CareerRecommendation {
        CareerRecommendation {
            primary_stream: StreamTag::Science,
            confidence: 80,
            career_paths: vec!["Engineer".to_string(), "Doctor".to_string()],
            degree_programs: vec!["B.Tech".to_string()],
            top_colleges: vec!["IIT Delhi".to_string()],
            skills_to_develop: vec!["Mathematics".to_string()],
            industry_outlook: "Bright future in science field".to_string(),
            salary_range: "₹3-15 LPA".to_string(),
            alternative_paths: vec!["Research".to_string()],
            detailed_analysis: String::new(),
        }
    }
}

#[async_trait]
impl QuestionGenerator for MockQuestionGenerator {
    async fn next_question(
        &self,
        request: QuestionRequest,
    ) -> Result<GeneratedQuestion, GeneratorError> {
        self.question_calls.lock().unwrap().push(request);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        if self.fail_all {
            return Err(GeneratorError::unavailable("mock generator failing"));
        }

        self.questions
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Self::default_question()))
    }

    async fn recommendation(
        &self,
        request: RecommendationRequest,
    ) -> Result<CareerRecommendation, GeneratorError> {
        self.recommendation_calls.lock().unwrap().push(request);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        if self.fail_all {
            return Err(GeneratorError::unavailable("mock generator failing"));
        }

        self.recommendations
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Self::default_recommendation()))
    }
}
