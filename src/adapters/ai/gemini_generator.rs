//! Gemini Generator - QuestionGenerator implementation for Google's
//! Gemini `generateContent` API.
//!
//! The model is prompted as a career counselor and asked to answer in a
//! fixed JSON shape. Models wrap JSON in prose or code fences, so the
//! first `{` .. last `}` span of the reply is extracted before strict
//! deserialization; anything that fails to parse or validate is a
//! malformed response and the caller falls back.
//!
//! # Configuration
//!
//! ```ignore
//! let config = GeminiConfig::new(api_key)
//!     .with_model("gemini-2.0-flash-exp")
//!     .with_timeout(Duration::from_secs(20));
//!
//! let generator = GeminiGenerator::new(config);
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::foundation::LanguageCode;
use crate::ports::{
    CareerRecommendation, GeneratedQuestion, GeneratorError, QuestionGenerator, QuestionRequest,
    RecommendationRequest,
};

/// Configuration for the Gemini generator.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use.
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gemini-2.0-flash-exp".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Gemini API implementation of the question generator port.
pub struct GeminiGenerator {
    config: GeminiConfig,
    client: Client,
}

impl GeminiGenerator {
    /// Creates a new generator with the given configuration.
    pub fn new(config: GeminiConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the generateContent endpoint URL.
    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.config.base_url,
            self.config.model,
            self.config.api_key()
        )
    }

    /// Sends a prompt and returns the model's reply text.
    async fn generate_content(&self, prompt: String) -> Result<String, GeneratorError> {
        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(self.generate_url())
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeneratorError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    GeneratorError::network(format!("Connection failed: {}", e))
                } else {
                    GeneratorError::network(e.to_string())
                }
            })?;

        let response = self.handle_response_status(response).await?;

        let body: GeminiResponse = response
            .json()
            .await
            .map_err(|e| GeneratorError::malformed(format!("invalid response body: {}", e)))?;

        body.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| GeneratorError::malformed("no candidates in response"))
    }

    /// Parses the API response status and handles errors.
    async fn handle_response_status(&self, response: Response) -> Result<Response, GeneratorError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();
        Err(map_error_status(status, &error_body))
    }
}

/// Maps a non-success HTTP status to a generator error.
fn map_error_status(status: StatusCode, error_body: &str) -> GeneratorError {
    match status.as_u16() {
        401 | 403 => GeneratorError::AuthenticationFailed,
        429 => GeneratorError::RateLimited {
            retry_after_secs: 60,
        },
        400 => GeneratorError::InvalidRequest(error_body.to_string()),
        500..=599 => GeneratorError::unavailable(format!(
            "Server error {}: {}",
            status, error_body
        )),
        _ => GeneratorError::network(format!("Unexpected status {}: {}", status, error_body)),
    }
}

/// Extracts the first `{` .. last `}` span from model output.
fn extract_json(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Strictly parses a next-question payload.
fn parse_question_payload(text: &str) -> Result<GeneratedQuestion, GeneratorError> {
    let json = extract_json(text)
        .ok_or_else(|| GeneratorError::malformed("no JSON object in reply"))?;
    let question: GeneratedQuestion = serde_json::from_str(json)
        .map_err(|e| GeneratorError::malformed(format!("invalid question JSON: {}", e)))?;
    question.validate()?;
    Ok(question)
}

/// Strictly parses a recommendation payload.
fn parse_recommendation_payload(text: &str) -> Result<CareerRecommendation, GeneratorError> {
    let json = extract_json(text)
        .ok_or_else(|| GeneratorError::malformed("no JSON object in reply"))?;
    let recommendation: CareerRecommendation = serde_json::from_str(json)
        .map_err(|e| GeneratorError::malformed(format!("invalid recommendation JSON: {}", e)))?;
    recommendation.validate()?;
    Ok(recommendation)
}

/// English name of the language, for the prompt.
fn language_name(language: LanguageCode) -> &'static str {
    match language {
        LanguageCode::En => "English",
        LanguageCode::Hi => "Hindi",
        LanguageCode::Bn => "Bengali",
        LanguageCode::Mr => "Marathi",
        LanguageCode::Te => "Telugu",
        LanguageCode::Ta => "Tamil",
    }
}

/// Builds the next-question prompt.
fn question_prompt(request: &QuestionRequest) -> String {
    let prior = serde_json::to_string(&request.prior_answers).unwrap_or_default();
    format!(
        r#"You are an expert career counselor for Indian students. Generate the next question for a comprehensive career aptitude assessment.

Previous answers: {prior}
Current question number: {number}

Guidelines:
- Ask questions that cover: interests, strengths, work preferences, location preferences, financial considerations, career goals
- Include questions about distance from home (0-50km radius preference)
- Ask about course preferences vs college reputation
- Make questions relevant to Indian education system
- Language: {language}
- Provide 4 options for each question
- Questions should be progressive and build on previous answers

Return response in this exact JSON format:
{{
  "question": "Your question here",
  "options": [
    {{"text": "Option 1", "weight": {{"science": 3, "commerce": 1, "arts": 0, "vocational": 2}}}},
    {{"text": "Option 2", "weight": {{"science": 1, "commerce": 3, "arts": 2, "vocational": 0}}}},
    {{"text": "Option 3", "weight": {{"science": 0, "commerce": 2, "arts": 3, "vocational": 1}}}},
    {{"text": "Option 4", "weight": {{"science": 2, "commerce": 0, "arts": 1, "vocational": 3}}}}
  ],
  "category": "interests|strengths|preferences|location|financial|goals"
}}"#,
        prior = prior,
        number = request.question_index + 1,
        language = language_name(request.language),
    )
}

/// Builds the recommendation prompt.
fn recommendation_prompt(request: &RecommendationRequest) -> String {
    let answers = serde_json::to_string(&request.answers).unwrap_or_default();
    format!(
        r#"Based on the following quiz responses, provide comprehensive career recommendations for an Indian student:

Answers: {answers}

Provide detailed analysis in {language} including:
1. Recommended stream (Science/Commerce/Arts/Vocational)
2. Specific career paths
3. Suitable degree programs
4. Top colleges/universities
5. Skills to develop
6. Industry outlook
7. Salary expectations
8. Alternative paths

Return response in this JSON format:
{{
  "primaryStream": "Science|Commerce|Arts|Vocational",
  "confidence": 85,
  "careerPaths": ["Career 1", "Career 2", "Career 3"],
  "degreePrograms": ["Degree 1", "Degree 2"],
  "topColleges": ["College 1", "College 2"],
  "skillsToDevelop": ["Skill 1", "Skill 2"],
  "industryOutlook": "Detailed outlook",
  "salaryRange": "Expected salary range",
  "alternativePaths": ["Alt path 1", "Alt path 2"],
  "detailedAnalysis": "Comprehensive analysis paragraph"
}}"#,
        answers = answers,
        language = language_name(request.language),
    )
}

#[async_trait]
impl QuestionGenerator for GeminiGenerator {
    async fn next_question(
        &self,
        request: QuestionRequest,
    ) -> Result<GeneratedQuestion, GeneratorError> {
        let reply = self.generate_content(question_prompt(&request)).await?;
        parse_question_payload(&reply)
    }

    async fn recommendation(
        &self,
        request: RecommendationRequest,
    ) -> Result<CareerRecommendation, GeneratorError> {
        let reply = self
            .generate_content(recommendation_prompt(&request))
            .await?;
        parse_recommendation_payload(&reply)
    }
}

/// generateContent request body.
#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

/// generateContent response body (only the fields we read).
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::PriorAnswer;

    #[test]
    fn extract_json_finds_object_span() {
        assert_eq!(extract_json(r#"{"a": 1}"#), Some(r#"{"a": 1}"#));
        assert_eq!(
            extract_json("Here you go:\n```json\n{\"a\": 1}\n```"),
            Some(r#"{"a": 1}"#)
        );
        assert_eq!(extract_json("no json here"), None);
        assert_eq!(extract_json("} reversed {"), None);
    }

    #[test]
    fn question_payload_parses_from_fenced_reply() {
        let reply = r#"Sure! Here is the next question:
{
  "question": "How do you prefer to learn?",
  "options": [
    {"text": "Experiments", "weight": {"science": 3, "commerce": 0, "arts": 0, "vocational": 1}},
    {"text": "Case studies", "weight": {"science": 1, "commerce": 3, "arts": 1, "vocational": 0}},
    {"text": "Discussions", "weight": {"science": 0, "commerce": 1, "arts": 3, "vocational": 0}},
    {"text": "Hands-on practice", "weight": {"commerce": 0, "arts": 1, "vocational": 3}}
  ],
  "category": "learning_style"
}"#;
        let question = parse_question_payload(reply).unwrap();
        assert_eq!(question.question, "How do you prefer to learn?");
        assert_eq!(question.options.len(), 4);
        // Omitted weight key defaults to zero.
        assert_eq!(question.options[3].weight.science, 0);
    }

    #[test]
    fn question_payload_with_three_options_is_malformed() {
        let reply = r#"{
  "question": "How do you prefer to learn?",
  "options": [
    {"text": "A", "weight": {}},
    {"text": "B", "weight": {}},
    {"text": "C", "weight": {}}
  ],
  "category": "interests"
}"#;
        assert!(matches!(
            parse_question_payload(reply),
            Err(GeneratorError::MalformedResponse(_))
        ));
    }

    #[test]
    fn non_json_reply_is_malformed() {
        assert!(matches!(
            parse_question_payload("I cannot answer that."),
            Err(GeneratorError::MalformedResponse(_))
        ));
    }

    #[test]
    fn recommendation_payload_parses_either_skills_spelling() {
        for skills_key in ["skillsToDevelop", "skillsTodevelop"] {
            let reply = format!(
                r#"{{
  "primaryStream": "Arts",
  "confidence": 78,
  "careerPaths": ["Journalist"],
  "{skills_key}": ["Writing"]
}}"#
            );
            let rec = parse_recommendation_payload(&reply).unwrap();
            assert_eq!(rec.confidence, 78);
            assert_eq!(rec.skills_to_develop, vec!["Writing".to_string()]);
        }
    }

    #[test]
    fn recommendation_with_unknown_stream_is_malformed() {
        let reply = r#"{
  "primaryStream": "Sports",
  "confidence": 60,
  "careerPaths": ["Coach"],
  "skillsToDevelop": ["Fitness"]
}"#;
        assert!(parse_recommendation_payload(reply).is_err());
    }

    #[test]
    fn status_mapping_follows_provider_semantics() {
        assert_eq!(
            map_error_status(StatusCode::UNAUTHORIZED, ""),
            GeneratorError::AuthenticationFailed
        );
        assert!(matches!(
            map_error_status(StatusCode::TOO_MANY_REQUESTS, ""),
            GeneratorError::RateLimited { .. }
        ));
        assert!(matches!(
            map_error_status(StatusCode::BAD_REQUEST, "bad prompt"),
            GeneratorError::InvalidRequest(_)
        ));
        assert!(matches!(
            map_error_status(StatusCode::SERVICE_UNAVAILABLE, ""),
            GeneratorError::Unavailable { .. }
        ));
    }

    #[test]
    fn question_prompt_carries_prior_answers_and_language() {
        let request = QuestionRequest {
            prior_answers: vec![PriorAnswer {
                question: "Which activities do you find most engaging?".to_string(),
                answer: "Conducting experiments and analyzing data".to_string(),
            }],
            question_index: 3,
            language: LanguageCode::Hi,
        };
        let prompt = question_prompt(&request);

        assert!(prompt.contains("Conducting experiments and analyzing data"));
        assert!(prompt.contains("Current question number: 4"));
        assert!(prompt.contains("Language: Hindi"));
    }

    #[test]
    fn generate_url_embeds_model_and_key() {
        let generator = GeminiGenerator::new(
            GeminiConfig::new("test-key").with_base_url("http://localhost:9999"),
        );
        assert_eq!(
            generator.generate_url(),
            "http://localhost:9999/v1beta/models/gemini-2.0-flash-exp:generateContent?key=test-key"
        );
    }
}
