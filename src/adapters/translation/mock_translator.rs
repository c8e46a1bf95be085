//! Mock Translator for testing.
//!
//! Produces deterministic fake translations (`"hi::<text>"` for target
//! `hi`) and records every batch it receives, so tests can assert on
//! call counts and batch sizes. Failures can be injected for the whole
//! lifetime or for the first N calls.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::foundation::LanguageCode;
use crate::ports::{TextTranslator, TranslationError};

/// Deterministic fake translator.
#[derive(Debug, Clone, Default)]
pub struct MockTranslator {
    fail_all: bool,
    fail_remaining: Arc<Mutex<u32>>,
    batches: Arc<Mutex<Vec<Vec<String>>>>,
}

impl MockTranslator {
    /// Creates a mock that translates every call deterministically.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every call fail.
    pub fn failing(mut self) -> Self {
        self.fail_all = true;
        self
    }

    /// Makes only the first `count` calls fail.
    pub fn failing_times(self, count: u32) -> Self {
        *self.fail_remaining.lock().unwrap() = count;
        self
    }

    /// Returns the number of provider calls made.
    pub fn call_count(&self) -> usize {
        self.batches.lock().unwrap().len()
    }

    /// Returns every batch of texts received, in call order.
    pub fn batches(&self) -> Vec<Vec<String>> {
        self.batches.lock().unwrap().clone()
    }

    /// The deterministic fake translation of one text.
    pub fn fake_translation(text: &str, target: LanguageCode) -> String {
        format!("{}::{}", target.as_str(), text)
    }
}

#[async_trait]
impl TextTranslator for MockTranslator {
    async fn translate(
        &self,
        texts: &[String],
        _source: LanguageCode,
        target: LanguageCode,
    ) -> Result<Vec<String>, TranslationError> {
        self.batches.lock().unwrap().push(texts.to_vec());

        if self.fail_all {
            return Err(TranslationError::unavailable("mock translator failing"));
        }
        {
            let mut remaining = self.fail_remaining.lock().unwrap();
            if *remaining > 0 {
                *remaining -= 1;
                return Err(TranslationError::unavailable("mock translator failing"));
            }
        }

        Ok(texts
            .iter()
            .map(|text| Self::fake_translation(text, target))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn translates_deterministically_and_records_batches() {
        let mock = MockTranslator::new();
        let texts = vec!["Hello".to_string(), "Careers".to_string()];

        let out = mock
            .translate(&texts, LanguageCode::En, LanguageCode::Hi)
            .await
            .unwrap();

        assert_eq!(out, vec!["hi::Hello".to_string(), "hi::Careers".to_string()]);
        assert_eq!(mock.call_count(), 1);
        assert_eq!(mock.batches()[0], texts);
    }

    #[tokio::test]
    async fn failing_times_recovers_after_count() {
        let mock = MockTranslator::new().failing_times(1);
        let texts = vec!["Hello".to_string()];

        assert!(mock
            .translate(&texts, LanguageCode::En, LanguageCode::Hi)
            .await
            .is_err());
        assert!(mock
            .translate(&texts, LanguageCode::En, LanguageCode::Hi)
            .await
            .is_ok());
        assert_eq!(mock.call_count(), 2);
    }
}
