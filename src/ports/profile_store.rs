//! Profile Store Port - One-way sink for quiz results.
//!
//! The student profile lives in the hosting application. The engine only
//! needs to hand over a completed result (a notification, not a callback
//! contract: there is no acknowledgement and no error channel) and to
//! ask whether a student has ever completed a quiz.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::UserId;
use crate::domain::quiz::QuizResult;

/// Port for the owning student profile.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Records a completed quiz result against the student's profile.
    ///
    /// A retake replaces the previous result. One-way: failures are the
    /// store's own concern and are not reported back.
    async fn record_quiz_result(&self, user_id: &UserId, result: QuizResult);

    /// Returns true if the student has ever completed a quiz.
    async fn has_completed_quiz(&self, user_id: &UserId) -> bool;
}

/// Secondary-school class the student is enrolled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassLevel {
    /// Class 10.
    #[serde(rename = "10")]
    Ten,
    /// Class 12.
    #[serde(rename = "12")]
    Twelve,
}

/// A student profile as held by the in-memory store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Profile identifier.
    pub id: UserId,
    /// Student name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Class 10 or 12.
    pub class_level: ClassLevel,
    /// Self-reported interests.
    pub interests: Vec<String>,
    /// Latest completed quiz result, if any.
    pub quiz_result: Option<QuizResult>,
    /// College IDs the student bookmarked.
    pub saved_colleges: Vec<String>,
}

impl UserProfile {
    /// Creates a profile with no quiz result and no saved colleges.
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        class_level: ClassLevel,
        interests: Vec<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            class_level,
            interests,
            quiz_result: None,
            saved_colleges: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_level_serializes_as_class_number() {
        assert_eq!(serde_json::to_string(&ClassLevel::Ten).unwrap(), "\"10\"");
        let back: ClassLevel = serde_json::from_str("\"12\"").unwrap();
        assert_eq!(back, ClassLevel::Twelve);
    }

    #[test]
    fn new_profile_has_no_result() {
        let profile = UserProfile::new(
            UserId::new("u1").unwrap(),
            "Asha",
            "asha@example.in",
            ClassLevel::Twelve,
            vec!["Physics".to_string()],
        );
        assert!(profile.quiz_result.is_none());
        assert!(profile.saved_colleges.is_empty());
    }
}
