//! Final quiz result.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Percentage, Timestamp};

use super::question::StreamTag;

/// Outcome of one completed quiz.
///
/// Immutable once produced; a retake creates a new result that replaces
/// the old one in the student's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    /// Recommended academic stream.
    pub stream: StreamTag,
    /// Confidence in the recommendation, 0-100.
    pub score: Percentage,
    /// Strengths identified from the answers.
    pub strengths: Vec<String>,
    /// Suggested career paths.
    pub recommendations: Vec<String>,
    /// When the quiz was completed.
    pub completed_at: Timestamp,
}

impl QuizResult {
    /// Creates a result stamped with the current time.
    pub fn new(
        stream: StreamTag,
        score: Percentage,
        strengths: Vec<String>,
        recommendations: Vec<String>,
    ) -> Self {
        Self {
            stream,
            score,
            strengths,
            recommendations,
            completed_at: Timestamp::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stamps_completion_time() {
        let before = Timestamp::now();
        let result = QuizResult::new(
            StreamTag::Arts,
            Percentage::new(82),
            vec!["Communication".to_string()],
            vec!["Journalism".to_string()],
        );
        let after = Timestamp::now();

        assert!(!result.completed_at.is_before(&before));
        assert!(!result.completed_at.is_after(&after));
        assert_eq!(result.stream, StreamTag::Arts);
        assert_eq!(result.score.value(), 82);
    }
}
