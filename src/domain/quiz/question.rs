//! Question, option, and stream-weight value objects.
//!
//! Questions are immutable once issued: they enter the session pool
//! either from the fixed authored set or from the question generator,
//! and are never edited or reordered afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Academic stream a student can be guided towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StreamTag {
    Science,
    Commerce,
    Arts,
    Vocational,
}

impl StreamTag {
    /// Fixed tie-break priority: earlier entries win equal totals.
    pub const PRIORITY: [StreamTag; 4] = [
        StreamTag::Science,
        StreamTag::Commerce,
        StreamTag::Arts,
        StreamTag::Vocational,
    ];

    /// Returns the display name of the stream.
    pub fn as_str(&self) -> &'static str {
        match self {
            StreamTag::Science => "Science",
            StreamTag::Commerce => "Commerce",
            StreamTag::Arts => "Arts",
            StreamTag::Vocational => "Vocational",
        }
    }
}

impl fmt::Display for StreamTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-option scoring contribution toward each stream.
///
/// Keys the generator omits default to zero, so every option always
/// carries a weight for all four streams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamWeights {
    #[serde(default)]
    pub science: u32,
    #[serde(default)]
    pub commerce: u32,
    #[serde(default)]
    pub arts: u32,
    #[serde(default)]
    pub vocational: u32,
}

impl StreamWeights {
    /// Creates a weight map from the four stream contributions.
    pub fn new(science: u32, commerce: u32, arts: u32, vocational: u32) -> Self {
        Self {
            science,
            commerce,
            arts,
            vocational,
        }
    }

    /// Returns the contribution toward the given stream.
    pub fn get(&self, tag: StreamTag) -> u32 {
        match tag {
            StreamTag::Science => self.science,
            StreamTag::Commerce => self.commerce,
            StreamTag::Arts => self.arts,
            StreamTag::Vocational => self.vocational,
        }
    }
}

/// Topic area a question probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    Interests,
    Strengths,
    Preferences,
    WorkPreferences,
    #[serde(alias = "location")]
    LocationPreferences,
    #[serde(alias = "financial_considerations")]
    Financial,
    #[serde(alias = "career_goals")]
    Goals,
    LearningStyle,
    Personality,
    /// Anything the generator invents outside the known set.
    #[serde(other)]
    Other,
}

/// A selectable answer with its scoring contribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    /// Displayable option text.
    pub text: String,
    /// Contribution toward each stream when chosen.
    pub weight: StreamWeights,
}

impl QuestionOption {
    /// Creates an option.
    pub fn new(text: impl Into<String>, weight: StreamWeights) -> Self {
        Self {
            text: text.into(),
            weight,
        }
    }
}

/// One quiz question with its ordered options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Ordinal within the session (1-based).
    pub id: u32,
    /// The question text shown to the student.
    pub prompt: String,
    /// Ordered answer options.
    pub options: Vec<QuestionOption>,
    /// Topic area.
    pub category: QuestionCategory,
}

impl Question {
    /// Creates a question.
    pub fn new(
        id: u32,
        prompt: impl Into<String>,
        options: Vec<QuestionOption>,
        category: QuestionCategory,
    ) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            options,
            category,
        }
    }

    /// Returns the option at the given index, if any.
    pub fn option(&self, index: usize) -> Option<&QuestionOption> {
        self.options.get(index)
    }

    /// Returns the number of options.
    pub fn option_count(&self) -> usize {
        self.options.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_tag_priority_orders_science_first() {
        assert_eq!(
            StreamTag::PRIORITY,
            [
                StreamTag::Science,
                StreamTag::Commerce,
                StreamTag::Arts,
                StreamTag::Vocational
            ]
        );
    }

    #[test]
    fn stream_tag_serializes_with_display_name() {
        assert_eq!(
            serde_json::to_string(&StreamTag::Vocational).unwrap(),
            "\"Vocational\""
        );
    }

    #[test]
    fn weights_missing_keys_default_to_zero() {
        let w: StreamWeights = serde_json::from_str(r#"{"science": 3, "arts": 1}"#).unwrap();
        assert_eq!(w.science, 3);
        assert_eq!(w.commerce, 0);
        assert_eq!(w.arts, 1);
        assert_eq!(w.vocational, 0);
    }

    #[test]
    fn weights_get_maps_each_tag() {
        let w = StreamWeights::new(1, 2, 3, 4);
        assert_eq!(w.get(StreamTag::Science), 1);
        assert_eq!(w.get(StreamTag::Commerce), 2);
        assert_eq!(w.get(StreamTag::Arts), 3);
        assert_eq!(w.get(StreamTag::Vocational), 4);
    }

    #[test]
    fn category_deserializes_known_and_aliased_names() {
        let c: QuestionCategory = serde_json::from_str("\"work_preferences\"").unwrap();
        assert_eq!(c, QuestionCategory::WorkPreferences);

        let c: QuestionCategory = serde_json::from_str("\"location\"").unwrap();
        assert_eq!(c, QuestionCategory::LocationPreferences);
    }

    #[test]
    fn category_unknown_name_falls_back_to_other() {
        let c: QuestionCategory = serde_json::from_str("\"astrology\"").unwrap();
        assert_eq!(c, QuestionCategory::Other);
    }

    #[test]
    fn question_option_lookup_is_bounds_checked() {
        let q = Question::new(
            1,
            "Which activities do you find most engaging?",
            vec![QuestionOption::new("Experiments", StreamWeights::new(3, 1, 0, 1))],
            QuestionCategory::Interests,
        );
        assert!(q.option(0).is_some());
        assert!(q.option(1).is_none());
        assert_eq!(q.option_count(), 1);
    }
}
