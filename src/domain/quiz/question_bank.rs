//! Hand-authored question content.
//!
//! The fixed opening pool and the fallback questions substituted when
//! the generator is unavailable. Content is authored in English and
//! Hindi; other languages receive the English text and rely on the
//! translation layer.

use crate::domain::foundation::LanguageCode;

use super::question::{Question, QuestionCategory, QuestionOption, StreamWeights};

/// Number of questions in the fixed opening pool.
pub const STANDARD_POOL_SIZE: usize = 3;

fn authored(language: LanguageCode, en: &str, hi: &str) -> String {
    match language {
        LanguageCode::Hi => hi.to_string(),
        _ => en.to_string(),
    }
}

/// The fixed questions every session opens with, localized.
pub fn standard_questions(language: LanguageCode) -> Vec<Question> {
    vec![
        Question::new(
            1,
            authored(
                language,
                "Which activities do you find most engaging?",
                "आप किस प्रकार की गतिविधियों में सबसे अधिक रुचि रखते हैं?",
            ),
            vec![
                QuestionOption::new(
                    authored(
                        language,
                        "Conducting experiments and analyzing data",
                        "प्रयोग करना और डेटा का विश्लेषण करना",
                    ),
                    StreamWeights::new(3, 1, 0, 1),
                ),
                QuestionOption::new(
                    authored(
                        language,
                        "Managing money and understanding business",
                        "पैसे का प्रबंधन और व्यापार को समझना",
                    ),
                    StreamWeights::new(1, 3, 1, 1),
                ),
                QuestionOption::new(
                    authored(
                        language,
                        "Reading, writing, and discussing ideas",
                        "पढ़ना, लिखना और विचारों पर चर्चा करना",
                    ),
                    StreamWeights::new(0, 1, 3, 1),
                ),
                QuestionOption::new(
                    authored(
                        language,
                        "Learning practical skills and crafts",
                        "व्यावहारिक कौशल और शिल्प सीखना",
                    ),
                    StreamWeights::new(1, 0, 1, 3),
                ),
            ],
            QuestionCategory::Interests,
        ),
        Question::new(
            2,
            authored(
                language,
                "Would you prefer to go to college away from home?",
                "क्या आप घर से दूर कॉलेज जाना पसंद करेंगे?",
            ),
            vec![
                QuestionOption::new(
                    authored(
                        language,
                        "Yes, I want to go away for new experiences",
                        "हाँ, मैं नए अनुभवों के लिए दूर जाना चाहूंगा",
                    ),
                    StreamWeights::new(2, 2, 2, 1),
                ),
                QuestionOption::new(
                    authored(
                        language,
                        "I prefer to stay within 0-50km radius from home",
                        "घर के 0-50 किमी के दायरे में रहना पसंद करूंगा",
                    ),
                    StreamWeights::new(1, 1, 1, 2),
                ),
                QuestionOption::new(
                    authored(
                        language,
                        "It depends on the quality of the college",
                        "यह कॉलेज की गुणवत्ता पर निर्भर करता है",
                    ),
                    StreamWeights::new(2, 2, 2, 2),
                ),
                QuestionOption::new(
                    authored(language, "I'm not sure", "मैं निश्चित नहीं हूं"),
                    StreamWeights::new(1, 1, 1, 1),
                ),
            ],
            QuestionCategory::LocationPreferences,
        ),
        Question::new(
            3,
            authored(
                language,
                "If your preferred course is not available in a college, what would you do?",
                "यदि आपका पसंदीदा कोर्स किसी कॉलेज में उपलब्ध नहीं है, तो आप क्या करेंगे?",
            ),
            vec![
                QuestionOption::new(
                    authored(
                        language,
                        "I would go to another college where this course is available",
                        "दूसरे कॉलेज में जाऊंगा जहाँ यह कोर्स उपलब्ध है",
                    ),
                    StreamWeights::new(3, 3, 3, 3),
                ),
                QuestionOption::new(
                    authored(
                        language,
                        "I would choose a similar course in the same college",
                        "उसी कॉलेज में समान कोर्स चुनूंगा",
                    ),
                    StreamWeights::new(2, 2, 2, 2),
                ),
                QuestionOption::new(
                    authored(
                        language,
                        "I would prioritize the college's reputation",
                        "कॉलेज की प्रतिष्ठा को प्राथमिकता दूंगा",
                    ),
                    StreamWeights::new(2, 3, 2, 1),
                ),
                QuestionOption::new(
                    authored(
                        language,
                        "I would consult with my parents",
                        "अपने माता-पिता से सलाह लूंगा",
                    ),
                    StreamWeights::new(1, 1, 1, 1),
                ),
            ],
            QuestionCategory::Preferences,
        ),
    ]
}

/// A fallback question substituted when generation fails.
///
/// `rotation` selects from the small authored bank so consecutive
/// failures do not repeat the same question; `id` is the ordinal the
/// substituted question takes in the session pool.
pub fn fallback_question(id: u32, rotation: usize, language: LanguageCode) -> Question {
    match rotation % 2 {
        0 => Question::new(
            id,
            authored(
                language,
                "What type of work environment do you prefer?",
                "आप किस प्रकार के काम के माहौल को पसंद करते हैं?",
            ),
            vec![
                QuestionOption::new(
                    authored(language, "Quiet and focused", "शांत और केंद्रित"),
                    StreamWeights::new(3, 2, 2, 1),
                ),
                QuestionOption::new(
                    authored(
                        language,
                        "Collaborative and team-based",
                        "सहयोगी और टीम-आधारित",
                    ),
                    StreamWeights::new(1, 3, 3, 2),
                ),
                QuestionOption::new(
                    authored(language, "Creative and flexible", "रचनात्मक और लचीला"),
                    StreamWeights::new(1, 1, 3, 3),
                ),
                QuestionOption::new(
                    authored(language, "Structured and organized", "संरचित और व्यवस्थित"),
                    StreamWeights::new(2, 3, 1, 2),
                ),
            ],
            QuestionCategory::WorkPreferences,
        ),
        _ => Question::new(
            id,
            authored(
                language,
                "What type of activities do you enjoy most?",
                "आप किस प्रकार की गतिविधियों में सबसे अधिक आनंद लेते हैं?",
            ),
            vec![
                QuestionOption::new(
                    authored(
                        language,
                        "Solving mathematical problems and puzzles",
                        "गणितीय समस्याओं और पहेलियों को हल करना",
                    ),
                    StreamWeights::new(3, 2, 0, 1),
                ),
                QuestionOption::new(
                    authored(
                        language,
                        "Reading and writing stories or articles",
                        "कहानियां या लेख पढ़ना और लिखना",
                    ),
                    StreamWeights::new(0, 1, 3, 2),
                ),
                QuestionOption::new(
                    authored(
                        language,
                        "Working with numbers and business concepts",
                        "संख्याओं और व्यावसायिक अवधारणाओं के साथ काम करना",
                    ),
                    StreamWeights::new(1, 3, 1, 1),
                ),
                QuestionOption::new(
                    authored(
                        language,
                        "Creating things with your hands",
                        "अपने हाथों से चीजें बनाना",
                    ),
                    StreamWeights::new(1, 0, 2, 3),
                ),
            ],
            QuestionCategory::Interests,
        ),
    }
}

/// Strengths reported when the recommendation endpoint is unavailable.
pub fn fallback_strengths() -> Vec<String> {
    vec![
        "Analytical thinking".to_string(),
        "Problem solving".to_string(),
        "Communication".to_string(),
    ]
}

/// Career suggestions reported when the recommendation endpoint is
/// unavailable.
pub fn fallback_recommendations() -> Vec<String> {
    vec![
        "Engineering".to_string(),
        "Research".to_string(),
        "Teaching".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_pool_has_three_questions_with_four_options_each() {
        let pool = standard_questions(LanguageCode::En);
        assert_eq!(pool.len(), STANDARD_POOL_SIZE);
        for (i, q) in pool.iter().enumerate() {
            assert_eq!(q.id as usize, i + 1);
            assert_eq!(q.option_count(), 4);
            assert!(!q.prompt.is_empty());
        }
    }

    #[test]
    fn standard_pool_is_localized_for_hindi() {
        let en = standard_questions(LanguageCode::En);
        let hi = standard_questions(LanguageCode::Hi);
        assert_ne!(en[0].prompt, hi[0].prompt);
        // Weights are language independent.
        assert_eq!(en[0].options[0].weight, hi[0].options[0].weight);
    }

    #[test]
    fn unsupported_authoring_language_falls_back_to_english() {
        let en = standard_questions(LanguageCode::En);
        let ta = standard_questions(LanguageCode::Ta);
        assert_eq!(en[0].prompt, ta[0].prompt);
    }

    #[test]
    fn fallback_questions_rotate() {
        let first = fallback_question(4, 0, LanguageCode::En);
        let second = fallback_question(5, 1, LanguageCode::En);
        let third = fallback_question(6, 2, LanguageCode::En);

        assert_ne!(first.prompt, second.prompt);
        assert_eq!(first.prompt, third.prompt);
        assert_eq!(first.id, 4);
        assert_eq!(second.option_count(), 4);
    }

    #[test]
    fn fallback_result_content_is_non_empty() {
        assert!(!fallback_strengths().is_empty());
        assert!(!fallback_recommendations().is_empty());
    }
}
