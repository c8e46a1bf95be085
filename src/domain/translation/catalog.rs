//! Static UI string catalog.
//!
//! Pre-authored interface strings keyed like `"quiz.title"`, available
//! without any provider call. English and Hindi are authored; other
//! languages fall through to the key so callers can hand the English
//! text to the resolver instead.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::domain::foundation::LanguageCode;

static EN: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // Navigation
        ("nav.home", "Home"),
        ("nav.quiz", "Aptitude Quiz"),
        ("nav.careers", "Career Paths"),
        ("nav.colleges", "Colleges"),
        ("nav.timeline", "Timeline"),
        ("nav.dashboard", "Dashboard"),
        ("nav.login", "Login"),
        ("nav.logout", "Logout"),
        // Quiz
        ("quiz.title", "Career Aptitude Quiz"),
        (
            "quiz.subtitle",
            "Answer these questions honestly to discover the best academic stream for you",
        ),
        ("quiz.complete", "Quiz Complete!"),
        ("quiz.results", "Here are your personalized results"),
        ("quiz.retake", "Retake Quiz"),
        ("quiz.explorecareers", "Explore Career Paths"),
        ("quiz.findcolleges", "Find Colleges"),
        // Common
        ("common.loading", "Loading..."),
        ("common.search", "Search..."),
        ("common.submit", "Submit"),
        ("common.next", "Next"),
        ("common.previous", "Previous"),
        ("common.viewall", "View All"),
    ])
});

static HI: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // Navigation
        ("nav.home", "होम"),
        ("nav.quiz", "योग्यता परीक्षा"),
        ("nav.careers", "करियर पथ"),
        ("nav.colleges", "कॉलेज"),
        ("nav.timeline", "समयसीमा"),
        ("nav.dashboard", "डैशबोर्ड"),
        ("nav.login", "लॉगिन"),
        ("nav.logout", "लॉगआउट"),
        // Quiz
        ("quiz.title", "करियर योग्यता परीक्षा"),
        (
            "quiz.subtitle",
            "आपके लिए सबसे अच्छी शैक्षणिक धारा खोजने के लिए इन प्रश्नों का ईमानदारी से उत्तर दें",
        ),
        ("quiz.complete", "परीक्षा पूर्ण!"),
        ("quiz.results", "यहाँ आपके व्यक्तिगत परिणाम हैं"),
        ("quiz.retake", "परीक्षा फिर से लें"),
        ("quiz.explorecareers", "करियर पथ देखें"),
        ("quiz.findcolleges", "कॉलेज खोजें"),
        // Common
        ("common.loading", "लोड हो रहा है..."),
        ("common.search", "खोजें..."),
        ("common.submit", "जमा करें"),
        ("common.next", "अगला"),
        ("common.previous", "पिछला"),
        ("common.viewall", "सभी देखें"),
    ])
});

/// Looks up a pre-authored UI string.
///
/// Returns the key itself when no entry exists for it, or when the
/// language has no authored catalog.
pub fn ui_text<'a>(key: &'a str, language: LanguageCode) -> &'a str {
    let table: &HashMap<&str, &str> = match language {
        LanguageCode::En => &EN,
        LanguageCode::Hi => &HI,
        _ => return key,
    };
    table.get(key).copied().unwrap_or(key)
}
