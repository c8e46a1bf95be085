//! Language codes supported by the guidance platform.
//!
//! English is the base language of all authored content; the remaining
//! codes are the Indian languages the translation layer can target.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// ISO 639-1 code of a supported interface language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    /// English (base language).
    En,
    /// Hindi.
    Hi,
    /// Bengali.
    Bn,
    /// Marathi.
    Mr,
    /// Telugu.
    Te,
    /// Tamil.
    Ta,
}

impl LanguageCode {
    /// Returns the two-letter code.
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::En => "en",
            LanguageCode::Hi => "hi",
            LanguageCode::Bn => "bn",
            LanguageCode::Mr => "mr",
            LanguageCode::Te => "te",
            LanguageCode::Ta => "ta",
        }
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        LanguageCode::En
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LanguageCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(LanguageCode::En),
            "hi" => Ok(LanguageCode::Hi),
            "bn" => Ok(LanguageCode::Bn),
            "mr" => Ok(LanguageCode::Mr),
            "te" => Ok(LanguageCode::Te),
            "ta" => Ok(LanguageCode::Ta),
            other => Err(ValidationError::invalid_format(
                "language",
                format!("unknown code '{}'", other),
            )),
        }
    }
}

/// Display metadata for a supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageInfo {
    /// Language code.
    pub code: LanguageCode,
    /// English name.
    pub name: &'static str,
    /// Name in the language itself.
    pub native_name: &'static str,
}

/// All languages the platform can render, in menu order.
pub fn supported_languages() -> &'static [LanguageInfo] {
    &[
        LanguageInfo {
            code: LanguageCode::En,
            name: "English",
            native_name: "English",
        },
        LanguageInfo {
            code: LanguageCode::Hi,
            name: "Hindi",
            native_name: "हिंदी",
        },
        LanguageInfo {
            code: LanguageCode::Bn,
            name: "Bengali",
            native_name: "বাংলা",
        },
        LanguageInfo {
            code: LanguageCode::Mr,
            name: "Marathi",
            native_name: "मराठी",
        },
        LanguageInfo {
            code: LanguageCode::Te,
            name: "Telugu",
            native_name: "తెలుగు",
        },
        LanguageInfo {
            code: LanguageCode::Ta,
            name: "Tamil",
            native_name: "தமிழ்",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_roundtrips_through_str() {
        for info in supported_languages() {
            let parsed: LanguageCode = info.code.as_str().parse().unwrap();
            assert_eq!(parsed, info.code);
        }
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert!("xx".parse::<LanguageCode>().is_err());
        assert!("EN".parse::<LanguageCode>().is_err());
    }

    #[test]
    fn default_is_english() {
        assert_eq!(LanguageCode::default(), LanguageCode::En);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&LanguageCode::Hi).unwrap(), "\"hi\"");
        let back: LanguageCode = serde_json::from_str("\"ta\"").unwrap();
        assert_eq!(back, LanguageCode::Ta);
    }

    #[test]
    fn supported_languages_lists_six_with_english_first() {
        let langs = supported_languages();
        assert_eq!(langs.len(), 6);
        assert_eq!(langs[0].code, LanguageCode::En);
        assert_eq!(langs[1].native_name, "हिंदी");
    }
}
