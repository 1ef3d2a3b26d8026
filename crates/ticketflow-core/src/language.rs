//! Supported ticket locales
//!
//! The platform supports a closed set of five languages. Lookups into the
//! keyword and template tables are keyed by this enum rather than by raw
//! locale strings, so English is the fallback by construction instead of by
//! a stringly-typed `get(..).unwrap_or(..)` at every call site.

use serde::{Deserialize, Serialize};

/// A supported ticket language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    En,
    /// Hindi
    Hi,
    /// Tamil
    Ta,
    /// Telugu
    Te,
    /// Kannada
    Kn,
}

impl Language {
    /// All supported languages
    pub const ALL: [Language; 5] = [
        Language::En,
        Language::Hi,
        Language::Ta,
        Language::Te,
        Language::Kn,
    ];

    /// Parse a locale code into a supported language
    ///
    /// Accepts region-qualified codes ("hi-IN") by matching the primary
    /// subtag. Returns `None` for codes outside the supported set.
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code.trim().split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "hi" => Some(Self::Hi),
            "ta" => Some(Self::Ta),
            "te" => Some(Self::Te),
            "kn" => Some(Self::Kn),
            _ => None,
        }
    }

    /// Parse a locale code, defaulting to English for anything unsupported
    pub fn detect(code: &str) -> Self {
        Self::from_code(code).unwrap_or(Self::En)
    }

    /// The two-letter locale code
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
            Self::Ta => "ta",
            Self::Te => "te",
            Self::Kn => "kn",
        }
    }

    /// The English name of the language, used when instructing the
    /// completion API which language to answer in
    pub fn english_name(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Hi => "Hindi",
            Self::Ta => "Tamil",
            Self::Te => "Telugu",
            Self::Kn => "Kannada",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::En
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_codes() {
        assert_eq!(Language::from_code("en"), Some(Language::En));
        assert_eq!(Language::from_code("TA"), Some(Language::Ta));
        assert_eq!(Language::from_code("hi-IN"), Some(Language::Hi));
        assert_eq!(Language::from_code("kn_IN"), Some(Language::Kn));
    }

    #[test]
    fn unsupported_codes_detect_as_english() {
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::detect("fr"), Language::En);
        assert_eq!(Language::detect(""), Language::En);
        assert_eq!(Language::detect("te"), Language::Te);
    }

    #[test]
    fn serializes_as_lowercase_code() {
        assert_eq!(serde_json::to_string(&Language::Hi).unwrap(), "\"hi\"");
        let lang: Language = serde_json::from_str("\"kn\"").unwrap();
        assert_eq!(lang, Language::Kn);
    }
}
