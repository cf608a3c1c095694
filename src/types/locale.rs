//! Locale types
//!
//! The closed set of language tags the detector understands.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A supported language/region tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "hi-IN")]
    HiIn,
    #[serde(rename = "kn-IN")]
    KnIn,
    #[serde(rename = "ta-IN")]
    TaIn,
    #[serde(rename = "te-IN")]
    TeIn,
    #[serde(rename = "ml-IN")]
    MlIn,
}

impl Locale {
    /// Every supported locale, in selector order
    pub const ALL: [Locale; 6] = [
        Locale::EnUs,
        Locale::HiIn,
        Locale::KnIn,
        Locale::TaIn,
        Locale::TeIn,
        Locale::MlIn,
    ];

    /// The BCP 47 tag sent to the backend and speech engines
    pub fn tag(self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::HiIn => "hi-IN",
            Locale::KnIn => "kn-IN",
            Locale::TaIn => "ta-IN",
            Locale::TeIn => "te-IN",
            Locale::MlIn => "ml-IN",
        }
    }

    /// Look up a locale by tag. Tags compare case-insensitively.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        Self::ALL
            .into_iter()
            .find(|locale| locale.tag().eq_ignore_ascii_case(tag))
    }

    /// Name of the language in its own script, shown in the selector
    pub fn display_name(self) -> &'static str {
        match self {
            Locale::EnUs => "English",
            Locale::HiIn => "हिन्दी",
            Locale::KnIn => "ಕನ್ನಡ",
            Locale::TaIn => "தமிழ்",
            Locale::TeIn => "తెలుగు",
            Locale::MlIn => "മലയാളം",
        }
    }

    /// English language name, as the backend names its target language
    pub fn language_name(self) -> &'static str {
        match self {
            Locale::EnUs => "English",
            Locale::HiIn => "Hindi",
            Locale::KnIn => "Kannada",
            Locale::TaIn => "Tamil",
            Locale::TeIn => "Telugu",
            Locale::MlIn => "Malayalam",
        }
    }

    /// Automatic narration of results is English-only.
    pub fn supports_narration(self) -> bool {
        self == Locale::EnUs
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_lookup() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_tag(locale.tag()), Some(locale));
        }
        assert_eq!(Locale::from_tag("HI-in"), Some(Locale::HiIn));
        assert_eq!(Locale::from_tag("fr-FR"), None);
        assert_eq!(Locale::from_tag(""), None);
    }

    #[test]
    fn test_serde_uses_tags() {
        let json = serde_json::to_string(&Locale::TaIn).unwrap();
        assert_eq!(json, "\"ta-IN\"");
        let locale: Locale = serde_json::from_str("\"ml-IN\"").unwrap();
        assert_eq!(locale, Locale::MlIn);
    }

    #[test]
    fn test_language_names_are_english() {
        assert_eq!(Locale::EnUs.language_name(), "English");
        assert_eq!(Locale::KnIn.language_name(), "Kannada");
        assert_eq!(Locale::from_tag("te-in").map(Locale::language_name), Some("Telugu"));
    }

    #[test]
    fn test_narration_gate() {
        assert!(Locale::EnUs.supports_narration());
        assert!(!Locale::KnIn.supports_narration());
    }
}
