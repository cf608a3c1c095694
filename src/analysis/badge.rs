//! Verdict badge localization

use crate::analysis::verdict::Verdict;
use crate::types::locale::Locale;

const FAKE_ICON: &str = "⚠️";
const REAL_ICON: &str = "✓";

/// Badge texts for one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeLabels {
    pub real: &'static str,
    pub fake: &'static str,
}

impl BadgeLabels {
    pub fn for_locale(locale: Locale) -> Self {
        let (real, fake) = match locale {
            Locale::EnUs => ("Verified", "Fake News"),
            Locale::HiIn => ("सत्यापित", "फर्जी खबर"),
            Locale::KnIn => ("ಪರಿಶೀಲಿಸಲಾಗಿದೆ", "ಸುಳ್ಳು ಸುದ್ದಿ"),
            Locale::TaIn => ("சரிபார்க்கப்பட்டது", "போலிச் செய்தி"),
            Locale::TeIn => ("ధృవీకరించబడింది", "నకిలీ వార్త"),
            Locale::MlIn => ("സ്ഥിരീകരിച്ചു", "വ്യാജ വാർത്ത"),
        };
        Self { real, fake }
    }

    /// Labels for a raw locale tag; unsupported tags get English.
    pub fn for_tag(tag: &str) -> Self {
        Self::for_locale(Locale::from_tag(tag).unwrap_or_default())
    }
}

/// Icon plus localized label shown above the result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerdictBadge {
    pub icon: &'static str,
    pub label: &'static str,
    pub is_fake: bool,
}

impl VerdictBadge {
    /// An `Unknown` verdict is displayed with the "real" badge.
    pub fn new(verdict: Verdict, locale_tag: &str) -> Self {
        let labels = BadgeLabels::for_tag(locale_tag);
        if verdict.is_fake() {
            Self {
                icon: FAKE_ICON,
                label: labels.fake,
                is_fake: true,
            }
        } else {
            Self {
                icon: REAL_ICON,
                label: labels.real,
                is_fake: false,
            }
        }
    }

    /// CSS modifier class
    pub fn class(&self) -> &'static str {
        if self.is_fake {
            "verdict-fake"
        } else {
            "verdict-real"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hindi_fake_label() {
        let badge = VerdictBadge::new(Verdict::Fake, "hi-IN");
        assert_eq!(badge.label, "फर्जी खबर");
        assert_eq!(badge.icon, "⚠️");
        assert_eq!(badge.class(), "verdict-fake");
    }

    #[test]
    fn test_unsupported_locale_falls_back_to_english() {
        let badge = VerdictBadge::new(Verdict::Fake, "fr-FR");
        assert_eq!(badge.label, "Fake News");
        let badge = VerdictBadge::new(Verdict::Real, "");
        assert_eq!(badge.label, "Verified");
    }

    #[test]
    fn test_unknown_renders_as_real() {
        assert_eq!(
            VerdictBadge::new(Verdict::Unknown, "kn-IN"),
            VerdictBadge::new(Verdict::Real, "kn-IN")
        );
    }

    #[test]
    fn test_every_locale_has_distinct_labels() {
        for locale in Locale::ALL {
            let labels = BadgeLabels::for_locale(locale);
            assert_ne!(labels.real, labels.fake, "{locale}");
        }
    }
}
