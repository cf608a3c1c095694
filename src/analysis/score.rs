//! Credibility score extraction and scaling

use once_cell::sync::Lazy;
use regex::Regex;

// ASCII digits only: replies in Indic languages may carry native numerals
// next to the Western figure.
static SCORE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|[^0-9.])([0-9]*\.?[0-9]+)\s*/\s*5\b").expect("score pattern")
});

/// Highest rating the backend hands out
pub const MAX_SCORE: f64 = 5.0;

/// Presentation tier of a score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    High,
    Medium,
    Low,
}

impl ScoreTier {
    pub fn as_str(self) -> &'static str {
        match self {
            ScoreTier::High => "high",
            ScoreTier::Medium => "medium",
            ScoreTier::Low => "low",
        }
    }

    /// Color of the headline figure and the bar fill
    pub fn color(self) -> &'static str {
        match self {
            ScoreTier::High => "#51cf66",
            ScoreTier::Medium => "#ffd43b",
            ScoreTier::Low => "#ff6b6b",
        }
    }
}

/// A "number out of five" rating found in a Credibility Score section
#[derive(Debug, Clone, PartialEq)]
pub struct CredibilityScore {
    /// Text shown to the user as-is, e.g. "4.5/5"
    pub raw_text: String,
    /// Parsed rating; 0 when the text holds no `n/5` figure
    pub value: f64,
}

impl CredibilityScore {
    /// Parse the first `<number>/5` in `text`. Emphasis markers are dropped
    /// from the displayed text.
    pub fn parse(text: &str) -> Self {
        let raw_text = text.replace("**", "").trim().to_string();
        let value = SCORE_PATTERN
            .captures_iter(&raw_text)
            .find_map(|caps| caps[1].parse::<f64>().ok())
            .unwrap_or(0.0);

        Self { raw_text, value }
    }

    /// Bar fill in percent, clamped to 0..=100
    pub fn percentage(&self) -> f64 {
        (self.value * 100.0 / MAX_SCORE).clamp(0.0, 100.0)
    }

    pub fn tier(&self) -> ScoreTier {
        if self.value >= 4.0 {
            ScoreTier::High
        } else if self.value >= 2.0 {
            ScoreTier::Medium
        } else {
            ScoreTier::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_score() {
        let score = CredibilityScore::parse("3/5");
        assert_eq!(score.value, 3.0);
        assert_eq!(score.percentage(), 60.0);
        assert_eq!(score.tier(), ScoreTier::Medium);
    }

    #[test]
    fn test_full_score() {
        let score = CredibilityScore::parse("5/5");
        assert_eq!(score.percentage(), 100.0);
        assert_eq!(score.tier(), ScoreTier::High);
    }

    #[test]
    fn test_unparseable_score() {
        let score = CredibilityScore::parse("n/a");
        assert_eq!(score.value, 0.0);
        assert_eq!(score.percentage(), 0.0);
        assert_eq!(score.tier(), ScoreTier::Low);
        assert_eq!(score.raw_text, "n/a");
    }

    #[test]
    fn test_decimal_score_with_justification() {
        let score = CredibilityScore::parse("**4.5/5** - multiple outlets confirm");
        assert_eq!(score.value, 4.5);
        assert_eq!(score.percentage(), 90.0);
        assert_eq!(score.raw_text, "4.5/5 - multiple outlets confirm");
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        let score = CredibilityScore::parse("12/5");
        assert_eq!(score.percentage(), 100.0);
    }

    #[test]
    fn test_other_denominators_are_ignored() {
        assert_eq!(CredibilityScore::parse("30/50").value, 0.0);
        assert_eq!(CredibilityScore::parse("2 / 5 overall").value, 2.0);
    }

    #[test]
    fn test_leading_point_decimal() {
        let score = CredibilityScore::parse(".5/5");
        assert_eq!(score.value, 0.5);
        assert_eq!(score.percentage(), 10.0);
        assert_eq!(score.tier(), ScoreTier::Low);
        assert_eq!(CredibilityScore::parse("0.5/5").value, 0.5);
    }

    #[test]
    fn test_native_digits_are_skipped() {
        let score = CredibilityScore::parse("४/5 (4/5)");
        assert_eq!(score.value, 4.0);
        assert_eq!(score.tier(), ScoreTier::High);
        assert_eq!(score.raw_text, "४/5 (4/5)");
        assert_eq!(CredibilityScore::parse("४/५").value, 0.0);
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(CredibilityScore::parse("4/5").tier(), ScoreTier::High);
        assert_eq!(CredibilityScore::parse("3.9/5").tier(), ScoreTier::Medium);
        assert_eq!(CredibilityScore::parse("2/5").tier(), ScoreTier::Medium);
        assert_eq!(CredibilityScore::parse("1.9/5").tier(), ScoreTier::Low);
    }
}
