//! Verdict tag extraction
//!
//! The backend opens every reply with a machine-readable tag such as
//! `[VERDICT:FAKE]`. Anything else at the start of the reply means the
//! verdict is unknown.

use once_cell::sync::Lazy;
use regex::Regex;

static VERDICT_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\[VERDICT:(FAKE|REAL)\]\s*").expect("verdict tag pattern"));

/// Classification carried by the reply's leading tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verdict {
    Real,
    Fake,
    #[default]
    Unknown,
}

impl Verdict {
    pub fn is_fake(self) -> bool {
        self == Verdict::Fake
    }
}

/// Split a raw reply into its verdict and the body that follows the tag.
///
/// Without a recognized tag the body is the untouched input.
pub fn extract_verdict(raw: &str) -> (Verdict, &str) {
    let Some(caps) = VERDICT_TAG.captures(raw) else {
        return (Verdict::Unknown, raw);
    };

    let verdict = if caps[1].eq_ignore_ascii_case("fake") {
        Verdict::Fake
    } else {
        Verdict::Real
    };
    let tag_end = caps.get(0).map_or(0, |m| m.end());

    (verdict, raw[tag_end..].trim())
}
