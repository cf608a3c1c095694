//! Reply analysis
//!
//! Parses the backend's textual verdict into typed sections and turns it
//! into the localized result the UI draws.
//!
//! A reply looks like:
//!
//! ```text
//! [VERDICT:FAKE]
//! **Analysis:** ...
//! **Explanation:** ...
//! **Credibility Score:** 1.5/5
//! ```
//!
//! Every step is a pure function of its input; a reply is parsed fresh for
//! each response and dropped after rendering.

pub mod badge;
pub mod format;
pub mod render;
pub mod score;
pub mod sections;
pub mod verdict;

pub use badge::{BadgeLabels, VerdictBadge};
pub use format::Inline;
pub use render::{RenderedResult, ResultBlock};
pub use score::{CredibilityScore, ScoreTier};
pub use sections::{parse_sections, Section, SectionKind};
pub use verdict::{extract_verdict, Verdict};

/// A parsed backend reply
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnalysisReply {
    pub verdict: Verdict,
    /// Sections in order of appearance
    pub sections: Vec<Section>,
}

impl AnalysisReply {
    pub fn parse(raw: &str) -> Self {
        let (verdict, body) = extract_verdict(raw);
        let sections = parse_sections(body);
        tracing::debug!(?verdict, sections = sections.len(), "Parsed analysis reply");
        Self { verdict, sections }
    }

    /// First section of the given kind
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|section| section.kind == kind)
    }

    pub fn credibility(&self) -> Option<&CredibilityScore> {
        self.section(SectionKind::CredibilityScore)
            .and_then(|section| section.score.as_ref())
    }

    /// Text read aloud after an analysis: the badge label, then each
    /// section with its title.
    pub fn narration_text(&self, locale_tag: &str) -> String {
        let mut parts = vec![format!("{}.", VerdictBadge::new(self.verdict, locale_tag).label)];

        for section in &self.sections {
            let text = format::strip_emphasis(&section.text);
            let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
            match section.kind.title() {
                Some(title) => parts.push(format!("{title}: {text}")),
                None if !text.is_empty() => parts.push(text),
                None => {}
            }
        }

        parts.join(" ")
    }
}
