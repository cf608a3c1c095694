//! Result view model
//!
//! Flattens a parsed reply into the blocks the result card draws: the
//! verdict badge, titled panels, the score bar and untyped paragraphs.

use crate::analysis::badge::VerdictBadge;
use crate::analysis::format::{inline_spans, Inline};
use crate::analysis::score::ScoreTier;
use crate::analysis::sections::Section;
use crate::analysis::AnalysisReply;

/// One drawable block of the result card
#[derive(Debug, Clone, PartialEq)]
pub enum ResultBlock {
    /// Analysis or Explanation panel
    Panel {
        title: &'static str,
        icon: &'static str,
        body: Vec<Inline>,
    },
    /// Credibility score headline and bar
    Score {
        headline: String,
        percentage: f64,
        tier: ScoreTier,
    },
    /// Untyped text
    Paragraph(Vec<Inline>),
}

impl ResultBlock {
    fn from_section(section: &Section) -> Self {
        if let Some(score) = &section.score {
            return ResultBlock::Score {
                headline: score.raw_text.clone(),
                percentage: score.percentage(),
                tier: score.tier(),
            };
        }

        match (section.kind.title(), section.kind.icon()) {
            (Some(title), Some(icon)) => ResultBlock::Panel {
                title,
                icon,
                body: inline_spans(&section.text),
            },
            _ => ResultBlock::Paragraph(inline_spans(&section.text)),
        }
    }
}

/// Everything the result card shows for one reply
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedResult {
    /// Absent when the card reports a failure rather than a reply
    pub badge: Option<VerdictBadge>,
    pub blocks: Vec<ResultBlock>,
}

impl RenderedResult {
    pub fn new(reply: &AnalysisReply, locale_tag: &str) -> Self {
        Self {
            badge: Some(VerdictBadge::new(reply.verdict, locale_tag)),
            blocks: reply.sections.iter().map(ResultBlock::from_section).collect(),
        }
    }

    #[cfg(test)]
    pub fn from_raw(raw: &str, locale_tag: &str) -> Self {
        Self::new(&AnalysisReply::parse(raw), locale_tag)
    }

    /// A failure message with no verdict attached. The text is shown as one
    /// paragraph, line breaks and emphasis included.
    pub fn error(message: &str) -> Self {
        Self {
            badge: None,
            blocks: vec![ResultBlock::Paragraph(inline_spans(message))],
        }
    }

    /// True when only untyped text was found
    pub fn is_unsegmented(&self) -> bool {
        self.blocks.iter().all(|block| matches!(block, ResultBlock::Paragraph(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_reply_renders_in_order() {
        let rendered = RenderedResult::from_raw(
            "[VERDICT:FAKE]\n**Analysis:** The quote is **fabricated**.\n**Explanation:** No record exists.\n**Credibility Score:** 1/5",
            "en-US",
        );

        let badge = rendered.badge.as_ref().unwrap();
        assert!(badge.is_fake);
        assert_eq!(badge.label, "Fake News");
        assert_eq!(rendered.blocks.len(), 3);
        assert_eq!(
            rendered.blocks[0],
            ResultBlock::Panel {
                title: "Analysis",
                icon: "🔍",
                body: vec![
                    Inline::Text("The quote is ".into()),
                    Inline::Strong("fabricated".into()),
                    Inline::Text(".".into()),
                ],
            }
        );
        assert!(matches!(rendered.blocks[1], ResultBlock::Panel { title: "Explanation", .. }));
        assert_eq!(
            rendered.blocks[2],
            ResultBlock::Score {
                headline: "1/5".into(),
                percentage: 20.0,
                tier: ScoreTier::Low,
            }
        );
        assert!(!rendered.is_unsegmented());
    }

    #[test]
    fn test_unmarked_reply_is_one_block_with_breaks() {
        let rendered = RenderedResult::from_raw("line one\nline two", "ta-IN");
        assert_eq!(
            rendered.blocks,
            vec![ResultBlock::Paragraph(vec![
                Inline::Text("line one".into()),
                Inline::LineBreak,
                Inline::Text("line two".into()),
            ])]
        );
        assert!(rendered.is_unsegmented());
        assert!(!rendered.badge.unwrap().is_fake);
    }

    #[test]
    fn test_error_has_no_badge() {
        let rendered = RenderedResult::error("OCR Error: Unsupported image format");
        assert_eq!(rendered.badge, None);
        assert_eq!(
            rendered.blocks,
            vec![ResultBlock::Paragraph(vec![Inline::Text(
                "OCR Error: Unsupported image format".into()
            )])]
        );
        assert!(rendered.is_unsegmented());
    }

    #[test]
    fn test_untagged_reply_still_gets_badge() {
        let rendered = RenderedResult::from_raw("Could not verify this claim.", "hi-IN");
        assert_eq!(rendered.badge.map(|badge| badge.label), Some("सत्यापित"));
    }
}
