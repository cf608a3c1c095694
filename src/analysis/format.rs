//! Inline text formatting
//!
//! Turns `**emphasis**` markers and newlines in reply text into inline
//! spans the result view can render.

use once_cell::sync::Lazy;
use regex::Regex;

static EMPHASIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("emphasis pattern"));

/// A run of inline content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Strong(String),
    LineBreak,
}

/// Split text into plain and strong runs, with a line break per newline.
///
/// Blank lines are kept as breaks so the whole-body fallback keeps its
/// paragraph spacing.
pub fn inline_spans(text: &str) -> Vec<Inline> {
    let mut spans = Vec::new();

    for (idx, line) in text.split('\n').enumerate() {
        if idx > 0 {
            spans.push(Inline::LineBreak);
        }
        let line = line.trim_end_matches('\r');

        let mut cursor = 0;
        for caps in EMPHASIS.captures_iter(line) {
            let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            push_text(&mut spans, &line[cursor..whole.start()]);
            if !inner.as_str().is_empty() {
                spans.push(Inline::Strong(inner.as_str().to_string()));
            }
            cursor = whole.end();
        }
        push_text(&mut spans, &line[cursor..]);
    }

    spans
}

fn push_text(spans: &mut Vec<Inline>, text: &str) {
    if !text.is_empty() {
        spans.push(Inline::Text(text.to_string()));
    }
}

/// Drop emphasis markers, leaving readable plain text
pub fn strip_emphasis(text: &str) -> String {
    text.replace("**", "")
}
