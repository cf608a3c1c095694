//! Section parsing
//!
//! The reply body is loosely structured prose with English section labels
//! (`**Analysis:**`, `Explanation:`, ...). The body is tokenized on those
//! labels and a small state machine groups the text between them into
//! typed sections.

use crate::analysis::score::CredibilityScore;
use once_cell::sync::Lazy;
use regex::Regex;

static HEADER_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\*\*(Analysis|Explanation|Credibility Score):\*\*|(Analysis|Explanation|Credibility Score):",
    )
    .expect("header marker pattern")
});

/// Type of a reply section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Analysis,
    Explanation,
    CredibilityScore,
    PlainText,
}

impl SectionKind {
    fn from_label(label: &str) -> Option<Self> {
        match label {
            "Analysis" => Some(SectionKind::Analysis),
            "Explanation" => Some(SectionKind::Explanation),
            "Credibility Score" => Some(SectionKind::CredibilityScore),
            _ => None,
        }
    }

    /// Panel title; untyped text has none
    pub fn title(self) -> Option<&'static str> {
        match self {
            SectionKind::Analysis => Some("Analysis"),
            SectionKind::Explanation => Some("Explanation"),
            SectionKind::CredibilityScore => Some("Credibility Score"),
            SectionKind::PlainText => None,
        }
    }

    pub fn icon(self) -> Option<&'static str> {
        match self {
            SectionKind::Analysis => Some("🔍"),
            SectionKind::Explanation => Some("💡"),
            SectionKind::CredibilityScore => Some("📊"),
            SectionKind::PlainText => None,
        }
    }
}

/// One typed fragment of the reply body
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub kind: SectionKind,
    /// Body with the header marker stripped
    pub text: String,
    /// Set for `CredibilityScore` sections only
    pub score: Option<CredibilityScore>,
}

impl Section {
    pub fn new(kind: SectionKind, text: impl Into<String>) -> Self {
        let text = text.into();
        let score = (kind == SectionKind::CredibilityScore).then(|| CredibilityScore::parse(&text));
        Self { kind, text, score }
    }
}

/// Lexical unit of a reply body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Header(SectionKind),
    Line(&'a str),
}

/// Split `body` into header markers and the non-empty lines between them.
fn tokenize(body: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut cursor = 0;

    for caps in HEADER_MARKER.captures_iter(body) {
        let Some(marker) = caps.get(0) else { continue };
        push_lines(&mut tokens, &body[cursor..marker.start()]);

        let label = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
        if let Some(kind) = SectionKind::from_label(label) {
            tokens.push(Token::Header(kind));
        }
        cursor = marker.end();
    }
    push_lines(&mut tokens, &body[cursor..]);

    tokens
}

fn push_lines<'a>(tokens: &mut Vec<Token<'a>>, text: &'a str) {
    // Stray emphasis left behind by labels like `**Credibility Score: 4/5**`
    // produces lines of bare asterisks; they carry nothing.
    tokens.extend(
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.chars().all(|c| c == '*'))
            .map(Token::Line),
    );
}

/// Where the parser is in the body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParserState {
    /// Before the first header marker
    Preamble,
    /// Inside a titled section
    InSection(SectionKind),
}

struct SectionParser<'a> {
    state: ParserState,
    buffer: Vec<&'a str>,
    sections: Vec<Section>,
    saw_header: bool,
}

impl<'a> SectionParser<'a> {
    fn new() -> Self {
        Self {
            state: ParserState::Preamble,
            buffer: Vec::new(),
            sections: Vec::new(),
            saw_header: false,
        }
    }

    fn feed(&mut self, token: Token<'a>) {
        match token {
            Token::Header(kind) => {
                self.flush();
                self.saw_header = true;
                self.state = ParserState::InSection(kind);
            }
            Token::Line(line) => self.buffer.push(line),
        }
    }

    /// Emit the open section. A titled section is emitted even when empty;
    /// an empty preamble is not.
    fn flush(&mut self) {
        let text = self.buffer.join("\n");
        self.buffer.clear();

        match self.state {
            ParserState::Preamble if text.is_empty() => {}
            ParserState::Preamble => self.sections.push(Section::new(SectionKind::PlainText, text)),
            ParserState::InSection(kind) => self.sections.push(Section::new(kind, text)),
        }
    }

    fn finish(mut self) -> (Vec<Section>, bool) {
        self.flush();
        (self.sections, self.saw_header)
    }
}

/// Parse a verdict-stripped body into ordered sections.
///
/// A body without any header marker becomes a single untyped section
/// holding the body verbatim. A blank body yields no sections.
pub fn parse_sections(body: &str) -> Vec<Section> {
    let mut parser = SectionParser::new();
    for token in tokenize(body) {
        parser.feed(token);
    }

    let (sections, saw_header) = parser.finish();
    if saw_header {
        return sections;
    }

    if body.trim().is_empty() {
        Vec::new()
    } else {
        vec![Section::new(SectionKind::PlainText, body)]
    }
}
