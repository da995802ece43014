use crate::rendering::code_blocks::PlaceholderToken;

use super::{
    kinds::{Heading, ListMarker},
    types::ListKind,
};

/// Classification of a single line containing only local facts.
///
/// Computed fresh for every line and never stored; list state lives in the
/// builder, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Whitespace only.
    Blank,
    /// The trimmed line is exactly one placeholder token. `text` is that
    /// trimmed line as written, so it can be emitted unchanged.
    CodePlaceholder {
        token: PlaceholderToken,
        text: &'a str,
    },
    /// `#`, `##` or `###` followed by a space, at the very start of the line.
    Heading { level: u8, text: &'a str },
    /// A bullet or numbered item, with the marker already removed.
    ListItem { kind: ListKind, content: &'a str },
    /// Anything else. Holds the untrimmed line.
    Paragraph(&'a str),
}

/// Classifies individual lines for the block processing pass.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies one line (without its `\n`) into a [`LineKind`].
    ///
    /// Priority, first match wins: blank, placeholder, heading, list item,
    /// paragraph. A trailing `\r` is dropped first.
    pub fn classify<'a>(&self, line: &'a str) -> LineKind<'a> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let trimmed = line.trim();

        if trimmed.is_empty() {
            return LineKind::Blank;
        }
        if let Some(token) = PlaceholderToken::parse(trimmed) {
            return LineKind::CodePlaceholder {
                token,
                text: trimmed,
            };
        }
        if let Some((level, text)) = Heading::parse(line) {
            return LineKind::Heading { level, text };
        }
        if let Some((kind, content)) = ListMarker::parse(trimmed) {
            return LineKind::ListItem { kind, content };
        }
        LineKind::Paragraph(line)
    }
}
