use crate::rendering::{escape::escape_html, inline::format_inline};

use super::{
    classify::LineKind,
    types::{Emitted, ListKind, ParserState},
};

/// Block-level state machine turning classified lines into HTML.
///
/// States are no list, inside `<ul>`, inside `<ol>`. Headings, placeholders and
/// paragraphs always return to no list; list items move between the two list
/// states. [`HtmlBlockWriter::finish`] closes whatever is still open.
pub struct HtmlBlockWriter {
    state: ParserState,
    last: Emitted,
    out: String,
}

impl HtmlBlockWriter {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            state: ParserState::default(),
            last: Emitted::Nothing,
            out: String::with_capacity(capacity),
        }
    }

    /// Current list state, for inspection between lines.
    pub fn state(&self) -> ParserState {
        self.state
    }

    pub fn push(&mut self, line: &LineKind<'_>) {
        match *line {
            LineKind::Blank => self.blank_line(),
            LineKind::CodePlaceholder { token, text } => {
                self.close_list();
                log::trace!("placeholder for code block {}", token.index());
                self.out.push_str(text);
                self.last = Emitted::Placeholder;
            }
            LineKind::Heading { level, text } => {
                self.close_list();
                self.out
                    .push_str(&format!("<h{level}>{}</h{level}>", escape_html(text)));
                self.last = Emitted::Heading;
            }
            LineKind::ListItem { kind, content } => {
                self.ensure_list(kind);
                self.out
                    .push_str(&format!("<li>{}</li>", format_inline(content)));
                self.last = Emitted::ListItem;
            }
            LineKind::Paragraph(text) => {
                self.close_list();
                self.out.push_str(&format!("<p>{}</p>", format_inline(text)));
                self.last = Emitted::Paragraph;
            }
        }
    }

    pub fn finish(mut self) -> String {
        // EOF flush
        self.close_list();
        self.out
    }

    /// A blank line inside a list is ignored and keeps the list open.
    fn blank_line(&mut self) {
        if self.state.list_open() {
            return;
        }
        if self.last == Emitted::Nothing || self.last.ends_structural_block() {
            return;
        }
        self.out.push_str("<br>");
        self.last = Emitted::LineBreak;
    }

    fn ensure_list(&mut self, kind: ListKind) {
        match self.state.list {
            Some(open) if open == kind => {}
            Some(_) => {
                self.close_list();
                self.open_list(kind);
            }
            None => self.open_list(kind),
        }
    }

    fn open_list(&mut self, kind: ListKind) {
        self.out.push_str(kind.open_tag());
        self.state.list = Some(kind);
    }

    fn close_list(&mut self) {
        if let Some(kind) = self.state.list.take() {
            self.out.push_str(kind.close_tag());
        }
    }
}

impl Default for HtmlBlockWriter {
    fn default() -> Self {
        Self::new()
    }
}
