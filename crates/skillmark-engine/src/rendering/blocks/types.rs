/// The two list flavours; only one list level exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `-` or `*` items, rendered as `<ul>`.
    Unordered,
    /// `1.` style items, rendered as `<ol>`.
    Ordered,
}

impl ListKind {
    pub fn open_tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "<ul>",
            ListKind::Ordered => "<ol>",
        }
    }

    pub fn close_tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "</ul>",
            ListKind::Ordered => "</ol>",
        }
    }
}

/// What the most recent write to the output was.
///
/// Blank lines consult this to decide whether a `<br>` is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emitted {
    Nothing,
    Paragraph,
    Heading,
    ListItem,
    Placeholder,
    LineBreak,
}

impl Emitted {
    /// Paragraphs and headings already separate themselves from what follows.
    pub fn ends_structural_block(self) -> bool {
        matches!(self, Emitted::Paragraph | Emitted::Heading)
    }
}

/// Per-render list state. `None` is the no-list state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserState {
    pub list: Option<ListKind>,
}

impl ParserState {
    pub fn list_open(self) -> bool {
        self.list.is_some()
    }
}
