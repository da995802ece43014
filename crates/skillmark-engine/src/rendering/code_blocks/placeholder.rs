use std::fmt;

/// In-text marker standing in for an extracted code block during line processing.
///
/// Renders as `{{CODE_BLOCK_<index>}}`. The delimiters live here; the extractor,
/// classifier and restorer never spell them out themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderToken(pub usize);

impl PlaceholderToken {
    pub const OPEN: &'static str = "{{CODE_BLOCK_";
    pub const CLOSE: &'static str = "}}";

    /// Pattern matching any token, with the index as capture group 1.
    pub const PATTERN: &'static str = r"\{\{CODE_BLOCK_([0-9]+)\}\}";

    /// Index of the code block this token refers to.
    pub fn index(self) -> usize {
        self.0
    }

    /// Parses `s` when it is exactly one token and nothing else.
    ///
    /// The index must be ASCII digits that fit in a `usize`.
    pub fn parse(s: &str) -> Option<Self> {
        let digits = s.strip_prefix(Self::OPEN)?.strip_suffix(Self::CLOSE)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok().map(Self)
    }
}

impl fmt::Display for PlaceholderToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", Self::OPEN, self.0, Self::CLOSE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_token() {
        assert_eq!(PlaceholderToken(0).to_string(), "{{CODE_BLOCK_0}}");
        assert_eq!(PlaceholderToken(12).to_string(), "{{CODE_BLOCK_12}}");
    }

    #[test]
    fn parses_exact_token() {
        assert_eq!(
            PlaceholderToken::parse("{{CODE_BLOCK_3}}"),
            Some(PlaceholderToken(3))
        );
    }

    #[test]
    fn rejects_surrounding_text() {
        assert_eq!(PlaceholderToken::parse("x{{CODE_BLOCK_3}}"), None);
        assert_eq!(PlaceholderToken::parse("{{CODE_BLOCK_3}} tail"), None);
    }

    #[test]
    fn rejects_malformed_index() {
        assert_eq!(PlaceholderToken::parse("{{CODE_BLOCK_}}"), None);
        assert_eq!(PlaceholderToken::parse("{{CODE_BLOCK_-1}}"), None);
        assert_eq!(PlaceholderToken::parse("{{CODE_BLOCK_+1}}"), None);
        assert_eq!(PlaceholderToken::parse("{{CODE_BLOCK_a}}"), None);
    }

    #[test]
    fn rejects_overflowing_index() {
        let huge = format!("{{{{CODE_BLOCK_{}0}}}}", usize::MAX);
        assert_eq!(PlaceholderToken::parse(&huge), None);
    }

    #[test]
    fn display_and_parse_agree() {
        let token = PlaceholderToken(42);
        assert_eq!(PlaceholderToken::parse(&token.to_string()), Some(token));
    }
}
