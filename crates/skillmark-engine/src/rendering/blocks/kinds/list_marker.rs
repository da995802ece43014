use crate::rendering::blocks::types::ListKind;

/// List item markers: `-`/`*` bullets and `<digits>.` numbers.
pub struct ListMarker;

impl ListMarker {
    pub const BULLETS: [char; 2] = ['-', '*'];
    pub const ORDINAL_DOT: char = '.';

    /// Classifies an already trimmed line as a list item.
    ///
    /// Bullet content is whatever follows the marker and its first whitespace
    /// character. Ordinal content drops the number, the dot and all following
    /// whitespace.
    pub fn parse(trimmed: &str) -> Option<(ListKind, &str)> {
        Self::bullet(trimmed)
            .map(|content| (ListKind::Unordered, content))
            .or_else(|| Self::ordinal(trimmed).map(|content| (ListKind::Ordered, content)))
    }

    fn bullet(trimmed: &str) -> Option<&str> {
        let mut chars = trimmed.char_indices();
        let (_, marker) = chars.next()?;
        if !Self::BULLETS.contains(&marker) {
            return None;
        }
        let (_, space) = chars.next()?;
        if !space.is_whitespace() {
            return None;
        }
        Some(chars.next().map_or("", |(i, _)| &trimmed[i..]))
    }

    fn ordinal(trimmed: &str) -> Option<&str> {
        let digits_end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if digits_end == 0 {
            return None;
        }
        let rest = trimmed[digits_end..].strip_prefix(Self::ORDINAL_DOT)?;
        let content = rest.trim_start();
        if content.len() == rest.len() {
            // No whitespace after the dot: `3.14` is text.
            return None;
        }
        Some(content)
    }
}
