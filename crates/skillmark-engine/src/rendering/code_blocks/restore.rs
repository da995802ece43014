use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::{extract::CodeBlocks, placeholder::PlaceholderToken};

fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER
        .get_or_init(|| Regex::new(PlaceholderToken::PATTERN).expect("Invalid placeholder regex"))
}

/// Splices stored code block HTML back in place of every placeholder token.
///
/// Must run after block processing so code content never reaches the inline
/// formatter. A token whose index has no stored block is left as written.
pub fn restore_code_blocks(html: &str, blocks: &CodeBlocks) -> String {
    if blocks.is_empty() && !html.contains(PlaceholderToken::OPEN) {
        return html.to_string();
    }

    placeholder_regex()
        .replace_all(html, |caps: &Captures<'_>| {
            let whole = caps.get(0).map_or("", |m| m.as_str());
            PlaceholderToken::parse(whole)
                .map(PlaceholderToken::index)
                .and_then(|index| blocks.get(index))
                .map_or_else(
                    || {
                        log::trace!("leaving unmatched placeholder {whole} in place");
                        whole.to_string()
                    },
                    |block| block.to_html(),
                )
        })
        .into_owned()
}
