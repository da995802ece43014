use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::placeholder::PlaceholderToken;
use crate::rendering::escape::escape_html;

/// Language tag used when a fence carries none.
pub const DEFAULT_LANGUAGE: &str = "plaintext";

/// A fenced code block lifted out of the document before line processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// Language tag from the opening fence, or [`DEFAULT_LANGUAGE`].
    pub language: String,
    /// Trimmed, HTML-escaped body.
    pub content: String,
    /// Position in the extraction order; equals the placeholder index.
    pub index: usize,
}

impl CodeBlock {
    pub fn to_html(&self) -> String {
        format!(
            r#"<pre><code class="language-{}">{}</code></pre>"#,
            self.language, self.content
        )
    }

    pub fn placeholder(&self) -> PlaceholderToken {
        PlaceholderToken(self.index)
    }
}

/// Ordered arena of extracted code blocks, addressed by placeholder index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeBlocks(Vec<CodeBlock>);

impl CodeBlocks {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CodeBlock> {
        self.0.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CodeBlock> {
        self.0.iter()
    }

    /// Appends a block and returns the token that stands in for it.
    fn push(&mut self, language: &str, body: &str) -> PlaceholderToken {
        let language = if language.is_empty() {
            DEFAULT_LANGUAGE
        } else {
            language
        };
        let block = CodeBlock {
            language: language.to_string(),
            content: escape_html(body.trim()),
            index: self.0.len(),
        };
        let token = block.placeholder();
        self.0.push(block);
        token
    }
}

/// Result of the extraction pass: placeholder-substituted text plus the blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub residual: String,
    pub blocks: CodeBlocks,
}

/// Fence opener at the start of a line, word-character language tag, newline,
/// then the shortest body up to the next triple backtick.
fn fence_regex() -> &'static Regex {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    FENCE.get_or_init(|| {
        Regex::new(r"(?m)^```([A-Za-z0-9_]*)\r?\n((?s:.*?))```").expect("Invalid fence regex")
    })
}

/// Replaces every fenced code region with a [`PlaceholderToken`].
///
/// Matches are non-overlapping and taken left to right. A fence with no closing
/// marker does not match and stays in the residual text untouched.
pub fn extract_code_blocks(markdown: &str) -> Extracted {
    let mut blocks = CodeBlocks::default();
    let residual = fence_regex()
        .replace_all(markdown, |caps: &Captures<'_>| {
            let language = caps.get(1).map_or("", |m| m.as_str());
            let body = caps.get(2).map_or("", |m| m.as_str());
            blocks.push(language, body).to_string()
        })
        .into_owned();

    log::debug!("extracted {} fenced code block(s)", blocks.len());

    Extracted { residual, blocks }
}
