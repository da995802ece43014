//! # Markdown Rendering
//!
//! Converts loosely structured Markdown (as produced by a text generation
//! service) into an HTML fragment safe to inject into a host element.
//!
//! ## Passes
//!
//! 1. **Extract** (`code_blocks::extract`): fenced code is escaped, wrapped and
//!    replaced by `{{CODE_BLOCK_<n>}}` tokens
//! 2. **Blocks** (`blocks`): the residual text is classified line by line and
//!    written as headings, paragraphs and lists, with inline formatting
//! 3. **Restore** (`code_blocks::restore`): tokens are swapped for the stored
//!    code block HTML
//!
//! Each pass sees the complete output of the previous one. No state survives a
//! call; compiled patterns are shared immutable statics.
//!
//! ## Known gap
//!
//! Inline code spans are not escaped, so `` `<b>` `` yields a live `<b>` element.

pub mod blocks;
pub mod code_blocks;
pub mod escape;
pub mod inline;

#[cfg(test)]
mod tests;

pub use escape::escape_html;

/// Renders Markdown into an HTML fragment. Never fails; empty in, empty out.
pub fn render(markdown: &str) -> String {
    if markdown.is_empty() {
        return String::new();
    }

    let extracted = code_blocks::extract_code_blocks(markdown);
    let html = blocks::process_lines(&extracted.residual);
    let html = code_blocks::restore_code_blocks(&html, &extracted.blocks);

    log::debug!(
        "rendered {} bytes of markdown into {} bytes of html",
        markdown.len(),
        html.len()
    );
    html
}
