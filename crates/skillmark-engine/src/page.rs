//! Standalone HTML documents around a rendered fragment.
//!
//! `render` only produces a fragment for injection into a host element. For
//! previewing outside a host, [`standalone_page`] supplies the document shell
//! and the reading theme.

use crate::rendering::{blocks::kinds::Heading, code_blocks::extract_code_blocks, escape_html};
use crate::theme::CONTAINER_CLASS;

/// Wraps `fragment` in a complete HTML5 document.
///
/// `title` is escaped; `fragment` and `stylesheet` are inserted as given.
pub fn standalone_page(title: &str, fragment: &str, stylesheet: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         <style>\n{stylesheet}</style>\n\
         </head>\n\
         <body>\n\
         <article class=\"{CONTAINER_CLASS}\">{fragment}</article>\n\
         </body>\n\
         </html>\n",
        title = escape_html(title),
    )
}

/// Text of the first level-one heading, as the lesson's title.
///
/// Fenced code is skipped, so a `# comment` in a shell or Python block is
/// never taken for a heading.
pub fn document_title(markdown: &str) -> Option<String> {
    let residual = extract_code_blocks(markdown).residual;
    residual
        .lines()
        .filter_map(Heading::parse)
        .find(|(level, text)| *level == 1 && !text.trim().is_empty())
        .map(|(_, text)| text.trim().to_string())
}
