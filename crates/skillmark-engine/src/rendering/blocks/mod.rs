//! # Block Processing
//!
//! Single pass over the placeholder-substituted text, one line at a time.
//!
//! ## Phases per line
//!
//! 1. **Line Classification** (`classify`): `MarkdownLineClassifier` turns the
//!    line into a `LineKind` using only the line itself
//! 2. **Emission** (`builder`): `HtmlBlockWriter` applies the list state machine
//!    and writes HTML, calling the inline formatter for paragraphs and items
//!
//! ## Modules
//!
//! - **`types`**: `ListKind`, `ParserState`, `Emitted`
//! - **`kinds`**: `Heading` and `ListMarker`, owning their marker syntax
//! - **`classify`**: `MarkdownLineClassifier` and `LineKind`
//! - **`builder`**: `HtmlBlockWriter` state machine
//!
//! ## Key Invariants
//!
//! - At most one list is open, and only one nesting level exists
//! - A non-list line always closes an open list before it is emitted
//! - The writer always finishes in the no-list state

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::HtmlBlockWriter;
pub use classify::{LineKind, MarkdownLineClassifier};
pub use types::{ListKind, ParserState};

/// Runs the block pass over residual text and returns the HTML stream.
///
/// Placeholder tokens are copied through for the restorer.
pub fn process_lines(residual: &str) -> String {
    let classifier = MarkdownLineClassifier;
    let mut writer = HtmlBlockWriter::with_capacity(residual.len() + residual.len() / 4);

    for line in residual.split('\n') {
        let kind = classifier.classify(line);
        writer.push(&kind);
    }

    writer.finish()
}
