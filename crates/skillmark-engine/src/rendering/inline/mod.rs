//! # Inline Formatting
//!
//! Character-level markup inside a single paragraph or list item: strong,
//! emphasis, inline code and links. Headings and fenced code never pass
//! through here.
//!
//! ## Modules
//!
//! - **`kinds`**: one type per construct, each owning its delimiters and rule
//! - **`formatter`**: `format_inline()`, escaping plus the ordered rule chain
//!
//! ## Rule Order
//!
//! Strong, then emphasis, then inline code, then links. Each rule runs once
//! over the full line with non-greedy matching.

pub mod formatter;
pub mod kinds;

pub use formatter::format_inline;
