//! # Protected Code Regions
//!
//! Fenced code is lifted out of the document before any line processing and
//! spliced back in afterwards, so its content is never classified, inline
//! formatted or escaped twice.
//!
//! ## Modules
//!
//! - **`placeholder`**: `PlaceholderToken`, the `{{CODE_BLOCK_<n>}}` marker
//! - **`extract`**: `extract_code_blocks()` and the `CodeBlocks` arena
//! - **`restore`**: `restore_code_blocks()` final splice by index
//!
//! ## Key Invariants
//!
//! - Block `n` in the arena is replaced by exactly the token with index `n`
//! - Extraction followed by restoration is the identity on code regions, for
//!   documents that do not already contain placeholder-shaped text

pub mod extract;
pub mod placeholder;
pub mod restore;

pub use extract::{CodeBlock, CodeBlocks, DEFAULT_LANGUAGE, Extracted, extract_code_blocks};
pub use placeholder::PlaceholderToken;
pub use restore::restore_code_blocks;
