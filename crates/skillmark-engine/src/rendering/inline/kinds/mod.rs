//! # Inline Kinds
//!
//! Each inline construct owns its delimiters and its substitution rule.
//! The formatter applies the rules in [`RULE_ORDER`]; it never hardcodes `*`,
//! `` ` `` or `[`.

pub mod code_span;
pub mod emphasis;
pub mod link;
pub mod strong;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::Link;
pub use strong::Strong;

/// A single non-greedy substitution applied across a whole line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineRule {
    /// Short name used in trace logs.
    pub name: &'static str,
    /// Regex with the inner text in capture group 1 (and the URL in group 2 for links).
    pub pattern: &'static str,
    /// Replacement template in `regex` syntax.
    pub template: &'static str,
}

/// Fixed application order. Strong must precede emphasis.
pub const RULE_ORDER: [InlineRule; 4] = [Strong::RULE, Emphasis::RULE, CodeSpan::RULE, Link::RULE];
