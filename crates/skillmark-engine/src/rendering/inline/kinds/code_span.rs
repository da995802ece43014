use super::InlineRule;

/// Inline code, `` `text` ``.
///
/// The content between the ticks is emitted as written: it is not HTML-escaped.
/// Callers relying on escaping must not pass untrusted markup inside ticks.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: char = '`';

    pub const RULE: InlineRule = InlineRule {
        name: "code_span",
        pattern: r"`([^`]+)`",
        template: r#"<code class="inline-code">${1}</code>"#,
    };
}
