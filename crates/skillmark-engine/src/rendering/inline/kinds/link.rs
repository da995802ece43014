use super::InlineRule;

/// Link, `[label](url)`. Always opens in a new browsing context without
/// leaking the opener or the referrer.
pub struct Link;

impl Link {
    pub const OPEN: char = '[';

    pub const RULE: InlineRule = InlineRule {
        name: "link",
        pattern: r"\[([^\]]+)\]\(([^)]+)\)",
        template: r#"<a href="${2}" target="_blank" rel="noopener noreferrer">${1}</a>"#,
    };
}
