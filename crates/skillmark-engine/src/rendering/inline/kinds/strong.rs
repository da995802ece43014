use super::InlineRule;

/// Strong emphasis, `**text**`.
pub struct Strong;

impl Strong {
    pub const RULE: InlineRule = InlineRule {
        name: "strong",
        pattern: r"\*\*(.*?)\*\*",
        template: "<strong>${1}</strong>",
    };
}
