use super::InlineRule;

/// Emphasis, `*text*`.
///
/// Runs after [`super::Strong`], so a `**` pair has already been consumed and
/// cannot be read as two empty emphasis markers.
pub struct Emphasis;

impl Emphasis {
    pub const MARKER: char = '*';

    pub const RULE: InlineRule = InlineRule {
        name: "emphasis",
        pattern: r"\*(.*?)\*",
        template: "<em>${1}</em>",
    };
}
