use std::sync::OnceLock;

use regex::Regex;

use super::kinds::{CodeSpan, Emphasis, InlineRule, Link, RULE_ORDER};
use crate::rendering::escape::escape_html;

struct CompiledRule {
    rule: InlineRule,
    regex: Regex,
}

fn compiled_rules() -> &'static [CompiledRule] {
    static RULES: OnceLock<Vec<CompiledRule>> = OnceLock::new();
    RULES.get_or_init(|| {
        RULE_ORDER
            .iter()
            .map(|rule| CompiledRule {
                rule: *rule,
                regex: Regex::new(rule.pattern).expect("Invalid inline rule regex"),
            })
            .collect()
    })
}

fn code_span_regex() -> &'static Regex {
    static CODE_SPAN: OnceLock<Regex> = OnceLock::new();
    CODE_SPAN.get_or_init(|| Regex::new(CodeSpan::RULE.pattern).expect("Invalid code span regex"))
}

/// Formats the text of one paragraph or list item.
///
/// Text outside backtick spans is escaped first. Then each rule in
/// [`RULE_ORDER`] runs exactly once over the whole line; output of one rule is
/// input to the next, and nothing is rescanned. Unbalanced markers stay as
/// literal characters.
pub fn format_inline(text: &str) -> String {
    let mut html = escape_outside_code_spans(text);
    if !html.contains(&[Emphasis::MARKER, CodeSpan::TICK, Link::OPEN][..]) {
        return html;
    }

    for compiled in compiled_rules() {
        html = compiled
            .regex
            .replace_all(&html, compiled.rule.template)
            .into_owned();
        log::trace!("after {}: {html}", compiled.rule.name);
    }
    html
}

/// Escapes everything except the code spans, which are copied through raw.
///
/// Spans are found on the raw line, while the code span rule later runs on the
/// emphasis-rewritten line. The two can pair backticks differently, so the raw
/// regions are approximate: only text inside some backtick pair is ever left
/// unescaped.
fn escape_outside_code_spans(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for m in code_span_regex().find_iter(text) {
        out.push_str(&escape_html(&text[last..m.start()]));
        out.push_str(m.as_str());
        last = m.end();
    }
    out.push_str(&escape_html(&text[last..]));
    out
}
