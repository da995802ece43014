/// Replaces the HTML-significant characters `&`, `<`, `>`, `"` and `'` with entities.
///
/// `&` is handled in the same pass as the others, so the entities introduced
/// here are never escaped a second time.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}
