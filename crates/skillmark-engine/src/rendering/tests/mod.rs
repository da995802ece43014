//! End-to-end tests for `render`, wiring all three passes together.


use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use crate::rendering::{escape_html, render};

const LESSON: &str = "# Title\nSome **bold** and `code`.\n- item1\n- item2\n```python\nprint(1)\n```";

#[test]
fn lesson_renders_blocks_in_order() {
    insta::assert_snapshot!(
        render(LESSON),
        @r#"<h1>Title</h1><p>Some <strong>bold</strong> and <code class="inline-code">code</code>.</p><ul><li>item1</li><li>item2</li></ul><pre><code class="language-python">print(1)</code></pre>"#
    );
}

#[test]
fn lesson_output_order() {
    let html = render(LESSON);
    let positions: Vec<usize> = [
        "<h1>Title</h1>",
        "<p>Some <strong>bold</strong>",
        r#"<code class="inline-code">code</code>"#,
        "<ul><li>item1</li><li>item2</li></ul>",
        r#"<pre><code class="language-python">print(1)</code></pre>"#,
    ]
    .iter()
    .map(|needle| {
        html.find(*needle)
            .unwrap_or_else(|| panic!("{needle} missing from {html}"))
    })
    .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{html}");
    assert_eq!(html.matches("<ul>").count(), 1);
    assert_eq!(html.matches("<li>").count(), 2);
}

#[test]
fn empty_input_is_empty_output() {
    assert_eq!(render(""), "");
}

#[test]
fn whitespace_only_input_is_empty_output() {
    assert_eq!(render("\n  \n\t\n"), "");
}

#[test]
fn plain_line_is_one_escaped_paragraph() {
    assert_eq!(
        render(r#"Tom & Jerry say "<hi>" it's"#),
        "<p>Tom &amp; Jerry say &quot;&lt;hi&gt;&quot; it&#039;s</p>"
    );
}

#[test]
fn consecutive_bullets_share_one_list() {
    assert_eq!(
        render("- one\n- two"),
        "<ul><li>one</li><li>two</li></ul>"
    );
}

#[test]
fn bullet_then_number_switches_list() {
    assert_eq!(
        render("- one\n1. two"),
        "<ul><li>one</li></ul><ol><li>two</li></ol>"
    );
}

#[test]
fn fenced_body_is_not_inline_formatted() {
    assert_eq!(
        render("```md\n**bold** and [text](url) <tag>\n```"),
        r#"<pre><code class="language-md">**bold** and [text](url) &lt;tag&gt;</code></pre>"#
    );
}

#[test]
fn heading_keeps_literal_asterisks() {
    assert_eq!(render("## A **bold** move"), "<h2>A **bold** move</h2>");
}

#[test]
fn unterminated_fence_becomes_paragraphs() {
    assert_eq!(
        render("```rust\nlet x = 1;"),
        "<p>```rust</p><p>let x = 1;</p>"
    );
}

#[test]
fn inline_code_gap_is_preserved() {
    assert_eq!(
        render("Run `<script>alert(1)</script>` now"),
        r#"<p>Run <code class="inline-code"><script>alert(1)</script></code> now</p>"#
    );
}

#[test]
fn code_block_inside_list_closes_list() {
    assert_eq!(
        render("- a\n```\nx\n```\n- b"),
        concat!(
            "<ul><li>a</li></ul>",
            r#"<pre><code class="language-plaintext">x</code></pre>"#,
            "<ul><li>b</li></ul>",
        )
    );
}

#[test]
fn break_follows_code_block_before_blank_line() {
    assert_eq!(
        render("```sh\nls\n```\n\nDone."),
        r#"<pre><code class="language-sh">ls</code></pre><br><p>Done.</p>"#
    );
}

#[test]
fn literal_placeholder_text_is_a_known_collision() {
    // The document is not scanned for token-shaped text before extraction.
    assert_eq!(
        render("```\nreal\n```\n{{CODE_BLOCK_0}}"),
        concat!(
            r#"<pre><code class="language-plaintext">real</code></pre>"#,
            r#"<pre><code class="language-plaintext">real</code></pre>"#,
        )
    );
}

#[test]
fn unmatched_literal_placeholder_survives() {
    assert_eq!(render("{{CODE_BLOCK_3}}"), "{{CODE_BLOCK_3}}");
}

#[test]
fn zero_padded_placeholder_text_is_kept_verbatim() {
    assert_eq!(render("{{CODE_BLOCK_05}}"), "{{CODE_BLOCK_05}}");
    assert_eq!(
        render("- a\n  {{CODE_BLOCK_00}}  "),
        "<ul><li>a</li></ul>{{CODE_BLOCK_00}}"
    );
}

#[rstest]
#[case("# One", "<h1>One</h1>")]
#[case("## Two", "<h2>Two</h2>")]
#[case("### Three", "<h3>Three</h3>")]
#[case("#### Four", "<p>#### Four</p>")]
#[case("#NoSpace", "<p>#NoSpace</p>")]
#[case("* star item", "<ul><li>star item</li></ul>")]
#[case("3. third", "<ol><li>third</li></ol>")]
#[case("  - indented", "<ul><li>indented</li></ul>")]
#[case("  indented para", "<p>  indented para</p>")]
#[case(
    "Read [the book](https://doc.rust-lang.org/book/)",
    r#"<p>Read <a href="https://doc.rust-lang.org/book/" target="_blank" rel="noopener noreferrer">the book</a></p>"#
)]
#[case(
    "- **Tip:** use *iterators*",
    "<ul><li><strong>Tip:</strong> use <em>iterators</em></li></ul>"
)]
fn single_line_documents(#[case] markdown: &str, #[case] expected: &str) {
    assert_eq!(render(markdown), expected);
}

#[test]
fn multi_section_lesson() {
    let md = "\
### Core Concept

Ownership means *one* owner.

1. Move
2. Borrow

- Clone

Wrap up.
";
    assert_eq!(
        render(md),
        concat!(
            "<h3>Core Concept</h3>",
            "<p>Ownership means <em>one</em> owner.</p>",
            "<ol><li>Move</li><li>Borrow</li></ol>",
            "<ul><li>Clone</li></ul>",
            "<p>Wrap up.</p>",
        )
    );
}

proptest! {
    #[test]
    fn render_is_total(s in any::<String>()) {
        let _ = render(&s);
    }

    #[test]
    fn special_characters_are_escaped(s in "[a-z0-9 &<>\"'#*.\n-]{0,80}") {
        let html = render(&s);
        invariants::check_escaped(&html);
        invariants::check_lists(&html);
    }

    #[test]
    fn plain_line_is_single_paragraph(s in "[a-zA-Z][a-zA-Z ,!?&<>\"']{0,40}") {
        prop_assert_eq!(render(&s), format!("<p>{}</p>", escape_html(&s)));
    }

    #[test]
    fn fenced_code_round_trips_escaped(body in "[a-z<>&*\\[\\]() ]{1,40}", lang in "[a-z]{0,8}") {
        let md = format!("```{lang}\n{body}\n```");
        let expected_lang = if lang.is_empty() { "plaintext" } else { lang.as_str() };
        prop_assert_eq!(
            render(&md),
            format!(
                r#"<pre><code class="language-{}">{}</code></pre>"#,
                expected_lang,
                escape_html(body.trim())
            )
        );
    }
}
