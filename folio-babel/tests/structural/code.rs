//! Code opacity and inline precedence (lightweight → structural)

use folio_babel::{Mode, ModeController};

fn to_structural(text: &str) -> String {
    ModeController::new().convert(text, Mode::Lightweight, Mode::Structural)
}

#[test]
fn test_code_fence_interior_is_byte_identical() {
    let interior = "function f(){return 1}";
    let html = to_structural(&format!("```js\n{interior}\n```"));
    assert_eq!(
        html,
        format!("<pre><code class=\"language-js\">{interior}</code></pre>")
    );
}

#[test]
fn test_code_fence_shields_every_rule() {
    let interior = "# h\n**b** *i* `c`\n- item\n1. item\n> q\n---\n![a](b) [c](d)\n\nafter blank";
    let html = to_structural(&format!("```\n{interior}\n```"));
    assert_eq!(html, format!("<pre><code>{interior}</code></pre>"));
}

#[test]
fn test_text_around_fence_is_still_converted() {
    let html = to_structural("# Before\n\n```sh\necho *x*\n```\n\n*after*");
    assert_eq!(
        html,
        "<h1>Before</h1>\n<pre><code class=\"language-sh\">echo *x*</code></pre>\n<em>after</em>"
    );
}

#[test]
fn test_image_is_never_parsed_as_link() {
    let html = to_structural("![alt](http://x/img.png)");
    assert!(html.contains(r#"<img src="http://x/img.png" alt="alt">"#));
    assert!(!html.contains("<a "));
    assert!(!html.contains("!alt"));
}

#[test]
fn test_link_next_to_image() {
    let html = to_structural("![i](a.png) [t](b.html)");
    assert_eq!(
        html,
        r#"<p><img src="a.png" alt="i"> <a href="b.html">t</a></p>"#
    );
}
