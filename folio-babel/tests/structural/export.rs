//! Whole-document conversion (lightweight → structural)

use folio_babel::{Mode, ModeController};
use insta::assert_snapshot;

const KITCHEN_SINK: &str = "# Kitchen sink

Intro with **bold**, *italic* and `code`.

## Lists

- one
- two
1. first
2. second

> quoted

---

![logo](logo.png) and [home](https://example.com)

```rust
let x = 1 * 2;
```";

#[test]
fn test_kitchen_sink() {
    let html = ModeController::new().convert(KITCHEN_SINK, Mode::Lightweight, Mode::Structural);
    assert_snapshot!(html, @r#"
<h1>Kitchen sink</h1>
<p>Intro with <strong>bold</strong>, <em>italic</em> and <code>code</code>.</p>
<h2>Lists</h2>
<ul>
<li>one</li>
<li>two</li>
</ul>
<ol>
<li>first</li>
<li>second</li>
</ol>
<blockquote>quoted</blockquote>
<hr>
<p><img src="logo.png" alt="logo"> and <a href="https://example.com">home</a></p>
<pre><code class="language-rust">let x = 1 * 2;</code></pre>
"#);
}

#[test]
fn test_output_parses_back_to_the_same_structure() {
    let mut controller = ModeController::new();
    let html = controller.convert(KITCHEN_SINK, Mode::Lightweight, Mode::Structural);
    let text = controller.convert(&html, Mode::Structural, Mode::Lightweight);

    assert!(text.starts_with("# Kitchen sink\n\nIntro with **bold**, *italic* and `code`."));
    assert!(text.contains("## Lists"));
    assert!(text.contains("- one\n- two"));
    assert!(text.contains("1. first\n1. second"));
    assert!(text.contains("> quoted"));
    assert!(text.contains("![logo](logo.png) and [home](https://example.com)"));
    assert!(text.ends_with("```rust\nlet x = 1 * 2;\n```"));
}
