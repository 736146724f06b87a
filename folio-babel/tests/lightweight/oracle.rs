//! Checks lightweight output against an independent Markdown parser.
//!
//! comrak is only a test oracle here: whatever block structure it reads from
//! our output must match the structural input's blocks.

use super::export::KITCHEN_SINK;
use comrak::nodes::{ListType, NodeValue};
use comrak::{parse_document, Arena, Options};
use folio_babel::{Mode, ModeController};

fn block_kinds(markdown: &str) -> Vec<String> {
    let arena = Arena::new();
    let options = Options::default();
    let root = parse_document(&arena, markdown, &options);

    root.children()
        .map(|node| match &node.data.borrow().value {
            NodeValue::Heading(heading) => format!("h{}", heading.level),
            NodeValue::Paragraph => "p".to_string(),
            NodeValue::List(list) if matches!(list.list_type, ListType::Bullet) => "ul".to_string(),
            NodeValue::List(_) => "ol".to_string(),
            NodeValue::BlockQuote => "blockquote".to_string(),
            NodeValue::CodeBlock(code) => format!("code:{}", code.info),
            NodeValue::ThematicBreak => "hr".to_string(),
            other => format!("{other:?}"),
        })
        .collect()
}

#[test]
fn test_block_structure_survives() {
    let markdown = ModeController::new().convert(KITCHEN_SINK, Mode::Structural, Mode::Lightweight);
    assert_eq!(
        block_kinds(&markdown),
        vec!["h1", "p", "ul", "ol", "blockquote", "code:python", "p", "hr", "p"]
    );
}

#[test]
fn test_code_block_literal_is_raw_text() {
    let markdown = ModeController::new().convert(
        r#"<pre><code class="language-rust">let s = "&lt;b&gt;";</code></pre>"#,
        Mode::Structural,
        Mode::Lightweight,
    );

    let arena = Arena::new();
    let root = parse_document(&arena, &markdown, &Options::default());
    let first = root.first_child().expect("one block");
    match &first.data.borrow().value {
        NodeValue::CodeBlock(code) => {
            assert_eq!(code.info, "rust");
            assert_eq!(code.literal, "let s = \"<b>\";\n");
        }
        other => panic!("Expected code block, got {other:?}"),
    };
}

#[test]
fn test_emphasis_is_read_back() {
    let markdown = ModeController::new().convert(
        "<p><strong>strong</strong> and <em>soft</em></p>",
        Mode::Structural,
        Mode::Lightweight,
    );

    let arena = Arena::new();
    let root = parse_document(&arena, &markdown, &Options::default());
    let paragraph = root.first_child().expect("paragraph");
    let inline: Vec<bool> = paragraph
        .children()
        .map(|node| {
            matches!(
                node.data.borrow().value,
                NodeValue::Strong | NodeValue::Emph
            )
        })
        .collect();
    assert_eq!(inline, vec![true, false, true]);
}
