//! List grouping (lightweight → structural)

use folio_babel::{Mode, ModeController};

fn to_structural(text: &str) -> String {
    ModeController::new().convert(text, Mode::Lightweight, Mode::Structural)
}

#[test]
fn test_list_type_switching_never_nests() {
    let html = to_structural("- a\n1. b\n- c");
    assert_eq!(
        html,
        "<ul>\n<li>a</li>\n</ul>\n<ol>\n<li>b</li>\n</ol>\n<ul>\n<li>c</li>\n</ul>"
    );

    // Every wrapper closes before the next one opens.
    let opens_and_closes: Vec<&str> = html
        .lines()
        .filter(|line| matches!(*line, "<ul>" | "</ul>" | "<ol>" | "</ol>"))
        .collect();
    assert_eq!(
        opens_and_closes,
        vec!["<ul>", "</ul>", "<ol>", "</ol>", "<ul>", "</ul>"]
    );
}

#[test]
fn test_list_closes_at_end_of_input() {
    let html = to_structural("intro\n\n1. one\n2. two");
    assert_eq!(
        html,
        "<p>intro</p>\n<ol>\n<li>one</li>\n<li>two</li>\n</ol>"
    );
}

#[test]
fn test_list_items_keep_inline_markup() {
    let html = to_structural("- **bold** item\n- [link](/x)");
    assert_eq!(
        html,
        "<ul>\n<li><strong>bold</strong> item</li>\n<li><a href=\"/x\">link</a></li>\n</ul>"
    );
}

#[test]
fn test_ordered_numbering_is_flattened_both_ways() {
    let mut controller = ModeController::new();
    let text = controller.convert(
        "<ol><li>a</li><li>b</li><li>c</li></ol>",
        Mode::Structural,
        Mode::Lightweight,
    );
    assert_eq!(text, "1. a\n1. b\n1. c");

    let html = controller.convert(&text, Mode::Lightweight, Mode::Structural);
    assert_eq!(html, "<ol>\n<li>a</li>\n<li>b</li>\n<li>c</li>\n</ol>");
}
