//! Lightweight serialization (structural tree → lightweight text)
//!
//! A post-order walk: every element first converts its children, in document
//! order, and then wraps the concatenated result in its own template. Parents
//! are passed down so that templates depending on context (list markers,
//! `<code>` inside `<pre>`) can be decided locally.

use crate::error::ConvertError;
use crate::formats::MAX_DEPTH;
use crate::tree::{Element, Node, Tag};

/// Serialize a structural tree into lightweight text.
///
/// Trailing newlines accumulated by block templates are trimmed once at the
/// very end.
pub fn serialize_tree(root: &Node) -> Result<String, ConvertError> {
    let mut out = serialize_node(root, None, 0)?;
    let trimmed = out.trim_end_matches('\n').len();
    out.truncate(trimmed);
    Ok(out)
}

fn serialize_node(node: &Node, parent: Option<Tag>, depth: usize) -> Result<String, ConvertError> {
    match node {
        Node::Text(text) => Ok(text.clone()),
        Node::Element(element) => serialize_element(element, parent, depth),
    }
}

fn serialize_element(
    element: &Element,
    parent: Option<Tag>,
    depth: usize,
) -> Result<String, ConvertError> {
    if depth >= MAX_DEPTH {
        return Err(ConvertError::TooDeep { limit: MAX_DEPTH });
    }

    let kind = element.kind();
    let children = &element.children;
    let mut inner = String::new();
    for (index, child) in children.iter().enumerate() {
        if child.is_blank_text() && (kind.ignores_blank_text() || next_to_block(children, index)) {
            continue;
        }
        inner.push_str(&serialize_node(child, Some(kind), depth + 1)?);
    }

    let out = match kind {
        Tag::Heading(level) => format!("{} {inner}\n\n", "#".repeat(level as usize)),
        Tag::Paragraph => format!("{inner}\n\n"),
        Tag::Strong => format!("**{inner}**"),
        Tag::Emphasis => format!("*{inner}*"),
        // The enclosing <pre> does the fencing.
        Tag::Code if parent == Some(Tag::Preformatted) => inner,
        Tag::Code => format!("`{inner}`"),
        Tag::Preformatted => fence(element, &inner),
        Tag::Blockquote => format!("> {inner}\n\n"),
        Tag::UnorderedList | Tag::OrderedList => format!("{inner}\n"),
        Tag::ListItem => {
            let marker = if parent == Some(Tag::OrderedList) {
                "1. "
            } else {
                "- "
            };
            format!("{marker}{inner}\n")
        }
        Tag::Link => format!("[{inner}]({})", element.attr("href").unwrap_or("")),
        Tag::Image => format!(
            "![{}]({})",
            element.attr("alt").unwrap_or(""),
            element.attr("src").unwrap_or("")
        ),
        Tag::LineBreak => "\n".to_string(),
        Tag::Rule => "\n---\n\n".to_string(),
        Tag::TableRow => format!("{inner}\n"),
        Tag::TableCell => format!("{inner} | "),
        Tag::Table | Tag::TableSection | Tag::Container | Tag::Unknown => inner,
    };

    Ok(out)
}

fn next_to_block(siblings: &[Node], index: usize) -> bool {
    let before = index.checked_sub(1).and_then(|i| siblings.get(i));
    let after = siblings.get(index + 1);
    [before, after]
        .into_iter()
        .flatten()
        .filter_map(Node::as_element)
        .any(|element| element.kind().is_block())
}

/// Fence a `<pre>` block.
///
/// With a `language-<name>` class on the inner `<code>`, the fence carries the
/// language and the code's raw text (its children are not converted, so
/// nothing inside gets re-marked). Otherwise the already converted children
/// are fenced as they are.
fn fence(pre: &Element, inner: &str) -> String {
    let tagged = pre
        .first_child_element()
        .filter(|child| child.kind() == Tag::Code)
        .and_then(|code| code.language_hint().map(|language| (language, code)));

    match tagged {
        Some((language, code)) => format!("```{language}\n{}\n```\n\n", code.text_content()),
        None => format!("```\n{inner}\n```\n\n"),
    }
}
