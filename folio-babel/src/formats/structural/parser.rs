//! Structural markup parsing (markup text → node tree)
//!
//! Pipeline: markup text → html5ever → RcDom → [`Node`] rooted at `<body>`.

use crate::error::ConvertError;
use crate::formats::MAX_DEPTH;
use crate::tree::{Element, Node};
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Parse structural markup into a tree whose root is the document body.
///
/// Fragments are accepted: html5ever supplies the missing `<html>`/`<body>`
/// wrappers, and only the body's content ends up in the tree.
pub fn parse_to_tree(markup: &str) -> Result<Node, ConvertError> {
    let dom = parse_document(RcDom::default(), Default::default()).one(markup);

    let body = find_body(&dom.document)
        .ok_or_else(|| ConvertError::Parse("document has no body".to_string()))?;

    copy_handle(&body, 0)?
        .ok_or_else(|| ConvertError::Parse("body is not an element".to_string()))
}

fn find_body(handle: &Handle) -> Option<Handle> {
    if let NodeData::Element { ref name, .. } = handle.data {
        if &*name.local == "body" {
            return Some(handle.clone());
        }
    }

    handle.children.borrow().iter().find_map(find_body)
}

/// Copy an rcdom node (and its subtree) into our own tree.
///
/// Comments, doctypes and processing instructions carry no content and are
/// dropped.
fn copy_handle(handle: &Handle, depth: usize) -> Result<Option<Node>, ConvertError> {
    match handle.data {
        NodeData::Text { ref contents } => Ok(Some(Node::Text(contents.borrow().to_string()))),
        NodeData::Element {
            ref name,
            ref attrs,
            ..
        } => {
            if depth >= MAX_DEPTH {
                return Err(ConvertError::TooDeep { limit: MAX_DEPTH });
            }

            let mut element = Element::new(&*name.local);
            element.attrs = attrs
                .borrow()
                .iter()
                .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                .collect();

            for child in handle.children.borrow().iter() {
                if let Some(node) = copy_handle(child, depth + 1)? {
                    element.children.push(node);
                }
            }

            Ok(Some(Node::Element(element)))
        }
        _ => Ok(None),
    }
}
