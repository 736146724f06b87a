//! Groups lightweight list item lines into structural list wrappers.
//!
//! # The High-Level Concept
//!
//! List items in the lightweight dialect are independent lines (`- a`,
//! `1. b`); the structural dialect needs them wrapped in `<ul>`/`<ol>`. A
//! single forward scan with a three-state machine decides where wrappers open
//! and close.
//!
//! # The Algorithm
//!
//! 1. **Unordered item** (`- text`):
//!    - `None` → open `<ul>`, state `InUnordered`
//!    - `InOrdered` → close `</ol>`, open `<ul>`, state `InUnordered`
//!    - emit `<li>text</li>`
//!
//! 2. **Ordered item** (`N. text`): symmetric, with `<ol>`/`InOrdered`.
//!
//! 3. **Any other line**: close the open wrapper (if any), state `None`,
//!    emit the line unchanged.
//!
//! 4. **End of input**: close the open wrapper (if any).
//!
//! Wrappers never nest: a type switch always closes the previous list first,
//! and every path that leaves a list state emits its closing tag, so the
//! output never ends with a dangling open wrapper.

use once_cell::sync::Lazy;
use regex::Regex;

static UNORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^- (.*)$").unwrap());
static ORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\. (.*)$").unwrap());

/// Where the scan currently is with respect to list wrappers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListState {
    #[default]
    None,
    InUnordered,
    InOrdered,
}

impl ListState {
    fn open_tag(&self) -> Option<&'static str> {
        match self {
            ListState::None => None,
            ListState::InUnordered => Some("<ul>"),
            ListState::InOrdered => Some("<ol>"),
        }
    }

    fn close_tag(&self) -> Option<&'static str> {
        match self {
            ListState::None => None,
            ListState::InUnordered => Some("</ul>"),
            ListState::InOrdered => Some("</ol>"),
        }
    }
}

/// Classify a line as a list item, returning the list state it belongs to
/// and the item text exactly as written after the marker.
fn classify(line: &str) -> Option<(ListState, &str)> {
    if let Some(caps) = UNORDERED_ITEM.captures(line) {
        return caps.get(1).map(|m| (ListState::InUnordered, m.as_str()));
    }
    if let Some(caps) = ORDERED_ITEM.captures(line) {
        return caps.get(1).map(|m| (ListState::InOrdered, m.as_str()));
    }
    None
}

/// Rewrite `text`, wrapping runs of same-typed list item lines in list tags.
pub fn group_lists(text: &str) -> String {
    let mut state = ListState::None;
    let mut lines: Vec<String> = Vec::new();

    for line in text.split('\n') {
        match classify(line) {
            Some((wanted, item)) => {
                if state != wanted {
                    if let Some(close) = state.close_tag() {
                        lines.push(close.to_string());
                    }
                    if let Some(open) = wanted.open_tag() {
                        lines.push(open.to_string());
                    }
                    state = wanted;
                }
                lines.push(format!("<li>{item}</li>"));
            }
            None => {
                if let Some(close) = state.close_tag() {
                    lines.push(close.to_string());
                }
                state = ListState::None;
                lines.push(line.to_string());
            }
        }
    }

    if let Some(close) = state.close_tag() {
        lines.push(close.to_string());
    }

    lines.join("\n")
}
