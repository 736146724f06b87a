//! Structural serialization (lightweight text → structural markup text)
//!
//! The conversion is a fixed sequence of rewrite passes over the whole text.
//! Order matters: each pass must only see markup it is meant to rewrite, so
//! longer or more specific patterns run before the ones they would otherwise
//! be shadowed by.
//!
//! 0. Line endings normalised to `\n`, stray placeholder sentinels escaped
//! 1. Fenced code blocks (stashed as opaque block placeholders)
//! 2. Inline code spans (stashed as opaque inline placeholders)
//! 3. Headings, `######` down to `#`
//! 4. Bold, then italic
//! 5. Images, then links
//! 6. Blockquote lines
//! 7. Horizontal rules
//! 8. List grouping (see [`group_lists`])
//! 9. Paragraph wrapping of the remaining text blocks
//! 10. Blank-line collapsing and trimming, then the stashed code is restored

use crate::common::list_grouping::group_lists;
use crate::common::stash::{CodeStash, FragmentKind};
use crate::error::ConvertError;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static FENCED_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```([\w+#.-]*)[ \t]*\n(.*?)```").unwrap());
static INLINE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`\n]+)`").unwrap());

/// Heading patterns, longest prefix first.
static HEADINGS: Lazy<Vec<(usize, Regex)>> = Lazy::new(|| {
    (1..=6)
        .rev()
        .map(|level| {
            let pattern = format!(r"(?m)^{} (.+)$", "#".repeat(level));
            (level, Regex::new(&pattern).unwrap())
        })
        .collect()
});

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*\n]+)\*").unwrap());
static IMAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\]\n]*)\]\(([^)\s]*)\)").unwrap());
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]\n]+)\]\(([^)\s]*)\)").unwrap());
static BLOCKQUOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^> (.*)$").unwrap());
static RULE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^---$").unwrap());

static BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n(?:[ \t]*\n)+").unwrap());
static BLOCK_LEVEL_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^<(?:h[1-6]|ul|ol|li|blockquote|pre|hr)[\s>/]").unwrap());
static TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<(/?)([A-Za-z][A-Za-z0-9]*)(?:\s[^>]*)?/?>").unwrap());

/// Convert lightweight text into structural markup text.
pub fn to_structural(input: &str) -> Result<String, ConvertError> {
    if input.is_empty() {
        return Ok(String::new());
    }

    let text = input.replace("\r\n", "\n").replace('\r', "\n");
    let mut stash = CodeStash::new();
    let text = stash.escape(&text);

    // 1. Fenced code, isolated as its own block so it is never wrapped.
    let text = FENCED_CODE.replace_all(&text, |caps: &Captures| {
        let language = caps.get(1).map_or("", |m| m.as_str());
        let interior = caps.get(2).map_or("", |m| m.as_str());
        let interior = interior.strip_suffix('\n').unwrap_or(interior);
        let class = if language.is_empty() {
            String::new()
        } else {
            format!(r#" class="language-{language}""#)
        };
        let placeholder = stash.hold(
            FragmentKind::Block,
            format!("<pre><code{class}>{interior}</code></pre>"),
        );
        format!("\n\n{placeholder}\n\n")
    });

    // 2. Inline code.
    let text = INLINE_CODE.replace_all(&text, |caps: &Captures| {
        stash.hold(FragmentKind::Inline, format!("<code>{}</code>", &caps[1]))
    });

    // 3. Headings.
    let mut text = text.into_owned();
    for (level, pattern) in HEADINGS.iter() {
        text = pattern
            .replace_all(&text, format!("<h{level}>$1</h{level}>").as_str())
            .into_owned();
    }

    // 4. Emphasis.
    let text = BOLD.replace_all(&text, "<strong>$1</strong>");
    let text = ITALIC.replace_all(&text, "<em>$1</em>");

    // 5. Images, then links.
    let text = IMAGE.replace_all(&text, |caps: &Captures| {
        format!(
            r#"<img src="{}" alt="{}">"#,
            escape_attr(&caps[2]),
            escape_attr(&caps[1])
        )
    });
    let text = LINK.replace_all(&text, |caps: &Captures| {
        format!(r#"<a href="{}">{}</a>"#, escape_attr(&caps[2]), &caps[1])
    });

    // 6. Blockquotes, 7. rules.
    let text = BLOCKQUOTE.replace_all(&text, "<blockquote>$1</blockquote>");
    let text = RULE.replace_all(&text, "<hr>");

    // 8. Lists.
    let text = group_lists(&text);

    // 9. Paragraphs.
    let blocks: Vec<String> = BLANK_LINES
        .split(&text)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(wrap_block)
        .collect();
    let text = blocks.join("\n\n");

    // 10. Collapse and trim, then put the code back.
    let text = BLANK_LINES.replace_all(&text, "\n");
    stash.restore(text.trim())
}

fn wrap_block(block: &str) -> String {
    if CodeStash::starts_with_block(block)
        || BLOCK_LEVEL_START.is_match(block)
        || is_complete_element(block)
    {
        block.to_string()
    } else {
        format!("<p>{block}</p>")
    }
}

/// True when the whole block is one element: it opens with a tag and the end
/// tag matching that opening one is the last thing in the block.
///
/// `<em>a</em> and <em>b</em>` starts and ends with the same tag name but is
/// two elements, so it is not complete.
fn is_complete_element(block: &str) -> bool {
    let mut tags = TAG.captures_iter(block);
    let Some(first) = tags.next() else {
        return false;
    };
    let starts_block = first.get(0).is_some_and(|m| m.start() == 0);
    if !starts_block || !first[1].is_empty() {
        return false;
    }

    let name = &first[2];
    let mut depth = 1usize;
    for caps in tags {
        if !caps[2].eq_ignore_ascii_case(name) {
            continue;
        }
        if caps[1].is_empty() {
            depth += 1;
            continue;
        }
        depth -= 1;
        if depth == 0 {
            return caps.get(0).is_some_and(|m| m.end() == block.len());
        }
    }
    false
}

fn escape_attr(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}
