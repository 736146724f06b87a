//! Opaque placeholders for code fragments.
//!
//! Code converted early in the lightweight → structural pipeline must not be
//! rewritten by the later emphasis, heading, list or paragraph passes. Each
//! converted fragment is moved into a [`CodeStash`] and replaced by a short
//! placeholder built from private-use characters, which none of the later
//! patterns match. Once every pass has run, [`CodeStash::restore`] swaps the
//! fragments back in.
//!
//! Input that already carries the sentinel characters is escaped first with
//! [`CodeStash::escape`], so every placeholder left in the text was made by
//! the stash itself.

use crate::error::ConvertError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

const OPEN: char = '\u{E000}';
const CLOSE: char = '\u{E001}';

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x{E000}([BI])(\d+)\x{E001}").unwrap());

/// Whether a stashed fragment stands alone as a block or sits inside text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    Block,
    Inline,
}

impl FragmentKind {
    fn marker(&self) -> char {
        match self {
            FragmentKind::Block => 'B',
            FragmentKind::Inline => 'I',
        }
    }
}

#[derive(Debug, Default)]
pub struct CodeStash {
    fragments: Vec<String>,
}

impl CodeStash {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `fragment` and return the placeholder that stands in for it.
    pub fn hold(&mut self, kind: FragmentKind, fragment: String) -> String {
        let index = self.fragments.len();
        self.fragments.push(fragment);
        format!("{OPEN}{}{index}{CLOSE}", kind.marker())
    }

    /// Hold every sentinel character already present in `input` as a literal
    /// fragment of its own.
    pub fn escape<'a>(&mut self, input: &'a str) -> Cow<'a, str> {
        if !input.contains([OPEN, CLOSE]) {
            return Cow::Borrowed(input);
        }

        let mut out = String::with_capacity(input.len());
        for c in input.chars() {
            if c == OPEN || c == CLOSE {
                let placeholder = self.hold(FragmentKind::Inline, c.to_string());
                out.push_str(&placeholder);
            } else {
                out.push(c);
            }
        }
        Cow::Owned(out)
    }

    /// True when `text` begins with a block placeholder.
    pub fn starts_with_block(text: &str) -> bool {
        let mut chars = text.chars();
        chars.next() == Some(OPEN) && chars.next() == Some(FragmentKind::Block.marker())
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Replace every placeholder in `text` with its stored fragment.
    pub fn restore(&self, text: &str) -> Result<String, ConvertError> {
        if self.fragments.is_empty() {
            return Ok(text.to_string());
        }
        self.expand(text, self.fragments.len())
    }

    /// Placeholders inside a fragment (escaped sentinels inside code) always
    /// point at fragments held before it, so `limit` shrinks on every level.
    fn expand(&self, text: &str, limit: usize) -> Result<String, ConvertError> {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for caps in PLACEHOLDER.captures_iter(text) {
            let (Some(whole), Some(digits)) = (caps.get(0), caps.get(2)) else {
                continue;
            };
            let index: usize = digits
                .as_str()
                .parse()
                .map_err(|_| ConvertError::Placeholder(usize::MAX))?;
            let fragment = self
                .fragments
                .get(index)
                .filter(|_| index < limit)
                .ok_or(ConvertError::Placeholder(index))?;

            out.push_str(&text[last..whole.start()]);
            if fragment.contains(OPEN) {
                out.push_str(&self.expand(fragment, index)?);
            } else {
                out.push_str(fragment);
            }
            last = whole.end();
        }
        out.push_str(&text[last..]);

        Ok(out)
    }
}
