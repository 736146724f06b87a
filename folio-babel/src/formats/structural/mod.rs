//! Structural (tag-based) dialect
//!
//! This module covers both directions that touch the structural dialect:
//!
//! - [`parser`]: structural markup text → [`Node`] tree, behind the
//!   [`StructuralParser`] trait so converters can be driven by any parser (or
//!   by hand-built trees in tests).
//! - [`serializer`]: lightweight text → structural markup text, exposed as the
//!   [`TextToStructural`] converter.
//!
//! # Library Choice
//!
//! The default parser is `html5ever` feeding a `markup5ever_rcdom` tree:
//! - Browser-grade HTML5 parsing from the Servo project
//! - Handles malformed and fragmentary markup the way a browser would
//! - The rcdom tree is walked once and copied into our own [`Node`] type, so
//!   nothing downstream depends on the DOM crate
//!
//! The reverse direction does not build a DOM at all: its output is text meant
//! for re-parsing by whatever renders the structural dialect.
//!
//! # Element Mapping Table
//!
//! | Lightweight             | Structural                                   |
//! |-------------------------|----------------------------------------------|
//! | ```` ```lang ```` fence | `<pre><code class="language-lang">…</code></pre>` |
//! | `` `code` ``            | `<code>code</code>`                          |
//! | `# ` … `###### `        | `<h1>` … `<h6>`                              |
//! | `**bold**`              | `<strong>bold</strong>`                      |
//! | `*italic*`              | `<em>italic</em>`                            |
//! | `![alt](src)`           | `<img src="src" alt="alt">`                  |
//! | `[text](href)`          | `<a href="href">text</a>`                    |
//! | `> quote`               | `<blockquote>quote</blockquote>`             |
//! | `---`                   | `<hr>`                                       |
//! | `- item` / `1. item`    | `<ul>`/`<ol>` + `<li>item</li>`              |
//! | other text blocks       | `<p>…</p>`                                   |
//!
//! # Lossy Conversions
//!
//! - Text is not entity-escaped; it is passed through as written
//! - Multi-line blockquotes become one `<blockquote>` per line
//! - Nested lists, tables and reference-style links are not recognized

pub mod parser;
pub mod serializer;

use crate::converter::Converter;
use crate::error::ConvertError;
use crate::mode::Mode;
use crate::tree::Node;

/// Capability to turn structural markup text into a node tree.
pub trait StructuralParser {
    fn parse(&self, markup: &str) -> Result<Node, ConvertError>;
}

/// The default [`StructuralParser`], backed by html5ever.
#[derive(Debug, Clone, Copy, Default)]
pub struct Html5everParser;

impl StructuralParser for Html5everParser {
    fn parse(&self, markup: &str) -> Result<Node, ConvertError> {
        parser::parse_to_tree(markup)
    }
}

/// Converter from the lightweight dialect to structural markup text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextToStructural;

impl Converter for TextToStructural {
    fn name(&self) -> &str {
        "lightweight-to-structural"
    }

    fn description(&self) -> &str {
        "Line-based rewrite of lightweight markup into structural tags"
    }

    fn source(&self) -> Mode {
        Mode::Lightweight
    }

    fn target(&self) -> Mode {
        Mode::Structural
    }

    fn convert(&self, input: &str) -> Result<String, ConvertError> {
        serializer::to_structural(input)
    }
}
