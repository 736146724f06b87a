//! Lightweight (plain-text) dialect
//!
//! This module produces lightweight markup from a structural [`Node`] tree.
//! The tree is obtained from structural text through an injected
//! [`StructuralParser`], so the converter itself only ever sees trees and can
//! be tested with hand-built ones.
//!
//! # Element Mapping Table
//!
//! | Structural                | Lightweight                               | Notes                              |
//! |---------------------------|-------------------------------------------|------------------------------------|
//! | `<h1>` … `<h6>`           | `# ` … `###### `                          |                                    |
//! | `<p>`                     | text + blank line                         |                                    |
//! | `<strong>`, `<b>`         | `**text**`                                |                                    |
//! | `<em>`, `<i>`             | `*text*`                                  |                                    |
//! | `<code>`                  | `` `code` ``                              | Skipped inside `<pre>`             |
//! | `<pre>`                   | ```` ``` ```` fence                       | `language-x` class → info string   |
//! | `<blockquote>`            | `> text`                                  | Only the first line is prefixed    |
//! | `<ul>` / `<ol>` + `<li>`  | `- item` / `1. item`                      | Every ordered item is `1.`         |
//! | `<a href>`                | `[text](href)`                            |                                    |
//! | `<img>`                   | `![alt](src)`                             |                                    |
//! | `<br>`, `<hr>`            | newline, `---`                            |                                    |
//! | `<table>`                 | cells joined by ` | `, one row per line   | No header row or alignment         |
//! | containers, unknown tags  | children only                             | Content is never dropped           |
//!
//! # Lossy Conversions
//!
//! - Ordered lists are flattened to a literal `1.` marker for every item. The
//!   original numbering is not kept anywhere, so the reverse trip cannot
//!   restore it either.
//! - Tables are flattened to pipe-separated lines without a header separator,
//!   so they do not come back as tables.
//! - Attributes other than `href`, `src`, `alt` and the code language class
//!   are dropped.
//! - Unknown tags keep their content but lose the tag. This is deliberate:
//!   markup this converter does not know about degrades to its text instead of
//!   failing the whole conversion.

pub mod serializer;

use crate::converter::Converter;
use crate::error::ConvertError;
use crate::formats::structural::{Html5everParser, StructuralParser};
use crate::mode::Mode;
use crate::tree::Node;

/// Converter from structural markup text to the lightweight dialect.
#[derive(Debug, Clone, Default)]
pub struct StructuralToText<P = Html5everParser> {
    parser: P,
}

impl<P: StructuralParser> StructuralToText<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }

    /// Convert an already parsed tree.
    pub fn convert_tree(&self, root: &Node) -> Result<String, ConvertError> {
        serializer::serialize_tree(root)
    }
}

impl<P: StructuralParser> Converter for StructuralToText<P> {
    fn name(&self) -> &str {
        "structural-to-lightweight"
    }

    fn description(&self) -> &str {
        "Post-order walk of the structural tree emitting lightweight markup"
    }

    fn source(&self) -> Mode {
        Mode::Structural
    }

    fn target(&self) -> Mode {
        Mode::Lightweight
    }

    fn convert(&self, input: &str) -> Result<String, ConvertError> {
        let tree = self.parser.parse(input)?;
        self.convert_tree(&tree)
    }
}
