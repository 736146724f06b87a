//! Classification of structural tag names.
//!
//! Anything not listed here maps to [`Tag::Unknown`]. Unknown tags are passed
//! through (their children are kept, the tag itself is dropped) so that newer
//! or exotic markup degrades to its text instead of failing the conversion.

/// What a tag means to the converters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Heading(u8),
    Paragraph,
    Strong,
    Emphasis,
    Code,
    Preformatted,
    Blockquote,
    UnorderedList,
    OrderedList,
    ListItem,
    Link,
    Image,
    LineBreak,
    Rule,
    Table,
    TableSection,
    TableRow,
    TableCell,
    /// Grouping element with no markup of its own
    Container,
    Unknown,
}

impl Tag {
    pub fn from_name(name: &str) -> Self {
        match name {
            "h1" => Tag::Heading(1),
            "h2" => Tag::Heading(2),
            "h3" => Tag::Heading(3),
            "h4" => Tag::Heading(4),
            "h5" => Tag::Heading(5),
            "h6" => Tag::Heading(6),
            "p" => Tag::Paragraph,
            "strong" | "b" => Tag::Strong,
            "em" | "i" => Tag::Emphasis,
            "code" => Tag::Code,
            "pre" => Tag::Preformatted,
            "blockquote" => Tag::Blockquote,
            "ul" => Tag::UnorderedList,
            "ol" => Tag::OrderedList,
            "li" => Tag::ListItem,
            "a" => Tag::Link,
            "img" => Tag::Image,
            "br" => Tag::LineBreak,
            "hr" => Tag::Rule,
            "table" => Tag::Table,
            "thead" | "tbody" | "tfoot" => Tag::TableSection,
            "tr" => Tag::TableRow,
            "td" | "th" => Tag::TableCell,
            "div" | "span" | "section" | "article" | "header" | "footer" | "main" | "nav"
            | "aside" | "figure" | "body" | "html" => Tag::Container,
            _ => Tag::Unknown,
        }
    }

    /// Block elements. Whitespace-only text next to one of these is layout.
    pub fn is_block(&self) -> bool {
        matches!(
            self,
            Tag::Heading(_)
                | Tag::Paragraph
                | Tag::Preformatted
                | Tag::Blockquote
                | Tag::UnorderedList
                | Tag::OrderedList
                | Tag::ListItem
                | Tag::Rule
                | Tag::Table
                | Tag::TableSection
                | Tag::TableRow
        )
    }

    /// Elements whose direct whitespace-only text children are layout, not content.
    pub fn ignores_blank_text(&self) -> bool {
        matches!(
            self,
            Tag::UnorderedList | Tag::OrderedList | Tag::Table | Tag::TableSection | Tag::TableRow
        )
    }
}
