//! Standalone preview document
//!
//! Every push regenerates a complete document: doctype, head with an embedded
//! static stylesheet, and the content as body. The stylesheet is compiled into
//! the binary so the surface renders the same whatever page opened it.

use super::PreviewOptions;
use crate::formats::structural::serializer::to_structural;
use crate::mode::Mode;

/// The preview stylesheet.
pub const PREVIEW_CSS: &str = include_str!("../../css/preview.css");

/// Build the full document for `content` in `mode`.
///
/// Lightweight content is converted to structural markup first; structural
/// content and the view arrangements are embedded verbatim. A failed
/// conversion falls back to the unconverted text.
pub fn render_document(content: &str, mode: Mode, options: &PreviewOptions) -> String {
    let body = body_markup(content, mode);
    wrap_in_document(&body, options)
}

fn body_markup(content: &str, mode: Mode) -> String {
    if mode != Mode::Lightweight {
        return content.to_string();
    }

    to_structural(content).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "preview conversion failed, showing raw content");
        content.to_string()
    })
}

fn wrap_in_document(body: &str, options: &PreviewOptions) -> String {
    let escaped_title = html_escape(&options.title);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="folio">
  <title>{escaped_title}</title>
  <style>
{PREVIEW_CSS}
  </style>
</head>
<body>
<main class="folio-preview">
{body}
</main>
</body>
</html>"#
    )
}

/// Escape HTML special characters
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
