//! HTML serialization
//!
//! Produces the HTML fragment for a document and, optionally, a minimal HTML5 page around it.
//! Payload text is written verbatim; only the page title is escaped.

use hashmark_core::{Block, Document, Inline, Paragraph, Section, Title};

/// Options for HTML serialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Wrap the fragment in a complete HTML5 document
    pub standalone: bool,
    /// Content of `<title>` when standalone
    pub title: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            standalone: false,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

pub const DEFAULT_TITLE: &str = "Hashmark Document";

impl HtmlOptions {
    pub fn standalone(title: impl Into<String>) -> Self {
        Self {
            standalone: true,
            title: title.into(),
        }
    }
}

/// Serialize a document to an HTML fragment
pub fn serialize_to_html(doc: &Document) -> String {
    let mut out = String::new();
    for block in &doc.children {
        write_block(&mut out, block);
    }
    out
}

/// Serialize a document to HTML with full options
pub fn serialize_to_html_with_options(doc: &Document, options: &HtmlOptions) -> String {
    let fragment = serialize_to_html(doc);
    if options.standalone {
        wrap_in_document(&fragment, &options.title)
    } else {
        fragment
    }
}

fn write_block(out: &mut String, block: &Block) {
    match block {
        Block::Section(section) => write_section(out, section),
        Block::Title(title) => write_title(out, title),
        Block::Paragraph(paragraph) => write_paragraph(out, paragraph),
    }
}

fn write_section(out: &mut String, section: &Section) {
    out.push_str("<section>");
    write_title(out, &section.title);
    for child in &section.children {
        write_block(out, child);
    }
    out.push_str("</section>");
}

fn write_title(out: &mut String, title: &Title) {
    let level = title.level;
    out.push_str(&format!("<h{level}>{}</h{level}>", title.text));
}

fn write_paragraph(out: &mut String, paragraph: &Paragraph) {
    out.push_str("<p>");
    for inline in &paragraph.inlines {
        match inline {
            Inline::PlainText(text) => out.push_str(text),
            Inline::BoldText(text) => {
                out.push_str("<strong>");
                out.push_str(text);
                out.push_str("</strong>");
            }
            Inline::Newline => out.push('\n'),
        }
    }
    out.push_str("</p>");
}

/// Wrap the content in a complete HTML document
fn wrap_in_document(body_html: &str, title: &str) -> String {
    let escaped_title = html_escape(title);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="hashmark-babel">
  <title>{escaped_title}</title>
</head>
<body>
{body_html}
</body>
</html>
"#
    )
}

/// Escape HTML special characters in text
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
