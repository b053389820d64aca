//! XML-like AST tag serialization
//!
//! Serializes AST nodes directly to an XML-like format.
//!
//! ## Format
//!
//! - Node type → tag name (kebab-case)
//! - Label → text content
//! - Children → nested tags (no wrapper)
//!
//! ## Example
//!
//! ```text
//! <document>
//!   <section># Introduction
//!     <paragraph>2 inline(s)
//!       <plain-text>Welcome to the guide</plain-text>
//!       <newline>↵</newline>
//!     </paragraph>
//!   </section>
//! </document>
//! ```

use crate::error::FormatError;
use crate::format::Format;
use hashmark_core::{Block, Document, Inline};

fn format_block(block: &Block, indent_level: usize) -> String {
    let mut output = String::new();
    let indent = "  ".repeat(indent_level);
    let tag = to_tag_name(block.node_type());

    output.push_str(&format!("{indent}<{tag}>"));
    output.push_str(&escape_xml(&block.display_label()));

    let inlines: &[Inline] = match block {
        Block::Paragraph(paragraph) => &paragraph.inlines,
        _ => &[],
    };
    let children = block.children();

    if inlines.is_empty() && children.is_empty() {
        output.push_str(&format!("</{tag}>\n"));
        return output;
    }

    output.push('\n');
    for inline in inlines {
        output.push_str(&format_inline(inline, indent_level + 1));
    }
    for child in children {
        output.push_str(&format_block(child, indent_level + 1));
    }
    output.push_str(&format!("{indent}</{tag}>\n"));
    output
}

fn format_inline(inline: &Inline, indent_level: usize) -> String {
    let indent = "  ".repeat(indent_level);
    let tag = to_tag_name(inline.node_type());
    format!(
        "{indent}<{tag}>{}</{tag}>\n",
        escape_xml(&inline.display_label())
    )
}

/// Convert a node type name to a tag name (e.g., "PlainText" → "plain-text")
fn to_tag_name(node_type: &str) -> String {
    let mut tag = String::new();
    for (i, c) in node_type.chars().enumerate() {
        if i > 0 && c.is_uppercase() {
            tag.push('-');
        }
        tag.extend(c.to_lowercase());
    }
    tag
}

/// Serialize a document to AST tag format
pub fn serialize_document(doc: &Document) -> String {
    let mut result = String::new();
    result.push_str("<document>\n");

    for child in &doc.children {
        result.push_str(&format_block(child, 1));
    }

    result.push_str("</document>");
    result
}

/// Escape XML special characters
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\"', "&quot;")
        .replace('\'', "&apos;")
}

/// Format implementation for XML-like tag format
pub struct TagFormat;

impl Format for TagFormat {
    fn name(&self) -> &str {
        "tag"
    }

    fn description(&self) -> &str {
        "XML-like tag format with hierarchical structure"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tag", "xml"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serialize_document(doc))
    }
}
