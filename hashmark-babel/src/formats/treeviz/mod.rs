//! Treeviz formatter for AST nodes
//!
//! Treeviz is a visual representation of the AST, one node per line, with box-drawing
//! connectors showing the nesting.
//!
//! So the format is :
//! <prefix><connector> <icon><space><label>
//!
//! Example:
//!
//! ```text
//! ⧉ Document (2 items)
//! ├─ § # Intro
//! │ ├─ ¶ 2 inline(s)
//! │ │ ├─ ◦ hello
//! │ │ └─ ↵ ↵
//! │ └─ ⊤ ## Empty
//! └─ ¶ 1 inline(s)
//!   └─ 𝐁 loud
//! ```
//!
//! Icons
//!     Document: ⧉
//!     Section: §
//!     Title: ⊤
//!     Paragraph: ¶
//!     PlainText: ◦
//!     BoldText: 𝐁
//!     Newline: ↵

use super::icons::get_icon;
use crate::error::FormatError;
use crate::format::Format;
use hashmark_core::{Block, Document, Inline};

fn connector(is_last: bool) -> &'static str {
    if is_last {
        "└─"
    } else {
        "├─"
    }
}

fn format_block(block: &Block, prefix: &str, is_last: bool) -> String {
    let mut output = format!(
        "{}{} {} {}\n",
        prefix,
        connector(is_last),
        get_icon(block.node_type()),
        block.display_label()
    );

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });

    match block {
        Block::Paragraph(paragraph) => {
            output.push_str(&format_inlines(&paragraph.inlines, &child_prefix));
        }
        _ => output.push_str(&format_children(block.children(), &child_prefix)),
    }
    output
}

fn format_inlines(inlines: &[Inline], prefix: &str) -> String {
    let mut output = String::new();
    for (i, inline) in inlines.iter().enumerate() {
        output.push_str(&format!(
            "{}{} {} {}\n",
            prefix,
            connector(i == inlines.len() - 1),
            get_icon(inline.node_type()),
            inline.display_label().escape_debug()
        ));
    }
    output
}

fn format_children(children: &[Block], prefix: &str) -> String {
    let mut output = String::new();
    let child_count = children.len();
    for (i, child) in children.iter().enumerate() {
        output.push_str(&format_block(child, prefix, i == child_count - 1));
    }
    output
}

pub fn to_treeviz_str(doc: &Document) -> String {
    let icon = get_icon("Document");
    let output = format!("{} Document ({} items)\n", icon, doc.children.len());
    output + &format_children(&doc.children, "")
}

/// Format implementation for treeviz format
pub struct TreevizFormat;

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Visual tree representation with box-drawing connectors and Unicode icons"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tree", "treeviz"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_treeviz_str(doc))
    }
}
