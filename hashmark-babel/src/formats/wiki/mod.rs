//! MediaWiki markup format
//!
//! Export only, no options. Headings use `=` runs on both sides, bold uses `'''`, and sections
//! contribute no markup of their own. No newline is added after a heading, so a heading's
//! text runs directly into the content that follows it.

use crate::error::FormatError;
use crate::format::Format;
use hashmark_core::{Block, Document, Inline, Title};

pub fn serialize_to_wiki(doc: &Document) -> String {
    let mut out = String::new();
    for block in &doc.children {
        write_block(&mut out, block);
    }
    out
}

fn write_block(out: &mut String, block: &Block) {
    match block {
        Block::Section(section) => {
            write_title(out, &section.title);
            for child in &section.children {
                write_block(out, child);
            }
        }
        Block::Title(title) => write_title(out, title),
        Block::Paragraph(paragraph) => {
            for inline in &paragraph.inlines {
                match inline {
                    Inline::PlainText(text) => out.push_str(text),
                    Inline::BoldText(text) => {
                        out.push_str("'''");
                        out.push_str(text);
                        out.push_str("'''");
                    }
                    Inline::Newline => out.push('\n'),
                }
            }
        }
    }
}

fn write_title(out: &mut String, title: &Title) {
    let marker = "=".repeat(title.level);
    out.push_str(&marker);
    out.push_str(&title.text);
    out.push_str(&marker);
}

/// Format implementation for MediaWiki markup
pub struct WikiFormat;

impl Format for WikiFormat {
    fn name(&self) -> &str {
        "wiki"
    }

    fn description(&self) -> &str {
        "MediaWiki markup"
    }

    fn file_extensions(&self) -> &[&str] {
        &["wiki", "mediawiki"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serialize_to_wiki(doc))
    }
}
