//! Plain text format
//!
//! The plain format is the hashmark source markup itself. Parsing runs the hashmark tokenizer
//! and parser; serialization echoes the tree back as normalized markup in which nesting depth
//! is shown by indentation.
//!
//! # Rendering rules
//!
//! | Node      | Output                                                               |
//! |-----------|----------------------------------------------------------------------|
//! | Document  | indent(depth) + children                                             |
//! | Section   | title at depth, children at depth + 1                                |
//! | Title     | `\n` + indent(depth) + `#`×level + text + `\n` + indent(depth + 1)   |
//! | Paragraph | inlines                                                              |
//! | PlainText | text                                                                 |
//! | BoldText  | `**` + text + `**`                                                   |
//! | Newline   | `\n` + indent(depth)                                                 |
//!
//! The indentation unit is a tab by default and can be replaced with the `indent-string`
//! option.

use crate::error::FormatError;
use crate::format::Format;
use hashmark_core::{Block, Document, Inline, Paragraph, Section, Title};
use std::collections::HashMap;

/// Options for plain text serialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainOptions {
    /// One level of indentation
    pub indent_string: String,
}

impl Default for PlainOptions {
    fn default() -> Self {
        Self {
            indent_string: "\t".to_string(),
        }
    }
}

impl PlainOptions {
    pub fn with_indent_string(mut self, indent_string: impl Into<String>) -> Self {
        self.indent_string = indent_string.into();
        self
    }

    /// Apply `--extra-*` style overrides on top of these options
    pub fn merged_with(&self, options: &HashMap<String, String>) -> Result<Self, FormatError> {
        let mut merged = self.clone();
        for (key, value) in options {
            match key.as_str() {
                "indent-string" => merged.indent_string = value.clone(),
                _ => {
                    return Err(FormatError::NotSupported(format!(
                        "Format 'plain' does not support option '{key}'"
                    )))
                }
            }
        }
        Ok(merged)
    }
}

/// Serialize a document with the default options
pub fn serialize_to_plain(doc: &Document) -> String {
    serialize_to_plain_with_options(doc, &PlainOptions::default())
}

pub fn serialize_to_plain_with_options(doc: &Document, options: &PlainOptions) -> String {
    let mut writer = PlainWriter {
        out: String::new(),
        unit: &options.indent_string,
    };
    writer.document(doc, 0);
    writer.out
}

struct PlainWriter<'a> {
    out: String,
    unit: &'a str,
}

impl PlainWriter<'_> {
    fn indent(&mut self, depth: usize) {
        for _ in 0..depth {
            self.out.push_str(self.unit);
        }
    }

    fn document(&mut self, doc: &Document, depth: usize) {
        self.indent(depth);
        for block in &doc.children {
            self.block(block, depth);
        }
    }

    fn block(&mut self, block: &Block, depth: usize) {
        match block {
            Block::Section(section) => self.section(section, depth),
            Block::Title(title) => self.title(title, depth),
            Block::Paragraph(paragraph) => self.paragraph(paragraph, depth),
        }
    }

    fn section(&mut self, section: &Section, depth: usize) {
        self.title(&section.title, depth);
        for child in &section.children {
            self.block(child, depth + 1);
        }
    }

    fn title(&mut self, title: &Title, depth: usize) {
        self.out.push('\n');
        self.indent(depth);
        self.out.push_str(&"#".repeat(title.level));
        self.out.push_str(&title.text);
        self.out.push('\n');
        self.indent(depth + 1);
    }

    fn paragraph(&mut self, paragraph: &Paragraph, depth: usize) {
        for inline in &paragraph.inlines {
            match inline {
                Inline::PlainText(text) => self.out.push_str(text),
                Inline::BoldText(text) => {
                    self.out.push_str("**");
                    self.out.push_str(text);
                    self.out.push_str("**");
                }
                Inline::Newline => {
                    self.out.push('\n');
                    self.indent(depth);
                }
            }
        }
    }
}

/// Format implementation for hashmark source text
#[derive(Debug, Clone, Default)]
pub struct PlainTextFormat {
    options: PlainOptions,
}

impl PlainTextFormat {
    pub fn new(options: PlainOptions) -> Self {
        Self { options }
    }
}

impl Format for PlainTextFormat {
    fn name(&self) -> &str {
        "plain"
    }

    fn description(&self) -> &str {
        "Hashmark source text, re-emitted with indentation by nesting depth"
    }

    fn file_extensions(&self) -> &[&str] {
        &["txt", "hm"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        Ok(hashmark_core::parse_document(source))
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serialize_to_plain_with_options(doc, &self.options))
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let options = self.options.merged_with(options)?;
        Ok(serialize_to_plain_with_options(doc, &options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashmark_core::parse_document;

    #[test]
    fn test_empty_document() {
        assert_eq!(serialize_to_plain(&Document::empty()), "");
    }

    #[test]
    fn test_paragraph_only() {
        let doc = parse_document("a **b** c\nd");
        assert_eq!(serialize_to_plain(&doc), "a **b** c\nd");
    }

    #[test]
    fn test_nested_sections_indent_by_depth() {
        let doc = parse_document("# A\nx\n## B\ny\n");
        assert_eq!(
            serialize_to_plain(&doc),
            "\n# A\n\tx\n\t\n\t## B\n\t\ty\n\t\t"
        );
    }

    #[test]
    fn test_bare_title() {
        let doc = parse_document("## T\n");
        assert_eq!(serialize_to_plain(&doc), "\n## T\n\t");
    }

    #[test]
    fn test_indent_string_option() {
        let doc = parse_document("# A\nx\n");
        let mut options = HashMap::new();
        options.insert("indent-string".to_string(), "  ".to_string());

        let output = PlainTextFormat::default()
            .serialize_with_options(&doc, &options)
            .unwrap();
        assert_eq!(output, "\n# A\n  x\n  ");
    }

    #[test]
    fn test_configured_indent_is_the_base_for_overrides() {
        let format = PlainTextFormat::new(PlainOptions::default().with_indent_string("."));
        let doc = parse_document("# A\nx\n");
        assert_eq!(format.serialize(&doc).unwrap(), "\n# A\n.x\n.");
    }

    #[test]
    fn test_unknown_option_is_rejected() {
        let mut options = HashMap::new();
        options.insert("standalone".to_string(), "true".to_string());

        let result = PlainTextFormat::default().serialize_with_options(&Document::empty(), &options);
        assert!(matches!(result, Err(FormatError::NotSupported(_))));
    }

    #[test]
    fn test_parse_uses_hashmark_grammar() {
        let doc = PlainTextFormat::default().parse("# A\n# B\n").unwrap();
        assert_eq!(doc.children.len(), 2);
        assert!(doc.children.iter().all(|block| block.as_title().is_some()));
    }
}
