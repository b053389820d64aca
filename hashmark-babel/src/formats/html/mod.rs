//! HTML format implementation
//!
//! Export only. Hashmark documents map onto a small set of HTML elements:
//!
//! | Hashmark element | HTML                                         |
//! |------------------|----------------------------------------------|
//! | Document         | children, no wrapper                         |
//! | Section          | `<section>` + heading + children             |
//! | Title            | `<hN>text</hN>`                              |
//! | Paragraph        | `<p>` + inlines + `</p>`                     |
//! | PlainText        | text                                         |
//! | BoldText         | `<strong>text</strong>`                      |
//! | Newline          | `\n`                                         |
//!
//! A title with no body is emitted as a bare heading without a `<section>`.
//!
//! Text is written as-is. A document that contains markup therefore passes it through to the
//! output unchanged.
//!
//! # Options
//!
//! - `standalone`: `true` wraps the fragment in a minimal HTML5 document.
//! - `title`: the `<title>` of the standalone document (escaped).

mod serializer;

pub use serializer::{
    serialize_to_html, serialize_to_html_with_options, HtmlOptions, DEFAULT_TITLE,
};

use crate::error::FormatError;
use crate::format::{flag_option, Format};
use hashmark_core::Document;
use std::collections::HashMap;

/// Format implementation for HTML
#[derive(Debug, Clone, Default)]
pub struct HtmlFormat {
    options: HtmlOptions,
}

impl HtmlFormat {
    /// Create a new HTML format with the specified options
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }

    /// Create an HTML format that always emits a complete page
    pub fn standalone(title: impl Into<String>) -> Self {
        Self::new(HtmlOptions::standalone(title))
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML fragment, or a minimal HTML5 page with standalone=true"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serialize_to_html_with_options(doc, &self.options))
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let mut html_options = self.options.clone();
        if let Some(standalone) = flag_option(options, "standalone")? {
            html_options.standalone = standalone;
        }
        if let Some(title) = options.get("title") {
            html_options.title = title.clone();
        }
        if let Some(key) = options
            .keys()
            .find(|key| !matches!(key.as_str(), "standalone" | "title"))
        {
            return Err(FormatError::NotSupported(format!(
                "Format 'html' does not support option '{key}'"
            )));
        }

        Ok(serialize_to_html_with_options(doc, &html_options))
    }
}
