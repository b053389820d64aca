//! The render boundary: source text in, rendered string out.
//!
//! [`render`] is total over the three output formats. [`render_named`] is the entry point for
//! callers holding a format name chosen by a user, where the choice may be missing or unknown.

use crate::error::FormatError;
use crate::formats::{html, plain, wiki};
use hashmark_core::parse_document;
use std::fmt;
use std::str::FromStr;

/// The three rendering targets of the markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    PlainText,
    Html,
    WikiMarkup,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::PlainText,
        OutputFormat::Html,
        OutputFormat::WikiMarkup,
    ];

    /// Name of the matching format in the [`FormatRegistry`](crate::FormatRegistry).
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::PlainText => "plain",
            OutputFormat::Html => "html",
            OutputFormat::WikiMarkup => "wiki",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plain" | "text" | "txt" => Ok(OutputFormat::PlainText),
            "html" => Ok(OutputFormat::Html),
            "wiki" | "mediawiki" => Ok(OutputFormat::WikiMarkup),
            _ => Err(FormatError::FormatNotFound(s.to_string())),
        }
    }
}

/// Tokenize, parse and render `source` in one step.
pub fn render(source: &str, format: OutputFormat) -> String {
    let doc = parse_document(source);
    log::debug!(
        "rendering {} block(s) as {}",
        doc.children.len(),
        format.name()
    );
    match format {
        OutputFormat::PlainText => plain::serialize_to_plain(&doc),
        OutputFormat::Html => html::serialize_to_html(&doc),
        OutputFormat::WikiMarkup => wiki::serialize_to_wiki(&doc),
    }
}

/// Render with a format picked by name. A missing choice is an error, not a default.
pub fn render_named(source: &str, format: Option<&str>) -> Result<String, FormatError> {
    let format: OutputFormat = format.ok_or(FormatError::NoFormatSelected)?.parse()?;
    Ok(render(source, format))
}
