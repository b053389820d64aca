//! Token definitions for the hashmark markup
//!
//! Two layers live here. [RawToken] is the logos-derived token set, which classifies every
//! input byte run without any memory of its neighbours. [Token] is what the parser consumes:
//! adjacent text runs (including lone `*` characters) are merged into one `Text` token that
//! carries the run as its payload.

use logos::Logos;
use serde::Serialize;
use std::fmt;

/// Raw lexical classes recognised by logos.
///
/// `**` wins over `*` by longest match, so `***` lexes as `Bold` followed by `Star`.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) enum RawToken {
    #[token("#")]
    Hash,

    #[token("**")]
    Bold,

    #[token("\n")]
    Newline,

    // A single asterisk is ordinary text; it only exists as a class so that `**` can be
    // distinguished from it.
    #[token("*")]
    Star,

    #[regex(r"[^#*\n]+")]
    Run,
}

/// A token of the hashmark markup.
///
/// Only `Text` carries a payload: the accumulated run of ordinary characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text")]
pub enum Token {
    /// A single `#` heading marker
    Hash,
    /// A run of ordinary characters
    Text(String),
    /// A `**` bold delimiter
    Bold,
    /// A line break
    Newline,
}

impl Token {
    pub fn is_text(&self) -> bool {
        matches!(self, Token::Text(_))
    }

    pub fn is_hash(&self) -> bool {
        matches!(self, Token::Hash)
    }

    pub fn is_newline(&self) -> bool {
        matches!(self, Token::Newline)
    }

    /// The text payload, if this is a `Text` token.
    pub fn text(&self) -> Option<&str> {
        match self {
            Token::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Stable kind name, used by the inspection transforms.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Token::Hash => "Hash",
            Token::Text(_) => "Text",
            Token::Bold => "Bold",
            Token::Newline => "Newline",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Text(text) => write!(f, "Text({text:?})"),
            other => f.write_str(other.kind_name()),
        }
    }
}
