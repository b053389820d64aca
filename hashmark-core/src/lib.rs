//! # hashmark-core
//!
//! Tokenizer, parser and document tree for the hashmark markup.
//!
//!     hashmark is a deliberately small markup: `#` runs introduce headings, `**` pairs delimit
//!     bold spans, and everything else is text. This crate turns source text into an immutable
//!     document tree. Rendering that tree into other formats lives in hashmark-babel.
//!
//! Pipeline
//!
//!     The data flow is strictly linear:
//!
//!         source ──tokenize──▶ Vec<Token> ──parse──▶ Document
//!
//!     - [lexing]: a logos lexer plus a coalescing pass. Total, never fails.
//!     - [parsing]: recursive descent with explicit backtracking over a token cursor.
//!     - [ast]: the closed set of node variants produced by the parser.
//!
//! File Layout
//!
//!     .
//!     ├── ast.rs              # Document tree nodes
//!     ├── lexing.rs           # tokenize / tokenize_with_spans
//!     │   └── tokens.rs       # Token and the raw logos token set
//!     └── parsing.rs          # Grammar productions and entry points
//!         └── cursor.rs       # Token cursor with snapshot and rollback
//!
//! Error Model
//!
//!     Nothing here returns an error. Tokenizing is total, and a failed production is a normal
//!     "no match" used to pick the next alternative. The caller always receives a complete
//!     (possibly empty) [ast::Document].

pub mod ast;
pub mod lexing;
pub mod parsing;

pub use ast::{Block, Document, Inline, Paragraph, Section, Title};
pub use lexing::{tokenize, tokenize_with_spans, Token};
pub use parsing::{parse_document, parse_tokens};
