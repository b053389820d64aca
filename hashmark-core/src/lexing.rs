//! Lexing for the hashmark markup
//!
//! The tokenizer is a total function: every input, including the empty string, produces a
//! token sequence and nothing is ever dropped.
//!
//!     - `#`           → Hash
//!     - `**`          → Bold
//!     - `\n`          → Newline
//!     - anything else → appended to the pending text run
//!
//! A lone `*` (for instance a trailing one, or `*b*`) is not a bold marker and becomes part of
//! the surrounding text. Text pending at end of input is flushed as a final `Text` token.
//!
//! logos does the classification; this module only merges adjacent text classes back into one
//! run, keeping the byte span of the merged run.

pub mod tokens;

pub use tokens::Token;

use logos::Logos;
use std::ops::Range;
use tokens::RawToken;

/// Tokenize a source string.
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_with_spans(source)
        .into_iter()
        .map(|(token, _)| token)
        .collect()
}

/// Tokenize a source string, keeping the byte span of every token.
///
/// Spans are contiguous and cover the whole source, in order.
pub fn tokenize_with_spans(source: &str) -> Vec<(Token, Range<usize>)> {
    let mut tokens = Vec::new();
    let mut pending: Option<Range<usize>> = None;
    let mut lexer = RawToken::lexer(source);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let marker = match result {
            Ok(RawToken::Hash) => Token::Hash,
            Ok(RawToken::Bold) => Token::Bold,
            Ok(RawToken::Newline) => Token::Newline,
            // Anything logos could not classify is treated as text too.
            Ok(RawToken::Star) | Ok(RawToken::Run) | Err(_) => {
                pending = Some(match pending {
                    Some(run) => run.start..span.end,
                    None => span,
                });
                continue;
            }
        };
        flush_text(source, &mut pending, &mut tokens);
        tokens.push((marker, span));
    }
    flush_text(source, &mut pending, &mut tokens);

    log::trace!("tokenized {} bytes into {} tokens", source.len(), tokens.len());
    tokens
}

fn flush_text(
    source: &str,
    pending: &mut Option<Range<usize>>,
    tokens: &mut Vec<(Token, Range<usize>)>,
) {
    if let Some(run) = pending.take() {
        if !run.is_empty() {
            tokens.push((Token::Text(source[run.clone()].to_string()), run));
        }
    }
}
