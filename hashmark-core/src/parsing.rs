//! Recursive descent parser for the hashmark markup
//!
//! Grammar
//!
//!     document      := subitem(0)*
//!     subitem(min)  := section(min) | paragraph
//!     section(min)  := title subitem(title.level)*     only when title.level > min
//!     title         := Hash{n} Text Newline              n >= 1
//!     paragraph     := inline+
//!     inline        := PlainText | BoldText | Newline | StrayMarker
//!     PlainText     := Text
//!     BoldText      := Bold Text Bold
//!
//! Every production takes the shared [Cursor] and returns `Some(node)` with the cursor moved
//! past what it consumed, or `None` with the cursor untouched. Alternatives are tried in order
//! and the first match wins.
//!
//! Section Nesting
//!
//!     A section accepts its title only when the title's level is deeper than the enclosing
//!     level. A heading at the same or a shallower level fails the attempt, the cursor rolls
//!     back to before the `#` run, and the heading is left for an ancestor to pick up as a
//!     sibling. That single rule turns a flat run of headings into correctly nested sections.
//!
//!     A heading with no body is kept as a bare [Block::Title] rather than failing the section,
//!     so an empty trailing heading survives.
//!
//! Stray Markers
//!
//!     `Bold` that does not open a `Bold Text Bold` span is absorbed as the literal text `**`,
//!     and a `Hash` that cannot start a title is absorbed as `#`. These are the last inline
//!     alternatives, and a `Hash` is only absorbed when `title` fails at that position, so
//!     section gating never changes. With them every token ends up in exactly one leaf.
//!
//!     Whether a title starts somewhere inside a run of `#` depends only on what follows the
//!     run, so once the first `#` of a run is absorbed the rest of the run is absorbed without
//!     scanning it again. That keeps a long run of stray markers linear.

mod cursor;

pub use cursor::Cursor;

use crate::ast::{Block, Document, Inline, Paragraph, Section, Title};
use crate::lexing::{tokenize, Token};

/// Tokenize and parse a source string.
pub fn parse_document(source: &str) -> Document {
    let tokens = tokenize(source);
    parse_tokens(&tokens)
}

/// Parse a token sequence into a document.
pub fn parse_tokens(tokens: &[Token]) -> Document {
    let mut cursor = Cursor::new(tokens);
    let doc = document(&mut cursor);
    if !cursor.is_at_end() {
        // Only reachable if a production stops making progress; the stray marker rules cover
        // every token kind.
        log::debug!(
            "parse stopped at token {} of {}",
            cursor.position(),
            tokens.len()
        );
    }
    log::debug!(
        "parsed {} tokens into {} top-level block(s)",
        tokens.len(),
        doc.children.len()
    );
    doc
}

/// `document := subitem(0)*`
pub fn document(cursor: &mut Cursor) -> Document {
    let mut children = Vec::new();
    while let Some(block) = subitem(cursor, 0) {
        children.push(block);
    }
    if children.is_empty() {
        Document::empty()
    } else {
        Document::new(children)
    }
}

/// `subitem(min) := section(min) | paragraph`
pub fn subitem(cursor: &mut Cursor, min_level: usize) -> Option<Block> {
    section(cursor, min_level).or_else(|| paragraph(cursor).map(Block::Paragraph))
}

/// `section(min) := title subitem(title.level)*`, gated on `title.level > min`.
pub fn section(cursor: &mut Cursor, min_level: usize) -> Option<Block> {
    if inside_stray_run(cursor) {
        return None;
    }
    cursor.attempt(|cursor| {
        let title = title(cursor)?;
        if title.level <= min_level {
            return None;
        }

        let mut children = Vec::new();
        while let Some(child) = subitem(cursor, title.level) {
            children.push(child);
        }

        if children.is_empty() {
            Some(Block::Title(title))
        } else {
            Some(Block::Section(Section::new(title, children)))
        }
    })
}

/// `title := Hash{n} Text Newline`
pub fn title(cursor: &mut Cursor) -> Option<Title> {
    cursor.attempt(|cursor| {
        let mut level = 0;
        while cursor.eat(Token::is_hash).is_some() {
            level += 1;
        }
        if level == 0 {
            return None;
        }
        let text = cursor.eat(Token::is_text)?.text()?.to_string();
        cursor.eat(Token::is_newline)?;
        Some(Title::new(level, text))
    })
}

/// `paragraph := inline+`
pub fn paragraph(cursor: &mut Cursor) -> Option<Paragraph> {
    let mut inlines = Vec::new();
    while let Some(item) = inline(cursor) {
        inlines.push(item);
    }
    if inlines.is_empty() {
        None
    } else {
        Some(Paragraph::new(inlines))
    }
}

/// `inline := PlainText | BoldText | Newline | StrayMarker`
pub fn inline(cursor: &mut Cursor) -> Option<Inline> {
    plain_text(cursor)
        .or_else(|| bold_text(cursor))
        .or_else(|| newline(cursor))
        .or_else(|| stray_marker(cursor))
}

/// `PlainText := Text`
pub fn plain_text(cursor: &mut Cursor) -> Option<Inline> {
    let text = cursor.eat(Token::is_text)?.text()?;
    Some(Inline::plain(text))
}

/// `BoldText := Bold Text Bold`
pub fn bold_text(cursor: &mut Cursor) -> Option<Inline> {
    match (cursor.peek(), cursor.peek_at(1), cursor.peek_at(2)) {
        (Some(Token::Bold), Some(Token::Text(text)), Some(Token::Bold)) => {
            cursor.advance(3);
            Some(Inline::bold(text.as_str()))
        }
        _ => None,
    }
}

/// A line break inside paragraph content.
pub fn newline(cursor: &mut Cursor) -> Option<Inline> {
    cursor.eat(Token::is_newline).map(|_| Inline::Newline)
}

/// A marker that cannot play its grammatical role, absorbed as literal text.
pub fn stray_marker(cursor: &mut Cursor) -> Option<Inline> {
    match cursor.peek()? {
        Token::Bold => {
            cursor.advance(1);
            Some(Inline::plain("**"))
        }
        Token::Hash
            if !inside_stray_run(cursor) && cursor.lookahead(|cursor| title(cursor).is_some()) =>
        {
            None
        }
        Token::Hash => {
            cursor.advance(1);
            Some(Inline::plain("#"))
        }
        Token::Text(_) | Token::Newline => None,
    }
}

/// True at a `#` whose predecessor is also a `#`.
///
/// `title` consumes a whole run, so the cursor only stops inside one after the previous `#` was
/// absorbed as a stray marker, which means no title can start anywhere in this run.
fn inside_stray_run(cursor: &Cursor) -> bool {
    matches!(
        (cursor.previous(), cursor.peek()),
        (Some(Token::Hash), Some(Token::Hash))
    )
}
