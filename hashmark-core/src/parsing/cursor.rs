//! Token cursor with snapshot and rollback
//!
//! The cursor is the only mutable state of a parse. It is created by the parse entry point,
//! lent by `&mut` down the recursive productions, and dropped when the parse returns, so it is
//! never aliased outside a single parse invocation.
//!
//! Backtracking contract: a production that fails leaves the position exactly where it found
//! it. Productions get that for free by running inside [Cursor::attempt].

use crate::lexing::Token;

#[derive(Debug)]
pub struct Cursor<'t> {
    tokens: &'t [Token],
    position: usize,
}

impl<'t> Cursor<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// The token under the cursor, or `None` past the end.
    pub fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.position)
    }

    /// The token just behind the cursor, or `None` at the start.
    pub fn previous(&self) -> Option<&'t Token> {
        self.position
            .checked_sub(1)
            .and_then(|index| self.tokens.get(index))
    }

    /// The token `offset` places ahead of the cursor. Bounds checked.
    pub fn peek_at(&self, offset: usize) -> Option<&'t Token> {
        self.position
            .checked_add(offset)
            .and_then(|index| self.tokens.get(index))
    }

    /// Move past `count` tokens, never beyond the end.
    pub fn advance(&mut self, count: usize) {
        self.position = (self.position + count).min(self.tokens.len());
    }

    /// Consume the current token if it satisfies `predicate`.
    pub fn eat(&mut self, predicate: impl FnOnce(&Token) -> bool) -> Option<&'t Token> {
        let token = self.peek().filter(|token| predicate(token))?;
        self.advance(1);
        Some(token)
    }

    /// Run `production`, restoring the position if it yields nothing.
    pub fn attempt<T>(&mut self, production: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let snapshot = self.position;
        let result = production(self);
        if result.is_none() && self.position != snapshot {
            log::trace!("backtrack {} -> {}", self.position, snapshot);
            self.position = snapshot;
        }
        result
    }

    /// Run `probe` and restore the position whatever it returns.
    pub fn lookahead<T>(&mut self, probe: impl FnOnce(&mut Self) -> T) -> T {
        let snapshot = self.position;
        let result = probe(self);
        self.position = snapshot;
        result
    }
}
