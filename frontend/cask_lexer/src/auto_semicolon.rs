//! Automatic statement-terminator insertion.
//!
//! [`AutoSemicolon`] wraps a token source and synthesizes `;` tokens so
//! the language can omit explicit terminators in the common cases:
//!
//! - at end of input, if the stream emitted anything and the last token
//!   was not already a terminator (fires at most once);
//! - before a closing bracket that ends a non-empty statement;
//! - when a token begins on a later line than the one before it, unless
//!   the previous token was a terminator or an opening bracket (a
//!   statement cannot be continued into from a fresh start, and an open
//!   bracket continues onto the next line).
//!
//! Insertion defers the real token: the synthesized terminator satisfies
//! the current pull, and the buffered token (still held by the parent) is
//! emitted on the next one. That is the only lookahead in the pipeline.

use cask_ir::{closing_bracket, is_closing_bracket, is_opening_bracket, Pos, TokenKind, TERMINATOR};

use crate::error::ScanError;
use crate::scanner::Scanner;

/// Decorator that inserts statement terminators into the parent's stream.
pub struct AutoSemicolon<S> {
    parent: S,
    /// Kind of the most recently emitted token; `Eof` before the first pull.
    kind: TokenKind,
    /// Position of the most recently emitted real token. Synthesized
    /// terminators report this position.
    pos: Pos,
    /// The current token is a synthesized terminator and the real one is
    /// still buffered in the parent.
    inserted: bool,
    end: bool,
}

impl<S: Scanner> AutoSemicolon<S> {
    /// Wrap `parent` in terminator insertion.
    pub fn new(parent: S) -> Self {
        AutoSemicolon {
            parent,
            kind: TokenKind::Eof,
            pos: Pos::default(),
            inserted: false,
            end: false,
        }
    }

    fn insert(&mut self) -> bool {
        self.kind = TokenKind::Punct(TERMINATOR);
        self.inserted = true;
        true
    }

    /// Whether a closing rune `close` warrants terminating the statement
    /// in progress. No insertion right after a terminator, at a fresh
    /// start, or when the closer directly follows its matching opener
    /// (an empty pair).
    fn closer_needs_terminator(&self, close: char) -> bool {
        match self.kind {
            TokenKind::Eof => false,
            k if k.is_terminator() => false,
            TokenKind::Punct(open) if closing_bracket(open) == Some(close) => false,
            _ => true,
        }
    }
}

impl<S: Scanner> Scanner for AutoSemicolon<S> {
    fn next(&mut self) -> bool {
        if self.end {
            return false;
        }
        if self.inserted {
            // The synthesized terminator satisfied the previous pull; the
            // buffered real token becomes current now.
            self.inserted = false;
            self.kind = self.parent.kind();
            self.pos = self.parent.pos();
            return true;
        }
        if !self.parent.next() {
            self.end = true;
            // Implicit terminator at EOF, unless nothing was emitted or
            // the last token already was one.
            if self.kind == TokenKind::Eof || self.kind.is_terminator() {
                return false;
            }
            return self.insert();
        }
        let new = self.parent.kind();
        if let TokenKind::Punct(c) = new {
            if is_closing_bracket(c) && self.closer_needs_terminator(c) {
                return self.insert();
            }
        }
        match self.kind {
            // Fresh statement: nothing before, or a terminator before.
            TokenKind::Eof => {}
            k if k.is_terminator() => {}
            // An opening bracket continues onto the next line.
            TokenKind::Punct(c) if is_opening_bracket(c) => {}
            _ => {
                if self.parent.pos().line > self.pos.line {
                    return self.insert();
                }
            }
        }
        self.kind = new;
        self.pos = self.parent.pos();
        true
    }

    fn kind(&self) -> TokenKind {
        if self.inserted {
            TokenKind::Punct(TERMINATOR)
        } else {
            self.parent.kind()
        }
    }

    fn text(&self) -> &str {
        if self.inserted {
            ";"
        } else {
            self.parent.text()
        }
    }

    fn pos(&self) -> Pos {
        if self.inserted {
            self.pos.clone()
        } else {
            self.parent.pos()
        }
    }

    fn err(&self) -> Option<&ScanError> {
        // A synthesized terminator is manufactured, not parsed; it never
        // carries an error.
        if self.inserted {
            None
        } else {
            self.parent.err()
        }
    }
}
