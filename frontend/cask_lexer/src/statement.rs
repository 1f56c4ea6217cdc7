//! Terminator-delimited sub-scanning.
//!
//! A [`StatementScanner`] yields tokens up to, and excluding, the next
//! top-level statement terminator. "Top-level" is relative to a
//! caller-supplied set of opener and closer runes for the current grammar
//! context: a terminator inside an open construct belongs to that
//! construct and passes through, so a statement separator is never
//! confused with a structurally nested one.

use cask_ir::{Pos, TokenKind};

use crate::error::{ScanError, ScanErrorKind};
use crate::scanner::Scanner;

/// Sub-scanner over one statement of the parent stream.
pub struct StatementScanner<S> {
    parent: S,
    openers: Vec<char>,
    closers: Vec<char>,
    /// Nesting depth; may go negative on unbalanced input, which is the
    /// parser's problem, not this scanner's.
    depth: i32,
    err: Option<ScanError>,
}

impl<S: Scanner> StatementScanner<S> {
    /// Create a sub-scanner that ends at the next terminator outside any
    /// `openers`/`closers` nesting.
    pub fn new(parent: S, openers: &[char], closers: &[char]) -> Self {
        StatementScanner {
            parent,
            openers: openers.to_vec(),
            closers: closers.to_vec(),
            depth: 0,
            err: None,
        }
    }
}

impl<S: Scanner> Scanner for StatementScanner<S> {
    fn next(&mut self) -> bool {
        if !self.parent.next() {
            // A statement the input ended inside of; structural, unless
            // the parent already failed for its own reason.
            if self.parent.err().is_none() {
                self.err = Some(ScanError::new(ScanErrorKind::UnexpectedEof, self.pos()));
            }
            return false;
        }
        if let TokenKind::Punct(c) = self.parent.kind() {
            if self.parent.kind().is_terminator() && self.depth == 0 {
                // The delimiter, not content; end without exposing it.
                return false;
            }
            if self.openers.contains(&c) {
                self.depth += 1;
            }
            if self.closers.contains(&c) {
                self.depth -= 1;
            }
        }
        true
    }

    fn kind(&self) -> TokenKind {
        self.parent.kind()
    }

    fn text(&self) -> &str {
        self.parent.text()
    }

    fn pos(&self) -> Pos {
        self.parent.pos()
    }

    fn err(&self) -> Option<&ScanError> {
        self.err.as_ref().or_else(|| self.parent.err())
    }
}
