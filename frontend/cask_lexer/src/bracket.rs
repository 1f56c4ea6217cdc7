//! Bracket-delimited sub-scanning.
//!
//! A [`BracketScanner`] is a bounded view over a parent stream: created
//! while the parent sits on an already-consumed opening bracket, it yields
//! only the tokens inside the matching pair, tracking nesting depth for
//! that one bracket family. The closing token that brings the depth to
//! zero is consumed but not re-exposed; the caller infers closure from the
//! pull returning `false` with no error.
//!
//! The parent's cursor is borrowed for the scanner's lifetime; the caller
//! must drain the sub-scan before pulling from the parent again, or the
//! parent is left mid-construct.

use cask_ir::{Pos, TokenKind};

use crate::error::{ScanError, ScanErrorKind};
use crate::scanner::Scanner;

/// Sub-scanner over one bracket pair of the parent stream.
pub struct BracketScanner<S> {
    parent: S,
    open: char,
    close: char,
    depth: u32,
    err: Option<ScanError>,
}

impl<S: Scanner> BracketScanner<S> {
    /// Create a sub-scanner for the `open`/`close` family.
    ///
    /// The parent must be positioned on the already-consumed opening
    /// bracket; depth starts at 1.
    pub fn new(parent: S, open: char, close: char) -> Self {
        BracketScanner {
            parent,
            open,
            close,
            depth: 1,
            err: None,
        }
    }
}

impl<S: Scanner> Scanner for BracketScanner<S> {
    fn next(&mut self) -> bool {
        if self.depth == 0 {
            return false;
        }
        if !self.parent.next() {
            // A bracket opened but never closed is structural, but only
            // if the parent did not already fail for its own reason.
            if self.parent.err().is_none() {
                self.err = Some(ScanError::new(ScanErrorKind::UnexpectedEof, self.pos()));
            }
            return false;
        }
        match self.parent.kind() {
            TokenKind::Punct(c) if c == self.open => self.depth += 1,
            TokenKind::Punct(c) if c == self.close => {
                self.depth -= 1;
                if self.depth == 0 {
                    return false;
                }
            }
            _ => {}
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
