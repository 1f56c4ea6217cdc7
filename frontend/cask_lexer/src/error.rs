//! Positioned error model for the scanning pipeline.
//!
//! Every error is a [`ScanError`]: a [`ScanErrorKind`] annotated with the
//! [`Pos`] at which it was first detected. The position is attached exactly
//! once, at the detection site; decorators forward a parent's error
//! untouched, so the innermost position always survives. A `ScanErrorKind`
//! cannot contain another `ScanError`, which makes double-wrapping
//! unrepresentable rather than merely avoided.

use std::fmt;

use cask_ir::{Pos, TokenKind};
use thiserror::Error;

use crate::scanner::Scanner;

/// An error annotated with the position at which it was detected.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{kind} ({pos})")]
pub struct ScanError {
    /// What went wrong.
    pub kind: ScanErrorKind,
    /// Where it was detected.
    pub pos: Pos,
}

impl ScanError {
    /// Position `kind` at `pos`.
    pub fn new(kind: impl Into<ScanErrorKind>, pos: Pos) -> Self {
        ScanError {
            kind: kind.into(),
            pos,
        }
    }

    /// Unexpected-token error for the token a scanner is positioned on.
    pub fn unexpected<S: Scanner + ?Sized>(scan: &S) -> Self {
        ScanError::new(
            UnexpectedToken {
                kind: scan.kind(),
                text: scan.text().to_owned(),
            },
            scan.pos(),
        )
    }
}

/// What kind of scanning error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ScanErrorKind {
    /// Malformed input reported by the raw character tokenizer.
    #[error("{0}")]
    Lexical(String),

    /// Input ran out while a bounded sub-scan was still open.
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// A token of the wrong shape where a specific kind was required.
    #[error(transparent)]
    Unexpected(#[from] UnexpectedToken),

    /// Malformed escape sequence inside a quoted string.
    #[error(transparent)]
    Escape(#[from] EscapeError),
}

/// A required token kind did not appear.
///
/// Rendered kind-specifically so a consumer's message names what was
/// actually there: `unexpected integer 42` rather than a generic
/// complaint about token 42.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnexpectedToken {
    /// Kind of the offending token.
    pub kind: TokenKind,
    /// Literal text of the offending token.
    pub text: String,
}

impl fmt::Display for UnexpectedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Int => write!(f, "unexpected integer {}", self.text),
            TokenKind::Float => write!(f, "unexpected number {}", self.text),
            TokenKind::Char => write!(f, "unexpected character {}", self.text),
            TokenKind::Str => write!(f, "unexpected string {}", self.text),
            TokenKind::Word => write!(f, "unexpected token {:?}", self.text),
            TokenKind::Punct(c) => write!(f, "unexpected token {c}"),
            TokenKind::Eof => f.write_str("unexpected end of input"),
        }
    }
}

impl std::error::Error for UnexpectedToken {}

/// Malformed escape sequence in a quoted string literal.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum EscapeError {
    /// The token text does not carry surrounding quotes.
    #[error("string literal is not quoted")]
    NotQuoted,
    /// `\` followed by a rune that does not introduce an escape.
    #[error("unknown escape sequence `\\{0}`")]
    UnknownEscape(char),
    /// The literal ended in the middle of an escape sequence.
    #[error("escape sequence is truncated")]
    TruncatedEscape,
    /// `\xHH` with non-hex digits or a value above `0x7F`.
    #[error("invalid hex escape")]
    InvalidHexEscape,
    /// `\u{...}` that is empty, non-hex, or not a Unicode scalar value.
    #[error("invalid unicode escape")]
    InvalidUnicodeEscape,
}
