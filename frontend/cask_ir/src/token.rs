//! The closed token-kind enumeration owned by this layer.
//!
//! The low-level tokenizer's raw output is mapped into [`TokenKind`] at the
//! boundary, so nothing downstream depends on another library's token
//! constants. Bare identifiers and raw strings are both tagged [`Word`]:
//! the language treats them identically, so no consumer has to
//! special-case identifiers.
//!
//! [`Word`]: TokenKind::Word

use std::fmt;

/// The statement terminator rune.
pub const TERMINATOR: char = ';';

/// Kind of a lexed token.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// Bareword identifier or raw string; the text is the literal value.
    Word,
    /// Quoted string; the text still carries the surrounding quotes.
    Str,
    /// Integer literal (decimal or hex).
    Int,
    /// Float literal.
    Float,
    /// Character literal; the text still carries the surrounding quotes.
    Char,
    /// Single-rune punctuation, including brackets and the terminator.
    Punct(char),
    /// End of the token stream.
    Eof,
}

impl TokenKind {
    /// `true` if this is punctuation carrying exactly the rune `c`.
    #[inline]
    pub fn is_punct(self, c: char) -> bool {
        self == TokenKind::Punct(c)
    }

    /// `true` if this is the statement terminator.
    #[inline]
    pub fn is_terminator(self) -> bool {
        self.is_punct(TERMINATOR)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Word => f.write_str("word"),
            TokenKind::Str => f.write_str("string"),
            TokenKind::Int => f.write_str("integer"),
            TokenKind::Float => f.write_str("number"),
            TokenKind::Char => f.write_str("character"),
            TokenKind::Punct(c) => write!(f, "`{c}`"),
            TokenKind::Eof => f.write_str("end of input"),
        }
    }
}

/// `true` for the opening rune of any bracket family.
#[inline]
pub fn is_opening_bracket(c: char) -> bool {
    matches!(c, '(' | '[' | '{')
}

/// `true` for the closing rune of any bracket family.
#[inline]
pub fn is_closing_bracket(c: char) -> bool {
    matches!(c, ')' | ']' | '}')
}

/// The closing rune matching an opening bracket, if `open` is one.
#[inline]
pub fn closing_bracket(open: char) -> Option<char> {
    match open {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        _ => None,
    }
}
