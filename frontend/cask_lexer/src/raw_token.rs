//! Raw character tokenizer, generated with logos.
//!
//! This enum is private to the crate: [`Tokenizer`](crate::Tokenizer) maps
//! its output into [`cask_ir::TokenKind`] at the boundary, so consumers
//! never see logos types. Whitespace and comments are skipped here; the
//! decorators upstream only ever see significant tokens and recover line
//! breaks from token positions.

use logos::{Lexer, Logos};

/// One raw token as recognized by the generated scanner.
///
/// Error conditions (unterminated literals, bytes outside the language's
/// character set) surface as the logos error token; the integration layer
/// turns them into positioned lexical errors.
#[derive(Logos, Clone, Copy, Debug, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip(r"//[^\n]*", allow_greedy = true))]
#[logos(skip r"/\*([^*]|\*+[^*/])*\*+/")]
pub(crate) enum RawToken {
    /// Bareword identifier.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    /// Quoted string; no unescaped newlines allowed.
    #[regex(r#""([^"\\\n]|\\[^\n])*""#)]
    Str,

    /// Backtick raw string; may span lines, no escape processing.
    #[regex(r"`[^`]*`")]
    RawStr,

    /// Character literal: one character or one escape sequence.
    #[regex(r"'([^'\\\n]|\\x[0-9a-fA-F][0-9a-fA-F]|\\u\{[0-9a-fA-F]+\}|\\[^\n])'")]
    Char,

    /// Integer literal, decimal or hex, with `_` separators.
    #[regex(r"[0-9][0-9_]*")]
    #[regex(r"0[xX][0-9a-fA-F][0-9a-fA-F_]*")]
    Int,

    /// Float literal with optional exponent.
    #[regex(r"[0-9][0-9_]*\.[0-9][0-9_]*([eE][+-]?[0-9]+)?")]
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9]+")]
    Float,

    /// Any single ASCII punctuation rune except the quote characters,
    /// which only appear inside (possibly malformed) literals.
    #[regex(r"[!#-&(-/:-@\[-\^{-~]", punct_rune)]
    Punct(char),
}

/// Extract the single rune of a punctuation token.
fn punct_rune(lex: &Lexer<'_, RawToken>) -> Option<char> {
    lex.slice().chars().next()
}
