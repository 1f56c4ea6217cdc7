//! The token-stream capability set and the base tokenizer.
//!
//! [`Scanner`] is the boundary the parser consumes: five pull-based
//! operations, no more. [`Tokenizer`] adapts the raw logos stream into
//! that shape, normalizing bare identifiers and raw strings into the
//! generic word kind and capturing lexical errors into an explicit field.

use std::sync::Arc;

use cask_ir::{LineMap, Pos, TokenKind};
use logos::Logos;

use crate::error::{ScanError, ScanErrorKind};
use crate::raw_token::RawToken;

/// A pull-based stream of positioned tokens.
///
/// A scanner starts positioned before its first token. [`next`] advances
/// and reports whether a token is available; once it returns `false` the
/// scanner has ended permanently, and [`err`] tells whether the end was an
/// error or ordinary exhaustion. The accessors report the current token
/// and are only meaningful after a successful [`next`].
///
/// [`next`]: Scanner::next
/// [`err`]: Scanner::err
pub trait Scanner {
    /// Advance to the next token, reporting whether one is available.
    fn next(&mut self) -> bool;

    /// Kind of the current token.
    fn kind(&self) -> TokenKind;

    /// Literal text of the current token.
    fn text(&self) -> &str;

    /// Position of the current token or error.
    fn pos(&self) -> Pos;

    /// The error that ended this stream, if any.
    fn err(&self) -> Option<&ScanError>;
}

impl<S: Scanner + ?Sized> Scanner for &mut S {
    fn next(&mut self) -> bool {
        (**self).next()
    }

    fn kind(&self) -> TokenKind {
        (**self).kind()
    }

    fn text(&self) -> &str {
        (**self).text()
    }

    fn pos(&self) -> Pos {
        (**self).pos()
    }

    fn err(&self) -> Option<&ScanError> {
        (**self).err()
    }
}

/// Base tokenizer: adapts the raw character tokenizer into a [`Scanner`].
///
/// Identifiers and raw strings are re-tagged as [`TokenKind::Word`]; the
/// language treats both as literal text downstream. A lexical error halts
/// the stream permanently. Reaching end of input ends the stream with no
/// error and `kind() == Eof`.
pub struct Tokenizer<'src> {
    lexer: logos::Lexer<'src, RawToken>,
    lines: LineMap,
    name: Arc<str>,
    kind: TokenKind,
    text: &'src str,
    pos: Pos,
    err: Option<ScanError>,
}

impl<'src> Tokenizer<'src> {
    /// Create a tokenizer over `source`, reporting positions under `name`.
    pub fn new(source: &'src str, name: impl Into<Arc<str>>) -> Self {
        let name = name.into();
        Tokenizer {
            lexer: RawToken::lexer(source),
            lines: LineMap::build(source),
            pos: Pos::new(Arc::clone(&name), 0, 1, 1),
            name,
            kind: TokenKind::Eof,
            text: "",
            err: None,
        }
    }

    fn pos_at(&self, offset: usize) -> Pos {
        let offset = u32::try_from(offset).unwrap_or(u32::MAX);
        let (line, column) = self.lines.line_col(self.lexer.source(), offset);
        Pos {
            name: Arc::clone(&self.name),
            offset,
            line,
            column,
        }
    }
}

impl Scanner for Tokenizer<'_> {
    fn next(&mut self) -> bool {
        if self.err.is_some() {
            return false;
        }
        let Some(result) = self.lexer.next() else {
            self.kind = TokenKind::Eof;
            self.text = "";
            self.pos = self.pos_at(self.lexer.source().len());
            return false;
        };
        self.pos = self.pos_at(self.lexer.span().start);
        match result {
            Ok(raw) => {
                let slice = self.lexer.slice();
                (self.kind, self.text) = convert(raw, slice);
                true
            }
            Err(()) => {
                let msg = describe_invalid(self.lexer.slice());
                self.err = Some(ScanError::new(ScanErrorKind::Lexical(msg), self.pos.clone()));
                false
            }
        }
    }

    fn kind(&self) -> TokenKind {
        self.kind
    }

    fn text(&self) -> &str {
        self.text
    }

    fn pos(&self) -> Pos {
        self.pos.clone()
    }

    fn err(&self) -> Option<&ScanError> {
        self.err.as_ref()
    }
}

/// Map a raw token into the closed kind set, with its exposed text.
fn convert(raw: RawToken, slice: &str) -> (TokenKind, &str) {
    match raw {
        RawToken::Ident => (TokenKind::Word, slice),
        // Strip the backticks: a word's text is always the literal value.
        RawToken::RawStr => (TokenKind::Word, &slice[1..slice.len() - 1]),
        RawToken::Str => (TokenKind::Str, slice),
        RawToken::Char => (TokenKind::Char, slice),
        RawToken::Int => (TokenKind::Int, slice),
        RawToken::Float => (TokenKind::Float, slice),
        RawToken::Punct(c) => (TokenKind::Punct(c), slice),
    }
}

/// Human-readable message for a slice the raw tokenizer rejected.
fn describe_invalid(slice: &str) -> String {
    match slice.chars().next() {
        Some('"') => "string literal not terminated".to_owned(),
        Some('\'') => "character literal not terminated".to_owned(),
        Some('`') => "raw string literal not terminated".to_owned(),
        Some(c) => format!("invalid character {c:?}"),
        None => "invalid input".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Helper: drain a scanner, collecting `(kind, text)` pairs.
    fn collect<S: Scanner>(mut scan: S) -> Vec<(TokenKind, String)> {
        let mut out = Vec::new();
        while scan.next() {
            out.push((scan.kind(), scan.text().to_owned()));
        }
        assert!(scan.err().is_none(), "unexpected error: {:?}", scan.err());
        out
    }

    #[test]
    fn idents_and_raw_strings_normalize_to_word() {
        let toks = collect(Tokenizer::new("host `raw text`", "t"));
        assert_eq!(
            toks,
            vec![
                (TokenKind::Word, "host".to_owned()),
                (TokenKind::Word, "raw text".to_owned()),
            ]
        );
    }

    #[test]
    fn quoted_string_text_keeps_quotes() {
        let toks = collect(Tokenizer::new(r#""hi""#, "t"));
        assert_eq!(toks, vec![(TokenKind::Str, r#""hi""#.to_owned())]);
    }

    #[test]
    fn kinds_across_the_set() {
        let toks = collect(Tokenizer::new("a \"s\" 42 3.5 'c' ;", "t"));
        let kinds: Vec<TokenKind> = toks.into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Word,
                TokenKind::Str,
                TokenKind::Int,
                TokenKind::Float,
                TokenKind::Char,
                TokenKind::Punct(';'),
            ]
        );
    }

    #[test]
    fn positions_are_line_and_column_aware() {
        let mut scan = Tokenizer::new("a\n  bb", "conf.cask");
        assert!(scan.next());
        let pos = scan.pos();
        assert_eq!((pos.line, pos.column, pos.offset), (1, 1, 0));
        assert!(scan.next());
        let pos = scan.pos();
        assert_eq!((pos.line, pos.column, pos.offset), (2, 3, 4));
        assert_eq!(pos.to_string(), "conf.cask:2:3");
    }

    #[test]
    fn positions_never_decrease() {
        let mut scan = Tokenizer::new("a { b\n c } d\n e ; f", "t");
        let mut last = 0;
        while scan.next() {
            let offset = scan.pos().offset;
            assert!(offset >= last, "position went backwards at {offset}");
            last = offset;
        }
    }

    #[test]
    fn eof_ends_without_error() {
        let mut scan = Tokenizer::new("a", "t");
        assert!(scan.next());
        assert!(!scan.next());
        assert_eq!(scan.kind(), TokenKind::Eof);
        assert!(scan.err().is_none());
        // Ended is terminal.
        assert!(!scan.next());
    }

    #[test]
    fn lexical_error_halts_permanently() {
        let mut scan = Tokenizer::new("a \"oops", "t");
        assert!(scan.next());
        assert!(!scan.next());
        let Some(err) = scan.err().cloned() else {
            panic!("expected a lexical error");
        };
        assert_eq!(
            err.kind,
            ScanErrorKind::Lexical("string literal not terminated".to_owned())
        );
        assert_eq!((err.pos.line, err.pos.column), (1, 3));
        // Still failed, same error.
        assert!(!scan.next());
        assert!(scan.err().is_some());
    }

    #[test]
    fn empty_source_ends_immediately() {
        let mut scan = Tokenizer::new("", "t");
        assert!(!scan.next());
        assert!(scan.err().is_none());
        assert_eq!(scan.kind(), TokenKind::Eof);
    }
}
