//! Lexical layer for the cask configuration language.
//!
//! Scanning is a pipeline of composable [`Scanner`]s over a shared token
//! model:
//!
//! 1. [`Tokenizer`] turns source text into positioned tokens, folding
//!    identifiers and raw strings into a single word kind.
//! 2. [`AutoSemicolon`] wraps it and inserts statement terminators at
//!    line breaks, before closing brackets, and at end of input, so the
//!    grammar above never special-cases newlines.
//! 3. [`BracketScanner`] and [`StatementScanner`] are parser-driven
//!    sub-scans that bound one bracketed group or one statement of a
//!    parent stream.
//!
//! [`scan_string`] decodes the current token as a string value, and every
//! failure anywhere in the pipeline is a [`ScanError`] carrying the
//! position it was detected at.
//!
//! ```
//! use cask_lexer::{AutoSemicolon, Scanner, Tokenizer};
//!
//! let mut scan = AutoSemicolon::new(Tokenizer::new("port 8080\nhost local", "app.cask"));
//! let mut texts = Vec::new();
//! while scan.next() {
//!     texts.push(scan.text().to_owned());
//! }
//! assert_eq!(texts, ["port", "8080", ";", "host", "local", ";"]);
//! ```

mod auto_semicolon;
mod bracket;
mod error;
mod raw_token;
mod scanner;
mod statement;
mod unquote;

pub use auto_semicolon::AutoSemicolon;
pub use bracket::BracketScanner;
pub use error::{EscapeError, ScanError, ScanErrorKind, UnexpectedToken};
pub use scanner::{Scanner, Tokenizer};
pub use statement::StatementScanner;
pub use unquote::{scan_string, unquote};

pub use cask_ir::{Pos, TokenKind};
