//! Positions and token kinds for the Cask frontend.
//!
//! This crate is the shared vocabulary between the lexer and its consumers:
//! the [`Pos`] source position, the [`LineMap`] line-offset table used to
//! compute it, and the closed [`TokenKind`] enumeration. It has no
//! dependencies so that external tools can use it without pulling in the
//! rest of the frontend.

mod pos;
mod token;

pub use pos::{LineMap, Pos};
pub use token::{closing_bracket, is_closing_bracket, is_opening_bracket, TokenKind, TERMINATOR};
