//! String decoding for scanner output.
//!
//! [`scan_string`] turns the current token of a scanner into the string
//! value it denotes: bare words verbatim, quoted strings with their
//! escapes resolved. [`unquote`] is the underlying decoder over a raw
//! quoted slice.

use crate::error::{EscapeError, ScanError};
use crate::scanner::Scanner;

/// Decode the scanner's current token as a string value.
///
/// Word tokens (identifiers and raw strings, whose backticks the
/// tokenizer already stripped) are returned verbatim. Quoted string
/// tokens are unquoted, with any escape failure reported at the token's
/// position. Anything else is an unexpected-token error.
///
/// # Errors
///
/// Returns a positioned error for a malformed escape or a token of the
/// wrong kind.
pub fn scan_string<S: Scanner + ?Sized>(scan: &S) -> Result<String, ScanError> {
    match scan.kind() {
        cask_ir::TokenKind::Word => Ok(scan.text().to_owned()),
        cask_ir::TokenKind::Str => {
            unquote(scan.text()).map_err(|e| ScanError::new(e, scan.pos()))
        }
        _ => Err(ScanError::unexpected(scan)),
    }
}

/// Decode a double-quoted string literal, resolving escape sequences.
///
/// # Errors
///
/// Returns [`EscapeError::NotQuoted`] when the input is not wrapped in
/// double quotes, and the matching variant for each malformed escape.
pub fn unquote(quoted: &str) -> Result<String, EscapeError> {
    let inner = quoted
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .ok_or(EscapeError::NotQuoted)?;

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let esc = chars.next().ok_or(EscapeError::TruncatedEscape)?;
        match esc {
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            '\\' => out.push('\\'),
            '"' => out.push('"'),
            '\'' => out.push('\''),
            '0' => out.push('\0'),
            'x' => {
                let hi = hex_digit(chars.next().ok_or(EscapeError::TruncatedEscape)?)
                    .ok_or(EscapeError::InvalidHexEscape)?;
                let lo = hex_digit(chars.next().ok_or(EscapeError::TruncatedEscape)?)
                    .ok_or(EscapeError::InvalidHexEscape)?;
                let byte = hi * 16 + lo;
                if byte > 0x7F {
                    return Err(EscapeError::InvalidHexEscape);
                }
                out.push(char::from_u32(byte).ok_or(EscapeError::InvalidHexEscape)?);
            }
            'u' => {
                if chars.next() != Some('{') {
                    return Err(EscapeError::InvalidUnicodeEscape);
                }
                let mut value: u32 = 0;
                let mut digits = 0;
                loop {
                    let d = chars.next().ok_or(EscapeError::TruncatedEscape)?;
                    if d == '}' {
                        break;
                    }
                    let d = hex_digit(d).ok_or(EscapeError::InvalidUnicodeEscape)?;
                    value = value
                        .checked_mul(16)
                        .and_then(|v| v.checked_add(d))
                        .ok_or(EscapeError::InvalidUnicodeEscape)?;
                    digits += 1;
                }
                if digits == 0 {
                    return Err(EscapeError::InvalidUnicodeEscape);
                }
                out.push(char::from_u32(value).ok_or(EscapeError::InvalidUnicodeEscape)?);
            }
            other => return Err(EscapeError::UnknownEscape(other)),
        }
    }
    Ok(out)
}

fn hex_digit(c: char) -> Option<u32> {
    c.to_digit(16)
}
