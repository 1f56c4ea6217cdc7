//! Source positions and the line-offset table behind them.
//!
//! Positions are computed lazily from byte offsets: the lexer builds one
//! [`LineMap`] per source and asks it for `(line, column)` pairs as tokens
//! are produced. Lookup is a binary search over pre-computed line starts,
//! O(log L) instead of rescanning the source per token.

use std::fmt;
use std::sync::Arc;

/// A position in a named source.
///
/// `line` and `column` are 1-based; `column` counts characters (not bytes)
/// from the start of the line. `offset` is the byte offset from the start
/// of the source. Successive tokens from one stream report strictly
/// non-decreasing positions.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Pos {
    /// Name of the source (typically a file path; may be empty).
    pub name: Arc<str>,
    /// Byte offset from the start of the source.
    pub offset: u32,
    /// 1-based line number. 0 means "no position yet".
    pub line: u32,
    /// 1-based column in characters from the line start.
    pub column: u32,
}

impl Pos {
    /// Create a position from its parts.
    pub fn new(name: impl Into<Arc<str>>, offset: u32, line: u32, column: u32) -> Self {
        Pos {
            name: name.into(),
            offset,
            line,
            column,
        }
    }
}

impl Default for Pos {
    fn default() -> Self {
        Pos {
            name: Arc::from(""),
            offset: 0,
            line: 0,
            column: 0,
        }
    }
}

impl fmt::Display for Pos {
    /// Renders as `name:line:column`, or `line:column` for unnamed sources.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}:{}", self.line, self.column)
        } else {
            write!(f, "{}:{}:{}", self.name, self.line, self.column)
        }
    }
}

/// Pre-computed line offset table for efficient line/column lookup.
///
/// Built in one O(n) pass over the source; each lookup is a binary search
/// over the line starts.
///
/// # Example
///
/// ```
/// use cask_ir::LineMap;
///
/// let source = "line1\nline2\nline3";
/// let map = LineMap::build(source);
///
/// assert_eq!(map.line_col(source, 0), (1, 1));  // 'l' in line1
/// assert_eq!(map.line_col(source, 6), (2, 1));  // 'l' in line2
/// assert_eq!(map.line_col(source, 12), (3, 1)); // 'l' in line3
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineMap {
    /// Byte offset of each line start. `offsets[0]` is always 0.
    offsets: Vec<u32>,
}

impl LineMap {
    /// Scan `source` once and record the byte offset of every line start.
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        for (i, byte) in source.as_bytes().iter().enumerate() {
            if *byte == b'\n' {
                // The next line starts at the byte after the newline.
                offsets.push(u32::try_from(i + 1).unwrap_or(u32::MAX));
            }
        }
        LineMap { offsets }
    }

    /// 1-based line number containing `offset`.
    #[inline]
    pub fn line(&self, offset: u32) -> u32 {
        // Largest line start <= offset.
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(line_idx).unwrap_or(u32::MAX - 1) + 1
    }

    /// 1-based `(line, column)` for a byte offset.
    ///
    /// The column counts characters from the line start, so multi-byte
    /// UTF-8 sequences advance it by one.
    pub fn line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line(offset);
        let line_start = self
            .offsets
            .get((line - 1) as usize)
            .copied()
            .unwrap_or(0) as usize;
        let offset = (offset as usize).min(source.len());

        let col_chars = source[line_start..offset].chars().count();
        let col = u32::try_from(col_chars).unwrap_or(u32::MAX - 1) + 1;

        (line, col)
    }

    /// Number of lines in the source (at least 1, even when empty).
    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }
}
