//! Core token types for the layout pipeline
//!
//! The pipeline operates on tokens enriched with two pieces of metadata a
//! raw tokenizer does not provide: a 0-based column and a per-physical-line
//! id. Both are assigned once, during materialization, and never change.
//!
//! Line identity
//!
//!     Whether two tokens sit on the same physical line is decided by
//!     comparing their [LineId]s - a plain integer comparison. The column
//!     where a line's code starts lives in a side table ([LineTable])
//!     indexed by that id, recorded exactly once by the first code token of
//!     the line. Every token of a line shares one id, up to and including
//!     the end-of-line token that terminates it.

use serde::Serialize;

use crate::layout::config::LayoutConfig;

/// Identifier of one physical source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineId(pub(crate) usize);

/// Side table mapping each line to the column where its code starts.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LineTable {
    first_code_columns: Vec<Option<u32>>,
}

impl LineTable {
    pub fn new() -> Self {
        LineTable {
            first_code_columns: Vec::new(),
        }
    }

    /// Open a new physical line and return its id.
    pub fn start_line(&mut self) -> LineId {
        self.first_code_columns.push(None);
        LineId(self.first_code_columns.len() - 1)
    }

    /// Column of the first code token on the line, if any code was seen.
    pub fn first_code_column(&self, line: LineId) -> Option<u32> {
        self.first_code_columns.get(line.0).copied().flatten()
    }

    /// Record where code starts on a line. Set exactly once: calls after
    /// the first are ignored.
    pub fn record_code_column(&mut self, line: LineId, column: u32) {
        if let Some(slot) = self.first_code_columns.get_mut(line.0) {
            if slot.is_none() {
                *slot = Some(column);
            }
        }
    }

    /// Number of lines opened so far.
    pub fn len(&self) -> usize {
        self.first_code_columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first_code_columns.is_empty()
    }
}

/// A token enriched with layout metadata.
///
/// `kind` is `None` only for the end-of-stream sentinel appended by the
/// materializer. Virtual tokens are zero-width: `start == end`, both equal
/// to the start offset of their anchor token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutToken<K> {
    pub kind: Option<K>,
    pub start: usize,
    pub end: usize,
    /// 0-based column of the token's first character on its line.
    pub column: u32,
    pub line: LineId,
}

impl<K> LayoutToken<K> {
    /// Whether this is the end-of-stream sentinel.
    pub fn is_eof(&self) -> bool {
        self.kind.is_none()
    }

    /// Source width in bytes. Zero for virtual tokens and the sentinel.
    pub fn width(&self) -> usize {
        self.end - self.start
    }
}

impl<K: PartialEq> LayoutToken<K> {
    /// Whether this token carries code: a present kind outside the
    /// non-code set (whitespace, comments, end-of-line).
    pub fn is_code(&self, config: &LayoutConfig<K>) -> bool {
        match &self.kind {
            Some(kind) => !config.is_non_code(kind),
            None => false,
        }
    }

    /// Whether this token is the first code token of its physical line,
    /// sitting at the column where that line's code starts. Such tokens are
    /// the ones a layout block's structure is decided on.
    pub fn is_layout_line(&self, lines: &LineTable, config: &LayoutConfig<K>) -> bool {
        self.is_code(config) && lines.first_code_column(self.line) == Some(self.column)
    }
}
