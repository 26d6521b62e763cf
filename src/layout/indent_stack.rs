//! Underflow-safe stack of open block columns
//!
//! One entry per currently-open implicit block, holding the column its
//! items start at. The stack is conceptually never empty: when no entry is
//! present, `peek` and `pop` yield the [TOP_LEVEL_COLUMN] sentinel instead
//! of failing. Actively-edited source closes more blocks than it opens all
//! the time; that must never panic.

/// Column of the implicit top-level block, below every real column.
pub const TOP_LEVEL_COLUMN: i32 = -1;

/// Stack of indentation columns for the open implicit blocks.
#[derive(Debug, Default, Clone)]
pub struct IndentStack {
    columns: Vec<i32>,
}

impl IndentStack {
    pub fn new() -> Self {
        IndentStack {
            columns: Vec::new(),
        }
    }

    pub fn push(&mut self, column: i32) {
        self.columns.push(column);
    }

    /// Column of the innermost open block; the top-level sentinel when no
    /// block is open.
    pub fn peek(&self) -> i32 {
        self.columns.last().copied().unwrap_or(TOP_LEVEL_COLUMN)
    }

    /// Close the innermost block, returning its column; the top-level
    /// sentinel when the stack has underflowed.
    pub fn pop(&mut self) -> i32 {
        self.columns.pop().unwrap_or(TOP_LEVEL_COLUMN)
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }
}
