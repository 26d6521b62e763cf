//! Cursor facade over the resolved token stream
//!
//! The parser consumes the finished sequence through a minimal current
//! token / advance interface; virtual kinds look exactly like real
//! delimiter tokens. The sequence is read-only once resolution completes.
//!
//! Re-entrancy
//!
//!     Host tooling restarts lexers mid-buffer from a saved state. This
//! component does not support that: the whole buffer is materialized and
//! resolved in one pass, so a restart is only honored at offset 0 with the
//! initial state. Anything else fails fast with a precondition error
//! instead of silently mis-lexing.

use std::fmt;

use crate::layout::tokens::LayoutToken;

/// The initial (and only supported) restart state.
pub const INITIAL_STATE: u32 = 0;

/// Errors from misuse of the cursor's re-entrancy contract.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Restart requested at a non-zero offset or non-initial state.
    UnsupportedRestart { offset: usize, state: u32 },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::UnsupportedRestart { offset, state } => write!(
                f,
                "layout cursor only restarts at offset 0 with the initial state \
                 (requested offset {}, state {})",
                offset, state
            ),
        }
    }
}

impl std::error::Error for LayoutError {}

/// Read-only cursor over a resolved token sequence.
#[derive(Debug, Clone)]
pub struct LayoutCursor<K> {
    tokens: Vec<LayoutToken<K>>,
    position: usize,
}

impl<K> LayoutCursor<K> {
    pub fn new(tokens: Vec<LayoutToken<K>>) -> Self {
        LayoutCursor {
            tokens,
            position: 0,
        }
    }

    /// Kind of the current token; `None` once at the end-of-stream
    /// sentinel.
    pub fn kind(&self) -> Option<&K> {
        self.tokens
            .get(self.position)
            .and_then(|token| token.kind.as_ref())
    }

    /// Start offset of the current token; the buffer end at the sentinel.
    pub fn start(&self) -> usize {
        self.tokens
            .get(self.position)
            .map(|token| token.start)
            .unwrap_or(0)
    }

    /// End offset of the current token; the buffer end at the sentinel.
    pub fn end(&self) -> usize {
        self.tokens
            .get(self.position)
            .map(|token| token.end)
            .unwrap_or(0)
    }

    /// Move to the next token. A no-op once the sentinel is reached.
    pub fn advance(&mut self) {
        match self.tokens.get(self.position) {
            Some(token) if !token.is_eof() => self.position += 1,
            _ => {}
        }
    }

    /// Opaque lexing state for host-tooling bookkeeping.
    pub fn state(&self) -> u32 {
        INITIAL_STATE
    }

    /// Restart iteration. Only offset 0 with the initial state is
    /// supported; everything else is a precondition violation.
    pub fn restart(&mut self, offset: usize, state: u32) -> Result<(), LayoutError> {
        if offset != 0 || state != INITIAL_STATE {
            return Err(LayoutError::UnsupportedRestart { offset, state });
        }
        self.position = 0;
        Ok(())
    }

    /// The full resolved sequence.
    pub fn tokens(&self) -> &[LayoutToken<K>] {
        &self.tokens
    }
}
