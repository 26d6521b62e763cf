//! Virtual token synthesizer
//!
//! Virtual tokens are zero-width: both offsets equal the start offset of
//! the real token they are anchored to, so original offsets survive the
//! rewrite untouched and the parser sees the delimiter exactly where the
//! triggering token begins.
//!
//! Insertion point
//!
//!     A block decision is made at the first code token of a line, but the
//! previous line may end in trailing whitespace or a comment. Splicing the
//! delimiter directly before the triggering token would attribute that
//! trailing material to the new block or item. The insertion-point rule
//! therefore walks backward from the candidate position to the nearest
//! preceding real code token, then forward to the first end-of-line token
//! after it, and splices just behind that end-of-line. When no such point
//! exists (same-line insertion, start of buffer), the candidate position is
//! used as-is.

use crate::layout::config::LayoutConfig;
use crate::layout::tokens::LayoutToken;

/// Build a zero-width token of a synthetic kind, anchored at an existing
/// token's start offset and inheriting its column and line.
pub fn virtual_token<K>(kind: K, anchor: &LayoutToken<K>) -> LayoutToken<K> {
    LayoutToken {
        kind: Some(kind),
        start: anchor.start,
        end: anchor.start,
        column: anchor.column,
        line: anchor.line,
    }
}

/// Resolve where inside the already-emitted output a virtual token should
/// land, given the candidate index the state machine decided at.
///
/// Previously-synthesized virtual tokens are ignored by the backward walk;
/// only real code tokens anchor the search.
pub fn insertion_index<K: PartialEq>(
    out: &[LayoutToken<K>],
    candidate: usize,
    config: &LayoutConfig<K>,
) -> usize {
    let candidate = candidate.min(out.len());

    // Backward to the nearest preceding real code token.
    let mut preceding_code = None;
    for index in (0..candidate).rev() {
        let token = &out[index];
        let is_real_code = match &token.kind {
            Some(kind) => !config.is_non_code(kind) && !config.is_virtual(kind),
            None => false,
        };
        if is_real_code {
            preceding_code = Some(index);
            break;
        }
    }
    let preceding_code = match preceding_code {
        Some(index) => index,
        None => return candidate,
    };

    // Forward to the first end-of-line after it; splice just behind it so
    // the line's trailing non-code stays with its own line.
    for (offset, token) in out[preceding_code + 1..candidate].iter().enumerate() {
        if let Some(kind) = &token.kind {
            if config.is_end_of_line(kind) {
                return preceding_code + 1 + offset + 1;
            }
        }
    }

    candidate
}
