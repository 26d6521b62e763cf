//! Layout state machine
//!
//! A single pass over the materialized sequence that decides, token by
//! token, where implicit blocks open, separate, and close. The pass builds
//! a fresh output vector rather than splicing into the input; original
//! tokens keep their offsets and relative order, virtual tokens are pushed
//! in between.
//!
//! States:
//!     NotYetStarted - nothing layout-related seen yet; tokens pass through
//!         until the first layout-creating keyword.
//!     WaitingForLayout - a layout keyword announced a block; the next code
//!         token's column decides whether the block actually opens.
//!     Normal - the common state; separators and closes are resolved
//!         against the indent stack at the first code token of every line.
//!
//! The WaitingForLayout -> Normal rewind deliberately re-dispatches the
//! current token without consuming it: a token that fails to open a block
//! still takes part in separator/close resolution for the enclosing block.
//!
//! Single-line `let ... in`
//!
//!     A `let` whose `in` arrives on the same physical line never sees a
//! dedent, so its block must be closed the moment the `in` shows up. The
//! detector is a stateless backward scan over the emitted output, bounded
//! by the line id - it is re-evaluated at every Normal-state step instead
//! of being carried as a flag.

use crate::layout::config::LayoutConfig;
use crate::layout::indent_stack::{IndentStack, TOP_LEVEL_COLUMN};
use crate::layout::synthesize::{insertion_index, virtual_token};
use crate::layout::tokens::{LayoutToken, LineId, LineTable};

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    NotYetStarted,
    WaitingForLayout,
    Normal,
}

/// Rewrite the materialized sequence, inserting virtual open/separator/
/// close tokens per the offside rule.
///
/// Total over arbitrary token streams: malformed indentation and
/// unterminated blocks produce a syntactically closed stream, never an
/// error. Every run starts from a clean stack seeded with the top-level
/// sentinel, which is the last entry closed at end of input.
pub fn resolve_layout<K: Clone + PartialEq>(
    tokens: Vec<LayoutToken<K>>,
    lines: &LineTable,
    config: &LayoutConfig<K>,
) -> Vec<LayoutToken<K>> {
    let mut out: Vec<LayoutToken<K>> = Vec::with_capacity(tokens.len() + 8);
    let mut stack = IndentStack::new();
    stack.push(TOP_LEVEL_COLUMN);
    let mut state = State::NotYetStarted;

    let mut index = 0;
    while index < tokens.len() {
        let token = &tokens[index];

        if token.is_eof() {
            close_remaining(&mut out, &mut stack, state, token, config);
            out.push(token.clone());
            index += 1;
            continue;
        }

        match state {
            State::NotYetStarted => {
                if is_layout_keyword(token, config) {
                    state = State::WaitingForLayout;
                }
                out.push(token.clone());
                index += 1;
            }
            State::WaitingForLayout => {
                if !token.is_code(config) {
                    out.push(token.clone());
                    index += 1;
                } else if (token.column as i32) > stack.peek() {
                    let at = insertion_index(&out, out.len(), config);
                    out.insert(at, virtual_token(config.open.clone(), token));
                    stack.push(token.column as i32);
                    // A layout keyword opening the block announces the next
                    // one immediately; anything else settles into Normal.
                    if !is_layout_keyword(token, config) {
                        state = State::Normal;
                    }
                    out.push(token.clone());
                    index += 1;
                } else {
                    // The anticipated block would be empty (nothing typed
                    // yet, or indentation at/below the enclosing block).
                    // Abandon it and re-dispatch this token unconsumed.
                    state = State::Normal;
                }
            }
            State::Normal => {
                let mut next_state = state;
                if is_layout_keyword(token, config) {
                    next_state = State::WaitingForLayout;
                }

                let mut pending: Vec<K> = Vec::new();
                if token.is_layout_line(lines, config) {
                    let column = token.column as i32;
                    while column < stack.peek() {
                        stack.pop();
                        pending.push(config.close.clone());
                    }
                    if column == stack.peek() {
                        pending.push(config.separator.clone());
                    }
                }
                if token.kind.as_ref() == Some(&config.in_keyword)
                    && single_line_let_in(&out, token.line, config)
                {
                    stack.pop();
                    pending.push(config.close.clone());
                }
                if !pending.is_empty() {
                    let base = insertion_index(&out, out.len(), config);
                    for (offset, kind) in pending.into_iter().enumerate() {
                        out.insert(base + offset, virtual_token(kind, token));
                    }
                }

                state = next_state;
                out.push(token.clone());
                index += 1;
            }
        }
    }

    out
}

/// End of input: close everything still open, in stack order, anchored at
/// the sentinel. A block still being announced (WaitingForLayout) opens and
/// closes on the spot so the stream stays balanced for incomplete edits.
///
/// These closes go at the very end of the sequence, directly ahead of the
/// sentinel, even when the buffer ends in trailing whitespace or comments.
/// The splice-behind-the-newline rule only applies mid-stream, where a
/// following block item exists for trailing material to be attributed to.
fn close_remaining<K: Clone + PartialEq>(
    out: &mut Vec<LayoutToken<K>>,
    stack: &mut IndentStack,
    state: State,
    sentinel: &LayoutToken<K>,
    config: &LayoutConfig<K>,
) {
    if state == State::WaitingForLayout {
        out.push(virtual_token(config.open.clone(), sentinel));
        out.push(virtual_token(config.close.clone(), sentinel));
    }
    while !stack.is_empty() {
        stack.pop();
        out.push(virtual_token(config.close.clone(), sentinel));
    }
}

/// Whether the matching `let` of an `in` token sits earlier on the same
/// physical line. Scans the emitted output backward; leaving the line (or
/// exhausting the sequence) without finding `let` means no match.
fn single_line_let_in<K: PartialEq>(
    out: &[LayoutToken<K>],
    line: LineId,
    config: &LayoutConfig<K>,
) -> bool {
    for token in out.iter().rev() {
        if token.kind.as_ref() == Some(&config.let_keyword) {
            return true;
        }
        if token.line != line {
            return false;
        }
    }
    false
}

fn is_layout_keyword<K: PartialEq>(token: &LayoutToken<K>, config: &LayoutConfig<K>) -> bool {
    match &token.kind {
        Some(kind) => config.is_layout_keyword(kind),
        None => false,
    }
}
