//! Token materializer
//!
//! Pulls a raw token source to exhaustion into an indexed sequence of
//! [LayoutToken]s, assigning each token the running column and the id of
//! the physical line it sits on. The first code token of every line records
//! its column in the [LineTable] - that recorded column is what the state
//! machine later compares dedents against.
//!
//! The materializer is total: it performs no validation and cannot fail on
//! anything the raw source can tokenize. The produced sequence always ends
//! with a single end-of-stream sentinel whose offsets equal the buffer end.

use crate::layout::config::LayoutConfig;
use crate::layout::source::RawTokenSource;
use crate::layout::tokens::{LayoutToken, LineTable};

/// Materialize the entire raw stream into enriched tokens plus the
/// per-line code-column table.
///
/// Column bookkeeping: the running column starts at 0, advances by each
/// consumed token's width, and resets to 0 immediately after an end-of-line
/// token is consumed. The end-of-line token itself still belongs to the
/// line it terminates; the following token starts the next line.
pub fn materialize<K: Clone + PartialEq>(
    source: &mut dyn RawTokenSource<K>,
    config: &LayoutConfig<K>,
) -> (Vec<LayoutToken<K>>, LineTable) {
    let mut tokens = Vec::new();
    let mut lines = LineTable::new();
    let mut line = lines.start_line();
    let mut column: u32 = 0;

    while !source.is_at_end() {
        let kind = match source.current_kind() {
            Some(kind) => kind.clone(),
            None => break,
        };
        let start = source.current_start();
        let end = source.current_end();

        let token = LayoutToken {
            kind: Some(kind.clone()),
            start,
            end,
            column,
            line,
        };
        if token.is_code(config) {
            lines.record_code_column(line, column);
        }
        tokens.push(token);

        if config.is_end_of_line(&kind) {
            column = 0;
            line = lines.start_line();
        } else {
            column += (end - start) as u32;
        }
        source.advance();
    }

    // End-of-stream sentinel at the buffer end.
    tokens.push(LayoutToken {
        kind: None,
        start: source.current_start(),
        end: source.current_end(),
        column,
        line,
    });

    (tokens, lines)
}
