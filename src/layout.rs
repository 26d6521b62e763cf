//! Layout resynthesizer
//!
//! This module rewrites a flat, layout-unaware token stream into one that
//! carries explicit block structure, following the offside rule: a block's
//! extent is implied by the column at which its first item starts.
//!
//! Structure:
//!     The rewrite runs as a two-stage, in-memory pipeline over one complete
//! buffer per invocation. Nothing here suspends or does I/O; every stage is a
//! plain function over data already in memory.
//!
//! The pipeline consists of:
//! 1. Materialization ([materialize]) - the raw source is pulled to
//!    exhaustion into an indexed sequence of tokens enriched with a column
//!    counter and a per-line id, terminated by an end-of-stream sentinel.
//! 2. Layout resolution ([machine]) - a single pass over the materialized
//!    sequence inserts zero-width virtual open/separator/close tokens,
//!    consulting a stack of open block columns.
//!
//! The finished sequence is handed to the consumer through a read-only
//! cursor ([cursor]) whose interface is indistinguishable from a real token
//! stream: the virtual kinds look like ordinary brace/semicolon tokens.
//!
//! Malformed Input
//!
//!     Actively-edited source is routinely incomplete - a `where` with
//!     nothing after it, a dedent below every open block. None of that is an
//!     error here. The state machine abandons blocks that never materialize,
//!     the indent stack tolerates underflow, and end of input closes every
//!     block still open. The worst possible outcome is a stream that
//!     mis-structures the document, which the downstream parser reports as
//!     an ordinary syntax error.

pub mod config;
pub mod cursor;
pub mod indent_stack;
pub mod machine;
pub mod materialize;
pub mod source;
pub mod synthesize;
pub mod testing;
pub mod tokens;

pub use config::LayoutConfig;
pub use cursor::{LayoutCursor, LayoutError};
pub use indent_stack::{IndentStack, TOP_LEVEL_COLUMN};
pub use machine::resolve_layout;
pub use materialize::materialize;
pub use source::{RawTokenSource, SliceTokenSource};
pub use synthesize::virtual_token;
pub use tokens::{LayoutToken, LineId, LineTable};

/// Run the full pipeline: materialize a raw source, then resolve layout.
///
/// Each invocation starts from a clean indent stack and an empty token
/// sequence; nothing is shared across runs.
pub fn resolve<K: Clone + PartialEq>(
    source: &mut dyn RawTokenSource<K>,
    config: &LayoutConfig<K>,
) -> Vec<LayoutToken<K>> {
    let (tokens, lines) = materialize(source, config);
    resolve_layout(tokens, &lines, config)
}
