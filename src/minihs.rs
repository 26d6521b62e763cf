//! minihs - a miniature Haskell-style surface syntax
//!
//! The layout pipeline is language-agnostic; this module supplies the
//! concrete language it ships with: just enough Haskell-shaped syntax to
//! exercise every layout path - `let`/`where`/`do`/`of` blocks, same-line
//! `let ... in`, line comments, and nested indentation.
//!
//! Structure:
//!     Raw tokenization is a vanilla logos lexer over the token grammar in
//! [tokens]; no layout logic lives there. The [lexer] module wires that
//! stream through materialization and layout resolution and exposes the
//! canonical [LayoutConfig](crate::layout::LayoutConfig) for this syntax.

pub mod lexer;
pub mod tokens;

pub use lexer::{layout_config, lex, tokenize};
pub use tokens::Token;
