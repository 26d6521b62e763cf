//! # offside
//!
//! Layout (offside rule) resolution for indentation-sensitive token streams.
//!
//! Languages such as Haskell imply block structure through indentation
//! rather than explicit braces and semicolons. This crate takes the flat
//! token stream of a conventional, layout-unaware tokenizer and rewrites it,
//! inserting zero-width virtual tokens that mark the start, item separator,
//! and end of every implicit block. A grammar-driven parser can then consume
//! the rewritten stream as if the source had been written with explicit
//! delimiters.
//!
//! The [layout](crate::layout) module holds the resynthesizer itself;
//! [minihs](crate::minihs) is a small Haskell-style surface syntax bundled
//! as the reference front end that exercises every layout path.

pub mod layout;
pub mod minihs;
