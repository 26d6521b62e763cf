//! Construction-time configuration for layout resolution
//!
//! Everything the resynthesizer needs to know about the host language is
//! fixed here before a run starts: which kind terminates a line, which
//! synthetic kinds stand in for the implicit delimiters, which kinds are
//! not code, which keywords announce an implicit block, and which keyword
//! pair forms a `let`/`in` match. Nothing is re-derived at runtime.

/// Token-kind configuration consumed by the layout pipeline.
///
/// The kind sets are small (a handful of keywords), so plain vectors with
/// linear lookup are used rather than hash sets.
#[derive(Debug, Clone)]
pub struct LayoutConfig<K> {
    /// Kind that terminates a physical line.
    pub end_of_line: K,
    /// Virtual kind inserted where an implicit block opens.
    pub open: K,
    /// Virtual kind inserted between items of the same block.
    pub separator: K,
    /// Virtual kind inserted where an implicit block closes.
    pub close: K,
    /// Kinds that carry no code: whitespace and comments. The end-of-line
    /// kind is treated as non-code implicitly.
    pub non_code: Vec<K>,
    /// Keywords that announce an upcoming implicit block.
    pub layout_keywords: Vec<K>,
    /// The `let` keyword kind.
    pub let_keyword: K,
    /// The `in` keyword kind, closing a same-line `let` block.
    pub in_keyword: K,
}

impl<K: PartialEq> LayoutConfig<K> {
    /// Whether this kind carries no code (whitespace, comment, end of line).
    pub fn is_non_code(&self, kind: &K) -> bool {
        *kind == self.end_of_line || self.non_code.contains(kind)
    }

    /// Whether this kind opens an implicit block.
    pub fn is_layout_keyword(&self, kind: &K) -> bool {
        self.layout_keywords.contains(kind)
    }

    /// Whether this kind terminates a physical line.
    pub fn is_end_of_line(&self, kind: &K) -> bool {
        *kind == self.end_of_line
    }

    /// Whether this kind is one of the three synthesized delimiter kinds.
    pub fn is_virtual(&self, kind: &K) -> bool {
        *kind == self.open || *kind == self.separator || *kind == self.close
    }
}
