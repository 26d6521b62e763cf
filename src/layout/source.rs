//! Raw token source interface
//!
//! The resynthesizer does not tokenize anything itself - it consumes an
//! already-running tokenizer through the [RawTokenSource] trait, which
//! mirrors the single-step lexer interface IDE tooling exposes: current
//! kind, current offsets, advance, at-end. The opaque `state` accessor
//! exists only for host-tooling re-entrancy bookkeeping; it plays no part
//! in layout resolution.

use std::ops::Range;

/// Sequential, single-step source of raw tokens.
pub trait RawTokenSource<K> {
    /// Kind of the current token, or `None` once the source is exhausted.
    fn current_kind(&self) -> Option<&K>;

    /// Start offset of the current token; the buffer end once exhausted.
    fn current_start(&self) -> usize;

    /// End offset of the current token; the buffer end once exhausted.
    fn current_end(&self) -> usize;

    /// Step to the next token. A no-op once exhausted.
    fn advance(&mut self);

    fn is_at_end(&self) -> bool;

    /// Opaque lexing state reported to host tooling. Not used for layout.
    fn state(&self) -> u32 {
        0
    }
}

/// Adapter exposing a slice of spanned tokens - the shape a logos pass
/// produces - as a [RawTokenSource].
pub struct SliceTokenSource<'a, K> {
    tokens: &'a [(K, Range<usize>)],
    position: usize,
    buffer_end: usize,
}

impl<'a, K> SliceTokenSource<'a, K> {
    /// `buffer_end` is the byte length of the original buffer; it becomes
    /// the offset reported once the source is exhausted, and thereby the
    /// offset of the end-of-stream sentinel.
    pub fn new(tokens: &'a [(K, Range<usize>)], buffer_end: usize) -> Self {
        SliceTokenSource {
            tokens,
            position: 0,
            buffer_end,
        }
    }
}

impl<K> RawTokenSource<K> for SliceTokenSource<'_, K> {
    fn current_kind(&self) -> Option<&K> {
        self.tokens.get(self.position).map(|(kind, _)| kind)
    }

    fn current_start(&self) -> usize {
        self.tokens
            .get(self.position)
            .map(|(_, span)| span.start)
            .unwrap_or(self.buffer_end)
    }

    fn current_end(&self) -> usize {
        self.tokens
            .get(self.position)
            .map(|(_, span)| span.end)
            .unwrap_or(self.buffer_end)
    }

    fn advance(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::testing::mk_raw;
    use crate::minihs::Token;

    #[test]
    fn test_slice_source_walks_tokens_in_order() {
        let raw = vec![
            mk_raw(Token::Identifier, 0, 3),
            mk_raw(Token::Whitespace, 3, 4),
            mk_raw(Token::Equals, 4, 5),
        ];
        let mut source = SliceTokenSource::new(&raw, 5);

        assert_eq!(source.current_kind(), Some(&Token::Identifier));
        assert_eq!(source.current_start(), 0);
        source.advance();
        assert_eq!(source.current_kind(), Some(&Token::Whitespace));
        source.advance();
        assert_eq!(source.current_kind(), Some(&Token::Equals));
        assert!(!source.is_at_end());
        source.advance();
        assert!(source.is_at_end());
    }

    #[test]
    fn test_exhausted_source_reports_buffer_end() {
        let raw = vec![mk_raw(Token::Identifier, 0, 3)];
        let mut source = SliceTokenSource::new(&raw, 7);

        source.advance();
        assert!(source.is_at_end());
        assert_eq!(source.current_kind(), None);
        assert_eq!(source.current_start(), 7);
        assert_eq!(source.current_end(), 7);

        // Advancing past the end stays a no-op.
        source.advance();
        assert!(source.is_at_end());
    }

    #[test]
    fn test_empty_source() {
        let raw: Vec<(Token, std::ops::Range<usize>)> = vec![];
        let source = SliceTokenSource::new(&raw, 0);

        assert!(source.is_at_end());
        assert_eq!(source.current_kind(), None);
        assert_eq!(source.current_start(), 0);
        assert_eq!(source.state(), 0);
    }
}
