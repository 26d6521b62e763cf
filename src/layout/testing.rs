//! Test factories for creating spanned raw tokens succinctly

use std::ops::Range;

/// Canonical alias for spanned raw tokens used across tests.
pub type RawTokens<K> = Vec<(K, Range<usize>)>;

/// Make a single spanned raw token.
pub fn mk_raw<K>(kind: K, start: usize, end: usize) -> (K, Range<usize>) {
    (kind, start..end)
}

/// Make a vector of spanned raw tokens from a list of (kind, start, end).
pub fn mk_raws<K: Clone>(specs: &[(K, usize, usize)]) -> RawTokens<K> {
    specs
        .iter()
        .cloned()
        .map(|(kind, start, end)| mk_raw(kind, start, end))
        .collect()
}
