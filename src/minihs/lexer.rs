//! minihs lexing pipeline
//!
//! Raw tokenization is a plain logos pass producing spanned tokens; the
//! layout configuration below is the single place where the minihs token
//! kinds are wired into the language-agnostic resolver.

use logos::Logos;
use once_cell::sync::Lazy;

use crate::layout::{resolve, LayoutConfig, LayoutToken, SliceTokenSource};
use crate::minihs::tokens::Token;

/// Tokenize source text with location information.
///
/// Raw tokenization only: no layout resolution happens here. Characters
/// the grammar does not know become [Token::Unknown] rather than failing
/// the pass - actively-edited source must always produce a stream, and
/// dropping the bytes would shift the columns of everything after them.
pub fn tokenize(source: &str) -> Vec<(Token, logos::Span)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        tokens.push((result.unwrap_or(Token::Unknown), lexer.span()));
    }

    tokens
}

static LAYOUT_CONFIG: Lazy<LayoutConfig<Token>> = Lazy::new(|| LayoutConfig {
    end_of_line: Token::Newline,
    open: Token::VirtualOpen,
    separator: Token::VirtualSemi,
    close: Token::VirtualClose,
    non_code: vec![Token::Whitespace, Token::LineComment, Token::Unknown],
    layout_keywords: vec![Token::Let, Token::Where, Token::Do, Token::Of],
    let_keyword: Token::Let,
    in_keyword: Token::In,
});

/// The canonical layout configuration for the minihs syntax.
pub fn layout_config() -> &'static LayoutConfig<Token> {
    &LAYOUT_CONFIG
}

/// Full pipeline: tokenize, materialize, resolve layout.
///
/// Returns the rewritten stream, terminated by the end-of-stream sentinel
/// and with every implicit block opened and closed by virtual delimiters.
pub fn lex(source: &str) -> Vec<LayoutToken<Token>> {
    let raw = tokenize(source);
    let mut raw_source = SliceTokenSource::new(&raw, source.len());
    resolve(&mut raw_source, layout_config())
}
