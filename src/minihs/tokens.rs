//! Token definitions for the minihs surface syntax
//!
//! The raw tokens are defined with the logos derive macro; the three
//! virtual kinds at the bottom are never produced by logos - the layout
//! resolver synthesizes them.
use logos::Logos;
use serde::Serialize;

/// All token kinds of the minihs syntax.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Token {
    // Keywords
    #[token("let")]
    Let,
    #[token("in")]
    In,
    #[token("where")]
    Where,
    #[token("do")]
    Do,
    #[token("of")]
    Of,
    #[token("case")]
    Case,
    #[token("module")]
    Module,

    // Punctuation
    #[token("=", priority = 10)]
    Equals,
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token(",")]
    Comma,

    // Operators such as `+`, `->`, `==`, `$`
    #[regex(r"[+\-*/<>=:$.|&!\\^]+")]
    Operator,

    #[regex(r"[A-Za-z_][A-Za-z0-9_']*")]
    Identifier,
    #[regex(r"[0-9]+")]
    Number,

    // Non-code
    #[regex(r"--[^\n]*", priority = 10)]
    LineComment,
    #[regex(r"[ \t]+")]
    Whitespace,
    #[regex(r"\r?\n")]
    Newline,

    // Input the grammar does not know. Mapped from the lexing error by the
    // tokenizer rather than dropped, so every byte of the buffer stays
    // accounted for and later columns on the line are not undercounted.
    Unknown,

    // Virtual layout delimiters (synthesized, never lexed): the implicit
    // open brace, item semicolon, and close brace of a layout block.
    VirtualOpen,
    VirtualSemi,
    VirtualClose,
}

impl Token {
    /// Check if this token carries no code.
    pub fn is_non_code(&self) -> bool {
        matches!(
            self,
            Token::Whitespace | Token::LineComment | Token::Newline | Token::Unknown
        )
    }

    /// Check if this token announces an implicit block.
    pub fn is_layout_keyword(&self) -> bool {
        matches!(self, Token::Let | Token::Where | Token::Do | Token::Of)
    }

    /// Check if this token is a synthesized layout delimiter.
    pub fn is_virtual(&self) -> bool {
        matches!(
            self,
            Token::VirtualOpen | Token::VirtualSemi | Token::VirtualClose
        )
    }
}
