//! End-to-end layout resolution scenarios
//!
//! Each test runs the full pipeline over a small minihs source and checks
//! the exact rewritten token sequence, including where the virtual
//! delimiters land relative to newlines and leading whitespace.

use rstest::rstest;

use offside::layout::LayoutToken;
use offside::minihs::{lex, Token};

fn kinds(tokens: &[LayoutToken<Token>]) -> Vec<Option<Token>> {
    tokens.iter().map(|t| t.kind).collect()
}

fn count(tokens: &[LayoutToken<Token>], kind: Token) -> usize {
    tokens.iter().filter(|t| t.kind == Some(kind)).count()
}

#[test]
fn test_top_level_declarations_pass_through() {
    let tokens = lex("f = 1\ng = 2");

    assert_eq!(
        kinds(&tokens),
        vec![
            Some(Token::Identifier), // "f"
            Some(Token::Whitespace), // " "
            Some(Token::Equals),     // "="
            Some(Token::Whitespace), // " "
            Some(Token::Number),     // "1"
            Some(Token::Newline),    // "\n"
            Some(Token::Identifier), // "g"
            Some(Token::Whitespace), // " "
            Some(Token::Equals),     // "="
            Some(Token::Whitespace), // " "
            Some(Token::Number),     // "2"
            Some(Token::VirtualClose), // implicit top level
            None,                    // end of stream
        ]
    );
}

#[test]
fn test_where_block_with_two_bindings() {
    let tokens = lex("f = 1\n  where\n    g = 2\n    h = 3");

    assert_eq!(
        kinds(&tokens),
        vec![
            Some(Token::Identifier),   // "f"
            Some(Token::Whitespace),   // " "
            Some(Token::Equals),       // "="
            Some(Token::Whitespace),   // " "
            Some(Token::Number),       // "1"
            Some(Token::Newline),      // "\n"
            Some(Token::Whitespace),   // "  "
            Some(Token::Where),        // "where"
            Some(Token::Newline),      // "\n"
            Some(Token::VirtualOpen),  // block at column 4, behind the newline
            Some(Token::Whitespace),   // "    "
            Some(Token::Identifier),   // "g"
            Some(Token::Whitespace),   // " "
            Some(Token::Equals),       // "="
            Some(Token::Whitespace),   // " "
            Some(Token::Number),       // "2"
            Some(Token::Newline),      // "\n"
            Some(Token::VirtualSemi),  // "h" sits at the block column
            Some(Token::Whitespace),   // "    "
            Some(Token::Identifier),   // "h"
            Some(Token::Whitespace),   // " "
            Some(Token::Equals),       // "="
            Some(Token::Whitespace),   // " "
            Some(Token::Number),       // "3"
            Some(Token::VirtualClose), // where block, at end of input
            Some(Token::VirtualClose), // implicit top level
            None,                      // end of stream
        ]
    );
}

#[test]
fn test_single_line_let_in() {
    let tokens = lex("f = let x = 1 in x");

    assert_eq!(
        kinds(&tokens),
        vec![
            Some(Token::Identifier),   // "f"
            Some(Token::Whitespace),   // " "
            Some(Token::Equals),       // "="
            Some(Token::Whitespace),   // " "
            Some(Token::Let),          // "let"
            Some(Token::Whitespace),   // " "
            Some(Token::VirtualOpen),  // let block at column 8
            Some(Token::Identifier),   // "x"
            Some(Token::Whitespace),   // " "
            Some(Token::Equals),       // "="
            Some(Token::Whitespace),   // " "
            Some(Token::Number),       // "1"
            Some(Token::Whitespace),   // " "
            Some(Token::VirtualClose), // same-line `in` closes the let block
            Some(Token::In),           // "in"
            Some(Token::Whitespace),   // " "
            Some(Token::Identifier),   // "x"
            Some(Token::VirtualClose), // implicit top level
            None,                      // end of stream
        ]
    );
}

#[test]
fn test_multi_line_let_in() {
    let tokens = lex("f = let x = 1\n        y = 2\n    in x");

    assert_eq!(
        kinds(&tokens),
        vec![
            Some(Token::Identifier),   // "f"
            Some(Token::Whitespace),   // " "
            Some(Token::Equals),       // "="
            Some(Token::Whitespace),   // " "
            Some(Token::Let),          // "let"
            Some(Token::Whitespace),   // " "
            Some(Token::VirtualOpen),  // let block at column 8
            Some(Token::Identifier),   // "x"
            Some(Token::Whitespace),   // " "
            Some(Token::Equals),       // "="
            Some(Token::Whitespace),   // " "
            Some(Token::Number),       // "1"
            Some(Token::Newline),      // "\n"
            Some(Token::VirtualSemi),  // "y" sits at the block column
            Some(Token::Whitespace),   // "        "
            Some(Token::Identifier),   // "y"
            Some(Token::Whitespace),   // " "
            Some(Token::Equals),       // "="
            Some(Token::Whitespace),   // " "
            Some(Token::Number),       // "2"
            Some(Token::Newline),      // "\n"
            Some(Token::VirtualClose), // dedent to column 4 closes the block
            Some(Token::Whitespace),   // "    "
            Some(Token::In),           // "in"
            Some(Token::Whitespace),   // " "
            Some(Token::Identifier),   // "x"
            Some(Token::VirtualClose), // implicit top level
            None,                      // end of stream
        ]
    );
}

#[test]
fn test_trailing_where_opens_and_closes_at_end_of_input() {
    let tokens = lex("f = 1 where");

    assert_eq!(
        kinds(&tokens),
        vec![
            Some(Token::Identifier),   // "f"
            Some(Token::Whitespace),   // " "
            Some(Token::Equals),       // "="
            Some(Token::Whitespace),   // " "
            Some(Token::Number),       // "1"
            Some(Token::Whitespace),   // " "
            Some(Token::Where),        // "where"
            Some(Token::VirtualOpen),  // the announced block, still empty
            Some(Token::VirtualClose),
            Some(Token::VirtualClose), // implicit top level
            None,                      // end of stream
        ]
    );

    // Everything synthesized at end of input anchors at the buffer end.
    for token in tokens.iter().rev().take(4) {
        assert_eq!((token.start, token.end), (11, 11));
    }
}

#[test]
fn test_virtual_tokens_are_zero_width_and_offsets_survive() {
    let source = "f = do\n  let x = 1 in x\n  y  -- trailing\ng = 2";
    let tokens = lex(source);

    for token in &tokens {
        if token.kind.map(|k| k.is_virtual()).unwrap_or(false) {
            assert_eq!(token.start, token.end, "virtual token must be zero-width");
        }
    }

    let real: Vec<(Token, std::ops::Range<usize>)> = tokens
        .iter()
        .filter(|t| !t.is_eof() && !t.kind.unwrap().is_virtual())
        .map(|t| (t.kind.unwrap(), t.start..t.end))
        .collect();
    assert_eq!(real, offside::minihs::tokenize(source));
}

#[rstest]
#[case::empty("")]
#[case::flat("f = 1\ng = 2")]
#[case::do_block("f = do\n  a\n  b\ng = 1")]
#[case::nested("f = do\n  do\n    a\ng = 1")]
#[case::let_in_single("f = let x = 1 in x")]
#[case::let_in_multi("f = let x = 1\n        y = 2\n    in x")]
#[case::abandoned("f = do\n  let\n  y")]
#[case::trailing_keyword("f = 1 where")]
#[case::comment_heavy("-- top\nf = 1  -- eol\n  where\n    g = 2")]
#[case::trailing_blank("a = 0\n ")]
#[case::trailing_newline("f = do\n  x\n")]
fn test_stream_stays_balanced(#[case] source: &str) {
    let tokens = lex(source);

    let sentinel = tokens.last().expect("stream is never empty");
    assert!(sentinel.is_eof());
    assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);

    // The top-level close sits directly ahead of the sentinel.
    assert_eq!(tokens[tokens.len() - 2].kind, Some(Token::VirtualClose));

    // One close per open, plus one for the implicit top level.
    assert_eq!(
        count(&tokens, Token::VirtualClose),
        count(&tokens, Token::VirtualOpen) + 1
    );
}
