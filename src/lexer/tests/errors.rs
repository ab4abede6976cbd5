//! Tests for lexical error tokens.
//!
//! The lexer never fails: bad input becomes `Error` tokens whose lexeme is a
//! static message, and scanning continues afterwards.

use super::*;

#[test]
fn test_unknown_byte() {
    let tokens = lex("#");
    assert_eq!(tokens[0].kind, TokenKind::Error);
    assert_eq!(tokens[0].lexeme, "Unexpected character");
    assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
}

#[test]
fn test_lone_ampersand() {
    let tokens = lex("a & b");
    assert_eq!(tokens[1].kind, TokenKind::Error);
    assert_eq!(tokens[1].lexeme, "Unexpected character");
}

#[test]
fn test_lone_pipe() {
    let tokens = lex("a | b");
    assert_eq!(tokens[1].kind, TokenKind::Error);
}

#[test]
fn test_lone_dollar() {
    let tokens = lex("$x");
    assert_eq!(tokens[0].kind, TokenKind::Error);
    // Scanning continues after the bad byte.
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
}

#[test]
fn test_non_ascii_byte() {
    let kinds = lex_kinds("é");
    // Each byte of the multi-byte character is rejected on its own.
    assert!(kinds[..kinds.len() - 1]
        .iter()
        .all(|k| *k == TokenKind::Error));
    assert_eq!(*kinds.last().expect("eof"), TokenKind::Eof);
}

#[test]
fn test_scanning_continues_after_error() {
    assert_eq!(
        lex_kinds("let # x"),
        vec![
            TokenKind::Let,
            TokenKind::Error,
            TokenKind::Identifier,
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_error_position() {
    let tokens = lex("ab #");
    assert_eq!(tokens[1].kind, TokenKind::Error);
    assert_eq!((tokens[1].line, tokens[1].column), (1, 4));
}
