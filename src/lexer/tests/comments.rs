//! Tests for line comment handling.

use super::*;

#[test]
fn test_comment_only_input() {
    assert_eq!(lex_kinds("// nothing here"), vec![TokenKind::Eof]);
}

#[test]
fn test_comment_runs_to_end_of_line() {
    // The newline after a comment is still emitted as a token.
    assert_eq!(
        lex_kinds("a // trailing\nb"),
        vec![
            TokenKind::Identifier,
            TokenKind::Newline,
            TokenKind::Identifier,
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_comment_at_end_of_input() {
    assert_eq!(
        lex_kinds("x // no newline after"),
        vec![TokenKind::Identifier, TokenKind::Eof]
    );
}

#[test]
fn test_comment_containing_code() {
    assert_eq!(
        lex_kinds("// let x = 1;\ny"),
        vec![TokenKind::Newline, TokenKind::Identifier, TokenKind::Eof]
    );
}

#[test]
fn test_single_slash_is_division() {
    assert_eq!(
        lex_kinds("a / b"),
        vec![
            TokenKind::Identifier,
            TokenKind::Slash,
            TokenKind::Identifier,
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_comment_position_tracking() {
    let tokens = lex("// one\nx");
    let ident = &tokens[1];
    assert_eq!(ident.kind, TokenKind::Identifier);
    assert_eq!(ident.line, 2);
    assert_eq!(ident.column, 1);
}
