//! Unit tests for the lexer module.

use super::*;
use crate::token::{Token, TokenKind};

/// Helper that lexes the whole input, including the trailing `Eof`.
pub(super) fn lex(input: &str) -> Vec<Token<'_>> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            break;
        }
    }
    tokens
}

/// Helper that lexes the input and returns only the token kinds.
pub(super) fn lex_kinds(input: &str) -> Vec<TokenKind> {
    lex(input).into_iter().map(|t| t.kind).collect()
}

mod comments;
mod errors;
