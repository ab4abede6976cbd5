//! Token recognition for the lexer.
//!
//! This module provides the methods that read individual tokens from the
//! input: numbers, strings, identifiers/keywords, and the operator and
//! delimiter set, with maximal munch for multi-byte operators.

use super::Lexer;
use crate::token::{Token, TokenKind};

impl<'src> Lexer<'src> {
    /// Builds a token from the bytes consumed since `start`.
    fn token(&self, kind: TokenKind, start: usize, line: u32, column: u32) -> Token<'src> {
        Token::new(kind, &self.source[start..self.pos], line, column)
    }

    /// Builds an error token whose lexeme is a static message.
    fn error_token(&self, message: &'static str, line: u32, column: u32) -> Token<'src> {
        Token::new(TokenKind::Error, message, line, column)
    }

    /// Scans one token. Assumes trivia has already been skipped.
    ///
    /// Unrecognized bytes produce [`TokenKind::Error`] tokens rather than
    /// stopping the scan; the parser decides what to do with them.
    pub(super) fn scan_token(&mut self) -> Token<'src> {
        let start = self.pos;
        let line = self.line;
        let column = self.column;

        let Some(byte) = self.advance() else {
            return Token::new(TokenKind::Eof, "", self.line, self.column);
        };

        let kind = match byte {
            b'\n' => TokenKind::Newline,
            b'(' => TokenKind::LeftParen,
            b')' => TokenKind::RightParen,
            b'{' => TokenKind::LeftBrace,
            b'}' => TokenKind::RightBrace,
            b'[' => TokenKind::LeftBracket,
            b']' => TokenKind::RightBracket,
            b',' => TokenKind::Comma,
            b';' => TokenKind::Semicolon,
            b':' => TokenKind::Colon,
            b'@' => TokenKind::At,
            b'?' => TokenKind::Question,
            b'%' => TokenKind::Percent,
            b'+' => {
                if self.match_byte(b'=') {
                    TokenKind::PlusEqual
                } else {
                    TokenKind::Plus
                }
            }
            b'-' => {
                if self.match_byte(b'=') {
                    TokenKind::MinusEqual
                } else if self.match_byte(b'>') {
                    TokenKind::Arrow
                } else {
                    TokenKind::Minus
                }
            }
            b'*' => {
                if self.match_byte(b'=') {
                    TokenKind::StarEqual
                } else {
                    TokenKind::Star
                }
            }
            // `//` never reaches here; comments are stripped as trivia.
            b'/' => {
                if self.match_byte(b'=') {
                    TokenKind::SlashEqual
                } else {
                    TokenKind::Slash
                }
            }
            b'=' => {
                if self.match_byte(b'=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equals
                }
            }
            b'!' => {
                if self.match_byte(b'=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                }
            }
            b'<' => {
                if self.match_byte(b'=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::LessThan
                }
            }
            b'>' => {
                if self.match_byte(b'=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::GreaterThan
                }
            }
            b'.' => {
                if self.match_byte(b'.') {
                    TokenKind::DotDot
                } else {
                    TokenKind::Dot
                }
            }
            b'&' => {
                if self.match_byte(b'&') {
                    TokenKind::AndAnd
                } else {
                    return self.error_token("Unexpected character", line, column);
                }
            }
            b'|' => {
                if self.match_byte(b'|') {
                    TokenKind::OrOr
                } else {
                    return self.error_token("Unexpected character", line, column);
                }
            }
            b'$' => {
                if self.match_byte(b'{') {
                    TokenKind::DollarBrace
                } else {
                    return self.error_token("Unexpected character", line, column);
                }
            }
            b'"' => return self.string(start, line, column),
            b'0'..=b'9' => return self.number(start, line, column),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => return self.identifier(start, line, column),
            _ => return self.error_token("Unexpected character", line, column),
        };

        self.token(kind, start, line, column)
    }

    /// Reads a string literal. The opening quote has been consumed.
    ///
    /// The resulting lexeme includes both quotes; escape sequences are left
    /// uninterpreted for the parser to deal with. Strings may span newlines.
    /// An unterminated string yields an error token anchored at the opening
    /// quote.
    fn string(&mut self, start: usize, line: u32, column: u32) -> Token<'src> {
        loop {
            match self.peek() {
                Some(b'"') => {
                    self.advance();
                    return self.token(TokenKind::String, start, line, column);
                }
                Some(_) => {
                    self.advance();
                }
                None => return self.error_token("Unterminated string", line, column),
            }
        }
    }

    /// Reads a numeric literal: digits, optionally `.` and more digits.
    ///
    /// The dot is only consumed when a digit follows, so `1..10` lexes as
    /// `1`, `..`, `10`. Value conversion is deferred to the parser.
    fn number(&mut self, start: usize, line: u32, column: u32) -> Token<'src> {
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.advance();
        }

        if self.peek() == Some(b'.') && self.peek_next().is_some_and(|b| b.is_ascii_digit()) {
            self.advance();
            while self.peek().is_some_and(|b| b.is_ascii_digit()) {
                self.advance();
            }
        }

        self.token(TokenKind::Number, start, line, column)
    }

    /// Reads an identifier or keyword. The first byte has been consumed.
    fn identifier(&mut self, start: usize, line: u32, column: u32) -> Token<'src> {
        while self
            .peek()
            .is_some_and(|b| b.is_ascii_alphanumeric() || b == b'_')
        {
            self.advance();
        }

        let lexeme = &self.source[start..self.pos];
        let kind = TokenKind::keyword(lexeme).unwrap_or(TokenKind::Identifier);
        Token::new(kind, lexeme, line, column)
    }
}
