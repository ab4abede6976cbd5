//! Parser primitives: token navigation, error reporting, and recovery.

use super::Parser;
use super::error::ParseError;
use crate::ast::{ArenaError, NodeId};
use crate::token::{Token, TokenKind};
use log::trace;

impl<'src> Parser<'src> {
    /// Moves to the next token.
    ///
    /// `ERROR` tokens never reach the grammar: each one is reported as a
    /// diagnostic (its lexeme is the message) and skipped here. The lexer
    /// consumes at least one byte per error token, so this loop terminates.
    pub(super) fn advance(&mut self) {
        self.previous = self.current;
        loop {
            self.current = self.lexer.next_token();
            if self.current.kind != TokenKind::Error {
                break;
            }
            let token = self.current;
            self.report(ParseError::unexpected_token(token.lexeme, &token));
        }
    }

    /// Returns `true` if the current token has the given kind.
    pub(super) fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Consumes the current token if it has the given kind.
    pub(super) fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Requires the current token to have the given kind and consumes it,
    /// or reports `message` anchored at the current token.
    pub(super) fn consume(&mut self, kind: TokenKind, message: &str) -> Result<(), ParseError> {
        if self.match_token(kind) {
            Ok(())
        } else {
            let token = self.current;
            Err(self.report(ParseError::missing_token(message, &token)))
        }
    }

    /// Requires an identifier, consumes it, and returns its token.
    pub(super) fn consume_identifier(
        &mut self,
        message: &str,
    ) -> Result<Token<'src>, ParseError> {
        if self.check(TokenKind::Identifier) {
            let token = self.current;
            self.advance();
            Ok(token)
        } else {
            let token = self.current;
            Err(self.report(ParseError::missing_token(message, &token)))
        }
    }

    /// Records an error and emits its diagnostic line.
    ///
    /// Sets `had_error` and enters panic mode. While panic mode is active
    /// the error is recorded but nothing is emitted, which keeps one
    /// malformed statement from producing a cascade of messages. Returns
    /// the error so call sites can propagate it with `?` or `Err`.
    pub(super) fn report(&mut self, error: ParseError) -> ParseError {
        self.had_error = true;
        if !self.panic_mode {
            self.panic_mode = true;
            self.sink.emit(error.to_string());
            if self.first_error.is_none() {
                self.first_error = Some(error.clone());
            }
        }
        error
    }

    /// Converts an arena allocation result into a parse result, reporting
    /// the fatal [`MemoryError`](ParseErrorKind::MemoryError) on failure.
    pub(super) fn node(
        &mut self,
        result: Result<NodeId, ArenaError>,
    ) -> Result<NodeId, ParseError> {
        result.map_err(|_| {
            let token = self.current;
            self.report(ParseError::memory(&token))
        })
    }

    /// Skips ahead to a plausible statement boundary, then leaves panic
    /// mode.
    ///
    /// Stops after a `;`, in front of a token that starts a fresh
    /// declaration or statement, or at end of input. Everything in between
    /// belongs to the malformed construct and is dropped. Panic mode stays
    /// set until the boundary is reached, so lexical errors inside the
    /// skipped span stay suppressed too.
    pub(super) fn synchronize(&mut self) {
        trace!(
            "synchronize from '{}' at {}:{}",
            self.current.lexeme, self.current.line, self.current.column
        );

        while !self.check(TokenKind::Eof) {
            if self.previous.kind == TokenKind::Semicolon {
                break;
            }
            match self.current.kind {
                TokenKind::Func
                | TokenKind::Let
                | TokenKind::Const
                | TokenKind::For
                | TokenKind::If
                | TokenKind::While
                | TokenKind::Return => break,
                _ => self.advance(),
            }
        }

        self.panic_mode = false;
    }
}
