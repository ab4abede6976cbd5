//! Cursor position management for the lexer.
//!
//! This module provides methods for peeking at and consuming source bytes
//! while keeping the line/column bookkeeping correct.

use super::Lexer;

impl<'src> Lexer<'src> {
    /// Returns the current byte without consuming it.
    pub(super) fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }

    /// Returns the byte after the current one without consuming anything.
    pub(super) fn peek_next(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos + 1).copied()
    }

    /// Consumes and returns the current byte.
    ///
    /// Every consumed byte advances the column by one; a newline resets the
    /// column and increments the line instead.
    pub(super) fn advance(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        if byte == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(byte)
    }

    /// Consumes the current byte if it equals `expected`.
    ///
    /// Used for maximal munch of two-byte operators such as `->` and `==`.
    pub(super) fn match_byte(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }
}
