//! Whitespace and comment skipping for the lexer.

use super::Lexer;

impl<'src> Lexer<'src> {
    /// Skips spaces, tabs, carriage returns, and `//` line comments.
    ///
    /// Newlines are left alone: they are real tokens. A comment runs to the
    /// end of its line, so the newline that follows it is still emitted.
    pub(super) fn skip_trivia(&mut self) {
        loop {
            match self.peek() {
                Some(b' ' | b'\t' | b'\r') => {
                    self.advance();
                }
                Some(b'/') if self.peek_next() == Some(b'/') => {
                    while let Some(byte) = self.peek() {
                        if byte == b'\n' {
                            break;
                        }
                        self.advance();
                    }
                }
                _ => break,
            }
        }
    }
}
