//! Parse error types.

use crate::token::{Token, TokenKind};
use std::fmt;

/// The kind of a parse error.
///
/// Kinds classify how a parse went wrong, not where; the position lives on
/// the [`ParseError`] itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The current token's kind is not one the current production allows.
    /// Also used for lexical errors surfacing as `ERROR` tokens.
    UnexpectedToken,
    /// A required delimiter or keyword was not found where expected.
    MissingToken,
    /// Expression parsing bottomed out with no matching production.
    InvalidExpression,
    /// A statement ended without an acceptable terminator.
    InvalidStatement,
    /// Arena growth failed. Fatal: the parser stops and returns the partial
    /// tree.
    MemoryError,
}

/// Where an error message is anchored in its diagnostic line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorAnchor {
    /// The offending token's lexeme: `Error at '<lexeme>': ...`
    Lexeme(String),
    /// The offending token was end-of-input: `Error at end: ...`
    End,
    /// The error came from the source itself (a lexical error); the message
    /// already says everything: `Error: ...`
    Source,
}

/// An error that occurred during parsing.
///
/// Carries the error kind, a human-readable message, and the 1-based source
/// position of the offending token. The `Display` rendering is exactly the
/// line the parser writes to its diagnostic sink.
///
/// # See Also
///
/// * [`crate::diagnostics::DiagnosticSink`] - Where rendered errors collect
#[derive(Debug, Clone)]
pub struct ParseError {
    kind: ParseErrorKind,
    message: String,
    line: u32,
    column: u32,
    anchor: ErrorAnchor,
}

impl ParseError {
    fn with_kind(kind: ParseErrorKind, message: &str, token: &Token) -> Self {
        let anchor = match token.kind {
            TokenKind::Eof => ErrorAnchor::End,
            TokenKind::Error => ErrorAnchor::Source,
            _ => ErrorAnchor::Lexeme(token.lexeme.to_string()),
        };
        ParseError {
            kind,
            message: message.to_string(),
            line: token.line,
            column: token.column,
            anchor,
        }
    }

    /// An error for a token no production allows here.
    pub fn unexpected_token(message: &str, token: &Token) -> Self {
        Self::with_kind(ParseErrorKind::UnexpectedToken, message, token)
    }

    /// An error for a required token that was not found.
    pub fn missing_token(message: &str, token: &Token) -> Self {
        Self::with_kind(ParseErrorKind::MissingToken, message, token)
    }

    /// An error for a failed expression production.
    pub fn invalid_expression(message: &str, token: &Token) -> Self {
        Self::with_kind(ParseErrorKind::InvalidExpression, message, token)
    }

    /// An error for a statement with no acceptable terminator.
    pub fn invalid_statement(message: &str, token: &Token) -> Self {
        Self::with_kind(ParseErrorKind::InvalidStatement, message, token)
    }

    /// A fatal arena allocation failure.
    pub fn memory(token: &Token) -> Self {
        Self::with_kind(
            ParseErrorKind::MemoryError,
            "Out of memory while building the syntax tree",
            token,
        )
    }

    /// The error's kind.
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// The human-readable message, without position information.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The 1-based line of the offending token.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// The 1-based column of the offending token.
    pub fn column(&self) -> u32 {
        self.column
    }

    /// How the diagnostic line anchors the error.
    pub fn anchor(&self) -> &ErrorAnchor {
        &self.anchor
    }

    /// A short label for the error kind, used as a report headline.
    pub fn short_message(&self) -> &'static str {
        match self.kind {
            ParseErrorKind::UnexpectedToken => "Unexpected token",
            ParseErrorKind::MissingToken => "Missing token",
            ParseErrorKind::InvalidExpression => "Invalid expression",
            ParseErrorKind::InvalidStatement => "Invalid statement",
            ParseErrorKind::MemoryError => "Out of memory",
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}:{}] Error", self.line, self.column)?;
        match &self.anchor {
            ErrorAnchor::Lexeme(lexeme) => write!(f, " at '{}'", lexeme)?,
            ErrorAnchor::End => write!(f, " at end")?,
            ErrorAnchor::Source => {}
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for ParseError {}
