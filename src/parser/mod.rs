//! Parser for the Zen programming language.
//!
//! This module provides the [`Parser`] struct which pulls tokens from the
//! [`crate::lexer`] and builds a positioned AST in an [`Arena`].
//!
//! # Overview
//!
//! The parser is a classical recursive descent parser with one token of
//! lookahead. Expressions go through a fixed precedence ladder, one function
//! per level; statements and declarations dispatch on the current token.
//!
//! # Grammar
//!
//! ```text
//! program     → ( NEWLINE | declaration )* EOF
//! declaration → func_decl | var_decl | statement
//! func_decl   → "func" IDENT "(" params? ")" ( "->" type )? block
//! params      → IDENT ":" type ( "," IDENT ":" type )*
//! var_decl    → ( "let" | "const" ) IDENT ( ":" type )? ( "=" expression )? ";"
//! statement   → if_stmt | while_stmt | for_stmt | return_stmt
//!             | block | var_decl | expr_stmt
//! if_stmt     → "if" "(" expression ")" statement ( "else" statement )?
//! while_stmt  → "while" "(" expression ")" statement
//! for_stmt    → "for" "(" IDENT "in" expression ")" statement
//! return_stmt → "return" expression? ( ";" | NEWLINE )?
//! block       → "{" ( NEWLINE | declaration )* "}"
//! expr_stmt   → expression ( ";" | NEWLINE )*
//! type        → "i32" | "f64" | "string" | "bool" | "void"
//! ```
//!
//! # Error handling
//!
//! The parser never fails outright. Errors set `had_error`, write one line
//! to the diagnostic sink, and put the parser into panic mode, during which
//! further errors are suppressed. Recovery advances to the next statement
//! boundary (`synchronize`), then parsing continues; malformed subtrees are
//! simply absent from their parent's child list. The result always carries a
//! program node, partial or not.
//!
//! # Examples
//!
//! ```
//! use zen::parser::Parser;
//!
//! let result = Parser::new("let x: i32 = 1 + 2;").parse();
//! assert!(result.success);
//! ```
//!
//! # Module Structure
//!
//! - `error` - Parse error types
//! - `helpers` - Token navigation, reporting, and resynchronization
//! - `expr` - Expression precedence ladder
//! - `stmt` - Statement parsing
//! - `decl` - Function and variable declarations
//! - `types` - Type annotation parsing
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::lexer`] - Produces the token stream consumed here
//! * [`crate::ast`] - The node and arena types the parser builds

mod decl;
mod error;
mod expr;
mod helpers;
mod stmt;
mod types;

#[cfg(test)]
mod tests;

pub use error::{ErrorAnchor, ParseError, ParseErrorKind};

use crate::ast::{Arena, NodeId};
use crate::diagnostics::DiagnosticSink;
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};
use log::debug;

/// A recursive descent parser for Zen.
///
/// Create one per source buffer with [`Parser::new`], then call
/// [`Parser::parse`] to consume it and get the tree.
pub struct Parser<'src> {
    /// The token source.
    lexer: Lexer<'src>,
    /// The one token of lookahead.
    current: Token<'src>,
    /// The most recently consumed token.
    previous: Token<'src>,
    /// Owns every node built during this parse.
    arena: Arena,
    /// Set by the first error and never cleared.
    had_error: bool,
    /// While set, further diagnostics are suppressed.
    panic_mode: bool,
    /// The first error reported, kept for rich rendering.
    first_error: Option<ParseError>,
    /// Collects one formatted line per reported error.
    sink: DiagnosticSink,
}

/// Everything a parse produces.
///
/// The tree is always present; `success` says whether it is trustworthy.
#[derive(Debug)]
pub struct ParseResult {
    /// The arena owning every node of the tree.
    pub arena: Arena,
    /// The program root.
    pub program: NodeId,
    /// `true` when no error was reported.
    pub success: bool,
    /// The first error reported, if any.
    pub first_error: Option<ParseError>,
    /// The diagnostic lines, in order.
    pub sink: DiagnosticSink,
}

impl<'src> Parser<'src> {
    /// Creates a parser over `source`, primed with its first token.
    pub fn new(source: &'src str) -> Self {
        let mut parser = Parser {
            lexer: Lexer::new(source),
            current: Token::synthetic(),
            previous: Token::synthetic(),
            arena: Arena::new(),
            had_error: false,
            panic_mode: false,
            first_error: None,
            sink: DiagnosticSink::new(),
        };
        parser.advance();
        parser
    }

    /// Parses the whole input into a program tree.
    ///
    /// Consumes the parser. Top-level newlines are skipped; each declaration
    /// that parses lands in the program's child list, and each one that does
    /// not is dropped after resynchronization. A fatal [`MemoryError`]
    /// (arena exhaustion) stops the loop early; if even the root cannot be
    /// stored afterwards, the partial tree is released and an empty program
    /// is returned, with `had_error` set either way.
    ///
    /// [`MemoryError`]: ParseErrorKind::MemoryError
    pub fn parse(mut self) -> ParseResult {
        let mut declarations = Vec::new();

        while !self.check(TokenKind::Eof) {
            if self.match_token(TokenKind::Newline) {
                continue;
            }
            match self.declaration() {
                Ok(decl) => {
                    declarations.push(decl);
                    if self.panic_mode {
                        self.synchronize();
                    }
                }
                Err(error) => {
                    if error.kind() == ParseErrorKind::MemoryError {
                        break;
                    }
                    self.synchronize();
                }
            }
        }

        debug!(
            "parse finished: {} declarations, had_error={}",
            declarations.len(),
            self.had_error
        );

        let root = Token::synthetic();
        let result = self.arena.program(declarations, &root);
        let program = match self.node(result) {
            Ok(program) => program,
            Err(_) => {
                // The root could not be stored next to the partial tree,
                // and without a root the tree is unreachable. Release it
                // and store a bare program in the emptied arena, which
                // needs only the initial reservation.
                self.arena = Arena::new();
                self.arena
                    .program(Vec::new(), &root)
                    .expect("allocator refused the initial arena reservation")
            }
        };

        ParseResult {
            success: !self.had_error,
            program,
            first_error: self.first_error,
            sink: self.sink,
            arena: self.arena,
        }
    }
}
