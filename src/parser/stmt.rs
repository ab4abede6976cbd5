//! Statement parsing.

use super::Parser;
use super::error::{ParseError, ParseErrorKind};
use crate::ast::NodeId;
use crate::token::TokenKind;

impl<'src> Parser<'src> {
    /// Parses a single statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// statement → if_stmt | while_stmt | for_stmt | return_stmt
    ///           | block | var_decl | expr_stmt
    /// ```
    pub(super) fn statement(&mut self) -> Result<NodeId, ParseError> {
        match self.current.kind {
            TokenKind::If => self.if_statement(),
            TokenKind::While => self.while_statement(),
            TokenKind::For => self.for_statement(),
            TokenKind::Return => self.return_statement(),
            TokenKind::LeftBrace => self.block(),
            TokenKind::Let | TokenKind::Const => self.var_declaration(),
            _ => self.expression_statement(),
        }
    }

    /// Parses an if statement. A dangling `else` binds to the nearest `if`,
    /// which falls out of the recursion here.
    ///
    /// # Grammar
    ///
    /// ```text
    /// if_stmt → "if" "(" expression ")" statement ( "else" statement )?
    /// ```
    fn if_statement(&mut self) -> Result<NodeId, ParseError> {
        let keyword = self.current;
        self.advance();
        self.consume(TokenKind::LeftParen, "Expected '(' after 'if'")?;
        let condition = self.expression()?;
        self.consume(TokenKind::RightParen, "Expected ')' after condition")?;

        let then_branch = self.statement()?;
        let else_branch = if self.else_follows() {
            self.advance();
            Some(self.statement()?)
        } else {
            None
        };

        let result = self
            .arena
            .if_stmt(condition, then_branch, else_branch, &keyword);
        self.node(result)
    }

    /// Skips newlines between a then-branch and a potential `else`, and says
    /// whether `else` is next. Consuming the newlines is harmless when no
    /// `else` follows: the enclosing block or program loop skips them anyway.
    fn else_follows(&mut self) -> bool {
        while self.check(TokenKind::Newline) {
            self.advance();
        }
        self.check(TokenKind::Else)
    }

    /// Parses a while statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// while_stmt → "while" "(" expression ")" statement
    /// ```
    fn while_statement(&mut self) -> Result<NodeId, ParseError> {
        let keyword = self.current;
        self.advance();
        self.consume(TokenKind::LeftParen, "Expected '(' after 'while'")?;
        let condition = self.expression()?;
        self.consume(TokenKind::RightParen, "Expected ')' after condition")?;
        let body = self.statement()?;

        let result = self.arena.while_stmt(condition, body, &keyword);
        self.node(result)
    }

    /// Parses a for-in statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// for_stmt → "for" "(" IDENT "in" expression ")" statement
    /// ```
    fn for_statement(&mut self) -> Result<NodeId, ParseError> {
        let keyword = self.current;
        self.advance();
        self.consume(TokenKind::LeftParen, "Expected '(' after 'for'")?;
        let variable = self.consume_identifier("Expected loop variable name")?;
        self.consume(TokenKind::In, "Expected 'in' after loop variable")?;
        let iterable = self.expression()?;
        self.consume(TokenKind::RightParen, "Expected ')' after loop expression")?;
        let body = self.statement()?;

        let result = self
            .arena
            .for_stmt(variable.lexeme, iterable, body, &keyword);
        self.node(result)
    }

    /// Parses a return statement. The value is omitted when the statement
    /// ends immediately; the terminator itself is optional.
    ///
    /// # Grammar
    ///
    /// ```text
    /// return_stmt → "return" expression? ( ";" | NEWLINE )?
    /// ```
    fn return_statement(&mut self) -> Result<NodeId, ParseError> {
        let keyword = self.current;
        self.advance();

        let value = if self.statement_boundary() {
            None
        } else {
            Some(self.expression()?)
        };

        let _ = self.match_token(TokenKind::Semicolon) || self.match_token(TokenKind::Newline);

        let result = self.arena.return_stmt(value, &keyword);
        self.node(result)
    }

    /// Parses a braced block. Newlines between statements are skipped, and
    /// a statement that fails to parse is dropped after resynchronization
    /// so the rest of the block still gets parsed.
    ///
    /// # Grammar
    ///
    /// ```text
    /// block → "{" ( NEWLINE | declaration )* "}"
    /// ```
    pub(super) fn block(&mut self) -> Result<NodeId, ParseError> {
        let brace = self.current;
        self.advance();

        let mut statements = Vec::new();
        while !self.check(TokenKind::RightBrace) && !self.check(TokenKind::Eof) {
            if self.match_token(TokenKind::Newline) {
                continue;
            }
            match self.declaration() {
                Ok(stmt) => {
                    statements.push(stmt);
                    if self.panic_mode {
                        self.synchronize();
                    }
                }
                Err(error) => {
                    if error.kind() == ParseErrorKind::MemoryError {
                        return Err(error);
                    }
                    self.synchronize();
                }
            }
        }
        self.consume(TokenKind::RightBrace, "Expected '}' after block")?;

        let result = self.arena.block(statements, &brace);
        self.node(result)
    }

    /// Parses an expression statement. Both `;` and newline terminate it,
    /// and runs of terminators are consumed in one go.
    ///
    /// # Grammar
    ///
    /// ```text
    /// expr_stmt → expression ( ";" | NEWLINE )*
    /// ```
    fn expression_statement(&mut self) -> Result<NodeId, ParseError> {
        let start = self.current;
        let expression = self.expression()?;

        if !self.statement_boundary() {
            let token = self.current;
            return Err(self.report(ParseError::invalid_statement(
                "Expected ';' or newline after expression",
                &token,
            )));
        }
        while self.match_token(TokenKind::Semicolon) || self.match_token(TokenKind::Newline) {}

        let result = self.arena.expr_stmt(expression, &start);
        self.node(result)
    }

    /// Returns `true` when the current token can legitimately follow a
    /// statement: a terminator, a closing brace, `else`, or end of input.
    fn statement_boundary(&self) -> bool {
        matches!(
            self.current.kind,
            TokenKind::Semicolon
                | TokenKind::Newline
                | TokenKind::RightBrace
                | TokenKind::Else
                | TokenKind::Eof
        )
    }
}
