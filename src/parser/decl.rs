//! Function and variable declaration parsing.

use super::Parser;
use super::error::ParseError;
use crate::ast::{NodeId, Param, Type};
use crate::token::TokenKind;

impl<'src> Parser<'src> {
    /// Parses a declaration, which is what the top level and block bodies
    /// are made of.
    ///
    /// # Grammar
    ///
    /// ```text
    /// declaration → func_decl | var_decl | statement
    /// ```
    pub(super) fn declaration(&mut self) -> Result<NodeId, ParseError> {
        match self.current.kind {
            TokenKind::Func => self.func_declaration(),
            TokenKind::Let | TokenKind::Const => self.var_declaration(),
            _ => self.statement(),
        }
    }

    /// Parses a function declaration. The return type defaults to `void`
    /// when no `->` clause is written; the body must be a block.
    ///
    /// # Grammar
    ///
    /// ```text
    /// func_decl → "func" IDENT "(" params? ")" ( "->" type )? block
    /// params    → IDENT ":" type ( "," IDENT ":" type )*
    /// ```
    fn func_declaration(&mut self) -> Result<NodeId, ParseError> {
        let keyword = self.current;
        self.advance();

        let name = self.consume_identifier("Expected function name")?;
        self.consume(TokenKind::LeftParen, "Expected '(' after function name")?;

        let mut params = Vec::new();
        if !self.check(TokenKind::RightParen) {
            loop {
                let param_name = self.consume_identifier("Expected parameter name")?;
                self.consume(TokenKind::Colon, "Expected ':' after parameter name")?;
                let ty = self.type_annotation()?;
                params.push(Param {
                    name: param_name.lexeme.to_string(),
                    ty,
                });
                if !self.match_token(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.consume(TokenKind::RightParen, "Expected ')' after parameters")?;

        let return_type = if self.match_token(TokenKind::Arrow) {
            self.type_annotation()?
        } else {
            Type::Void
        };

        if !self.check(TokenKind::LeftBrace) {
            let token = self.current;
            return Err(self.report(ParseError::missing_token(
                "Expected '{' before function body",
                &token,
            )));
        }
        let body = self.block()?;

        let result = self
            .arena
            .func_decl(name.lexeme, params, return_type, body, &keyword);
        self.node(result)
    }

    /// Parses a `let` or `const` declaration. The annotation is optional
    /// (the node stores [`Type::Unknown`] without one), and so is the
    /// initializer: a `let` without one is fine here and rejected, if at
    /// all, by a later phase.
    ///
    /// # Grammar
    ///
    /// ```text
    /// var_decl → ( "let" | "const" ) IDENT ( ":" type )? ( "=" expression )? ";"
    /// ```
    pub(super) fn var_declaration(&mut self) -> Result<NodeId, ParseError> {
        let keyword = self.current;
        let is_const = keyword.kind == TokenKind::Const;
        self.advance();

        let name = self.consume_identifier("Expected variable name")?;

        let ty = if self.match_token(TokenKind::Colon) {
            self.type_annotation()?
        } else {
            Type::Unknown
        };

        let initializer = if self.match_token(TokenKind::Equals) {
            Some(self.expression()?)
        } else {
            None
        };

        self.consume(
            TokenKind::Semicolon,
            "Expected ';' after variable declaration",
        )?;

        let result = self
            .arena
            .var_decl(name.lexeme, ty, is_const, initializer, &keyword);
        self.node(result)
    }
}
