//! Expression parsing.
//!
//! Expressions go through a fixed precedence ladder: one function per level,
//! from loosest (`||`) down to primary expressions. Left associativity falls
//! out of the `while self.match_token(..)` loop at each level; the unary
//! level recurses into itself for right associativity.
//!
//! ```text
//! expression → or
//! or         → and ( "||" and )*
//! and        → equality ( "&&" equality )*
//! equality   → comparison ( ( "==" | "!=" | "is" ) comparison )*
//! comparison → term ( ( "<" | "<=" | ">" | ">=" ) term )*
//! term       → factor ( ( "+" | "-" ) factor )*
//! factor     → unary ( ( "*" | "/" | "%" ) unary )*
//! unary      → ( "!" | "-" ) unary | postfix
//! postfix    → primary ( "(" arguments? ")" )*
//! primary    → NUMBER | STRING | "true" | "false" | "null"
//!            | IDENT | "(" expression ")"
//! arguments  → expression ( "," expression )*
//! ```

use super::Parser;
use super::error::ParseError;
use crate::ast::{BinaryOp, LiteralValue, NodeId, UnaryOp};
use crate::token::TokenKind;

impl<'src> Parser<'src> {
    /// Parses one expression.
    pub(super) fn expression(&mut self) -> Result<NodeId, ParseError> {
        self.or_expression()
    }

    fn or_expression(&mut self) -> Result<NodeId, ParseError> {
        let mut left = self.and_expression()?;
        while self.match_token(TokenKind::OrOr) {
            let op_token = self.previous;
            let right = self.and_expression()?;
            let result = self.arena.binary(BinaryOp::LogicalOr, left, right, &op_token);
            left = self.node(result)?;
        }
        Ok(left)
    }

    fn and_expression(&mut self) -> Result<NodeId, ParseError> {
        let mut left = self.equality()?;
        while self.match_token(TokenKind::AndAnd) {
            let op_token = self.previous;
            let right = self.equality()?;
            let result = self.arena.binary(BinaryOp::LogicalAnd, left, right, &op_token);
            left = self.node(result)?;
        }
        Ok(left)
    }

    fn equality(&mut self) -> Result<NodeId, ParseError> {
        let mut left = self.comparison()?;
        loop {
            let op = match self.current.kind {
                TokenKind::EqualEqual => BinaryOp::Equal,
                TokenKind::BangEqual => BinaryOp::NotEqual,
                TokenKind::Is => BinaryOp::Is,
                _ => break,
            };
            self.advance();
            let op_token = self.previous;
            let right = self.comparison()?;
            let result = self.arena.binary(op, left, right, &op_token);
            left = self.node(result)?;
        }
        Ok(left)
    }

    fn comparison(&mut self) -> Result<NodeId, ParseError> {
        let mut left = self.term()?;
        loop {
            let op = match self.current.kind {
                TokenKind::LessThan => BinaryOp::LessThan,
                TokenKind::LessEqual => BinaryOp::LessEqual,
                TokenKind::GreaterThan => BinaryOp::GreaterThan,
                TokenKind::GreaterEqual => BinaryOp::GreaterEqual,
                _ => break,
            };
            self.advance();
            let op_token = self.previous;
            let right = self.term()?;
            let result = self.arena.binary(op, left, right, &op_token);
            left = self.node(result)?;
        }
        Ok(left)
    }

    fn term(&mut self) -> Result<NodeId, ParseError> {
        let mut left = self.factor()?;
        loop {
            let op = match self.current.kind {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                _ => break,
            };
            self.advance();
            let op_token = self.previous;
            let right = self.factor()?;
            let result = self.arena.binary(op, left, right, &op_token);
            left = self.node(result)?;
        }
        Ok(left)
    }

    fn factor(&mut self) -> Result<NodeId, ParseError> {
        let mut left = self.unary()?;
        loop {
            let op = match self.current.kind {
                TokenKind::Star => BinaryOp::Mul,
                TokenKind::Slash => BinaryOp::Div,
                TokenKind::Percent => BinaryOp::Mod,
                _ => break,
            };
            self.advance();
            let op_token = self.previous;
            let right = self.unary()?;
            let result = self.arena.binary(op, left, right, &op_token);
            left = self.node(result)?;
        }
        Ok(left)
    }

    fn unary(&mut self) -> Result<NodeId, ParseError> {
        let op = match self.current.kind {
            TokenKind::Bang => Some(UnaryOp::Not),
            TokenKind::Minus => Some(UnaryOp::Neg),
            _ => None,
        };
        if let Some(op) = op {
            self.advance();
            let op_token = self.previous;
            let operand = self.unary()?;
            let result = self.arena.unary(op, operand, &op_token);
            return self.node(result);
        }
        self.postfix()
    }

    /// Parses a primary expression followed by any number of call suffixes,
    /// so chained calls like `f(1)(2)` nest left to right.
    fn postfix(&mut self) -> Result<NodeId, ParseError> {
        let mut expr = self.primary()?;
        while self.match_token(TokenKind::LeftParen) {
            let paren = self.previous;
            let arguments = self.arguments()?;
            self.consume(TokenKind::RightParen, "Expected ')' after arguments")?;
            let result = self.arena.call(expr, arguments, &paren);
            expr = self.node(result)?;
        }
        Ok(expr)
    }

    /// Parses a possibly empty comma-separated argument list. A trailing
    /// comma is not accepted: after a comma another expression is required.
    fn arguments(&mut self) -> Result<Vec<NodeId>, ParseError> {
        let mut arguments = Vec::new();
        if !self.check(TokenKind::RightParen) {
            loop {
                arguments.push(self.expression()?);
                if !self.match_token(TokenKind::Comma) {
                    break;
                }
            }
        }
        Ok(arguments)
    }

    fn primary(&mut self) -> Result<NodeId, ParseError> {
        let token = self.current;
        match token.kind {
            TokenKind::Number => {
                self.advance();
                let value: f64 = match token.lexeme.parse() {
                    Ok(value) => value,
                    Err(_) => {
                        return Err(self.report(ParseError::invalid_expression(
                            "Invalid numeric literal",
                            &token,
                        )));
                    }
                };
                let result = self.arena.literal(LiteralValue::Number(value), &token);
                self.node(result)
            }
            TokenKind::String => {
                self.advance();
                // The lexer guarantees both quotes are present.
                let value = &token.lexeme[1..token.lexeme.len() - 1];
                let result = self
                    .arena
                    .literal(LiteralValue::Str(value.to_string()), &token);
                self.node(result)
            }
            TokenKind::True | TokenKind::False => {
                self.advance();
                let value = token.kind == TokenKind::True;
                let result = self.arena.literal(LiteralValue::Bool(value), &token);
                self.node(result)
            }
            TokenKind::Null => {
                self.advance();
                let result = self.arena.literal(LiteralValue::Null, &token);
                self.node(result)
            }
            TokenKind::Identifier => {
                self.advance();
                let result = self.arena.identifier(token.lexeme, &token);
                self.node(result)
            }
            TokenKind::LeftParen => {
                self.advance();
                let expr = self.expression()?;
                self.consume(TokenKind::RightParen, "Expected ')' after expression")?;
                Ok(expr)
            }
            _ => {
                let error =
                    self.report(ParseError::invalid_expression("Expected expression", &token));
                // Consume the offending token so recovery always makes
                // progress, even when it sits right after a synchronization
                // point.
                self.advance();
                Err(error)
            }
        }
    }
}
