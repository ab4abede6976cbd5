//! Type annotation parsing.

use super::Parser;
use super::error::ParseError;
use crate::ast::Type;
use crate::token::TokenKind;

impl<'src> Parser<'src> {
    /// Parses a type annotation.
    ///
    /// Only the five type keywords are accepted; anything else in type
    /// position is a parse error.
    ///
    /// # Grammar
    ///
    /// ```text
    /// type → "i32" | "f64" | "string" | "bool" | "void"
    /// ```
    pub(super) fn type_annotation(&mut self) -> Result<Type, ParseError> {
        let ty = match self.current.kind {
            TokenKind::TypeI32 => Type::I32,
            TokenKind::TypeF64 => Type::F64,
            TokenKind::TypeString => Type::String,
            TokenKind::TypeBool => Type::Bool,
            TokenKind::TypeVoid => Type::Void,
            _ => {
                let token = self.current;
                return Err(self.report(ParseError::missing_token("Expected type name", &token)));
            }
        };
        self.advance();
        Ok(ty)
    }
}
