//! Type annotations for declarations.

use std::fmt;

/// A type annotation in Zen source code.
///
/// Appears on variable declarations, function parameters, and function
/// return types. [`Type::Unknown`] marks a declaration that carried no
/// annotation; a later phase resolves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    /// 32-bit signed integer type (`i32`).
    I32,
    /// 64-bit floating point type (`f64`).
    F64,
    /// UTF-8 string type (`string`).
    String,
    /// Boolean type (`bool`).
    Bool,
    /// The absence of a value (`void`). Default function return type.
    Void,
    /// No annotation was written; left for later phases to infer.
    Unknown,
}

/// Displays the type as it would appear in Zen source code.
impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::I32 => write!(f, "i32"),
            Type::F64 => write!(f, "f64"),
            Type::String => write!(f, "string"),
            Type::Bool => write!(f, "bool"),
            Type::Void => write!(f, "void"),
            Type::Unknown => write!(f, "unknown"),
        }
    }
}
