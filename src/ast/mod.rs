//! Abstract Syntax Tree definitions for the Zen programming language.
//!
//! This module defines the data structures that represent parsed Zen
//! programs. The tree is produced by the [`crate::parser`] and handed to
//! later phases (semantic analysis, code generation) as a whole.
//!
//! # Structure
//!
//! All nodes live in a single [`Arena`] owned by the parse. Nodes refer to
//! their children through [`NodeId`] handles rather than owning pointers, and
//! the whole tree is released in one step when the arena is dropped. The tree
//! is never mutated after construction.
//!
//! - [`Arena`] - Append-only node storage with one constructor per variant
//! - [`Node`] - A tagged node plus its source position
//! - [`NodeKind`] - The variant data for every kind of node
//! - [`Type`] - Type annotations (`i32`, `f64`, `string`, `bool`, `void`)
//! - [`BinaryOp`] / [`UnaryOp`] - Operator payloads for expression nodes
//!
//! # See Also
//!
//! * [`crate::parser`] - Produces the AST from tokens

mod arena;
mod dump;
mod node;
mod op;
mod types;

#[cfg(test)]
mod tests;

pub use arena::{Arena, ArenaError, NodeId};
pub use node::{LiteralValue, Node, NodeKind, Param};
pub use op::{BinaryOp, UnaryOp};
pub use types::Type;
