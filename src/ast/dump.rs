//! Human-readable tree dumping, used by `zen dump` and in tests.

use super::arena::{Arena, NodeId};
use super::node::{LiteralValue, NodeKind};
use std::fmt::Write;

impl Arena {
    /// Renders the subtree rooted at `root` as an indented listing.
    ///
    /// One node per line, children indented two spaces, each line ending
    /// with the node's `line:column`.
    pub fn dump(&self, root: NodeId) -> String {
        let mut out = String::new();
        self.dump_node(&mut out, root, 0);
        out
    }

    fn dump_node(&self, out: &mut String, id: NodeId, depth: usize) {
        let node = self.get(id);
        let indent = "  ".repeat(depth);
        let position = format!("({}:{})", node.line, node.column);

        match &node.kind {
            NodeKind::Literal(value) => {
                let rendered = match value {
                    LiteralValue::Number(n) => format!("{}", n),
                    LiteralValue::Str(s) => format!("{:?}", s),
                    LiteralValue::Bool(b) => format!("{}", b),
                    LiteralValue::Null => "null".to_string(),
                };
                let _ = writeln!(out, "{}Literal {} {}", indent, rendered, position);
            }
            NodeKind::Identifier { name } => {
                let _ = writeln!(out, "{}Identifier '{}' {}", indent, name, position);
            }
            NodeKind::Binary { op, left, right } => {
                let _ = writeln!(out, "{}Binary '{}' {}", indent, op, position);
                self.dump_node(out, *left, depth + 1);
                self.dump_node(out, *right, depth + 1);
            }
            NodeKind::Unary { op, operand } => {
                let _ = writeln!(out, "{}Unary '{}' {}", indent, op, position);
                self.dump_node(out, *operand, depth + 1);
            }
            NodeKind::Call { callee, arguments } => {
                let _ = writeln!(out, "{}Call {}", indent, position);
                self.dump_node(out, *callee, depth + 1);
                for arg in arguments {
                    self.dump_node(out, *arg, depth + 1);
                }
            }
            NodeKind::VarDecl {
                name,
                ty,
                is_const,
                initializer,
            } => {
                let keyword = if *is_const { "const" } else { "let" };
                let _ = writeln!(
                    out,
                    "{}VarDecl {} '{}': {} {}",
                    indent, keyword, name, ty, position
                );
                if let Some(init) = initializer {
                    self.dump_node(out, *init, depth + 1);
                }
            }
            NodeKind::FuncDecl {
                name,
                params,
                return_type,
                body,
            } => {
                let mut signature = String::new();
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        signature.push_str(", ");
                    }
                    let _ = write!(signature, "{}: {}", param.name, param.ty);
                }
                let _ = writeln!(
                    out,
                    "{}FuncDecl '{}' ({}) -> {} {}",
                    indent, name, signature, return_type, position
                );
                self.dump_node(out, *body, depth + 1);
            }
            NodeKind::Return { value } => {
                let _ = writeln!(out, "{}Return {}", indent, position);
                if let Some(value) = value {
                    self.dump_node(out, *value, depth + 1);
                }
            }
            NodeKind::Block { statements } => {
                let _ = writeln!(out, "{}Block {}", indent, position);
                for stmt in statements {
                    self.dump_node(out, *stmt, depth + 1);
                }
            }
            NodeKind::ExprStmt { expression } => {
                let _ = writeln!(out, "{}ExprStmt {}", indent, position);
                self.dump_node(out, *expression, depth + 1);
            }
            NodeKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                let _ = writeln!(out, "{}If {}", indent, position);
                self.dump_node(out, *condition, depth + 1);
                self.dump_node(out, *then_branch, depth + 1);
                if let Some(else_branch) = else_branch {
                    self.dump_node(out, *else_branch, depth + 1);
                }
            }
            NodeKind::While { condition, body } => {
                let _ = writeln!(out, "{}While {}", indent, position);
                self.dump_node(out, *condition, depth + 1);
                self.dump_node(out, *body, depth + 1);
            }
            NodeKind::For {
                variable,
                iterable,
                body,
            } => {
                let _ = writeln!(out, "{}For '{}' {}", indent, variable, position);
                self.dump_node(out, *iterable, depth + 1);
                self.dump_node(out, *body, depth + 1);
            }
            NodeKind::Program { declarations } => {
                let _ = writeln!(out, "{}Program {}", indent, position);
                for decl in declarations {
                    self.dump_node(out, *decl, depth + 1);
                }
            }
        }
    }
}
