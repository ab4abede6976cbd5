//! Unit tests for the AST arena and node constructors.

use super::*;
use crate::token::{Token, TokenKind};

fn token_at(line: u32, column: u32) -> Token<'static> {
    Token::new(TokenKind::Identifier, "x", line, column)
}

#[test]
fn test_arena_starts_empty() {
    let arena = Arena::new();
    assert!(arena.is_empty());
    assert_eq!(arena.len(), 0);
}

#[test]
fn test_literal_constructor() {
    let mut arena = Arena::new();
    let id = arena
        .literal(LiteralValue::Number(42.0), &token_at(3, 9))
        .expect("alloc");
    let node = &arena[id];
    assert_eq!(node.kind, NodeKind::Literal(LiteralValue::Number(42.0)));
    assert_eq!((node.line, node.column), (3, 9));
}

#[test]
fn test_identifier_copies_name() {
    let mut arena = Arena::new();
    let name = String::from("counter");
    let id = arena.identifier(&name, &token_at(1, 1)).expect("alloc");
    drop(name);
    match &arena[id].kind {
        NodeKind::Identifier { name } => assert_eq!(name, "counter"),
        other => panic!("expected identifier, got {:?}", other),
    }
}

#[test]
fn test_binary_node_children() {
    let mut arena = Arena::new();
    let token = token_at(1, 1);
    let left = arena
        .literal(LiteralValue::Number(1.0), &token)
        .expect("alloc");
    let right = arena
        .literal(LiteralValue::Number(2.0), &token)
        .expect("alloc");
    let sum = arena
        .binary(BinaryOp::Add, left, right, &token)
        .expect("alloc");

    match &arena[sum].kind {
        NodeKind::Binary { op, left: l, right: r } => {
            assert_eq!(*op, BinaryOp::Add);
            assert_eq!(*l, left);
            assert_eq!(*r, right);
        }
        other => panic!("expected binary, got {:?}", other),
    }
    // Children were stored before the parent.
    assert!(left.index() < sum.index());
    assert!(right.index() < sum.index());
}

#[test]
fn test_var_decl_defaults() {
    let mut arena = Arena::new();
    let id = arena
        .var_decl("x", Type::Unknown, false, None, &token_at(2, 1))
        .expect("alloc");
    match &arena[id].kind {
        NodeKind::VarDecl {
            name,
            ty,
            is_const,
            initializer,
        } => {
            assert_eq!(name, "x");
            assert_eq!(*ty, Type::Unknown);
            assert!(!is_const);
            assert!(initializer.is_none());
        }
        other => panic!("expected var decl, got {:?}", other),
    }
}

#[test]
fn test_func_decl_owns_params() {
    let mut arena = Arena::new();
    let token = token_at(1, 1);
    let body = arena.block(Vec::new(), &token).expect("alloc");
    let params = vec![
        Param {
            name: "a".to_string(),
            ty: Type::I32,
        },
        Param {
            name: "b".to_string(),
            ty: Type::F64,
        },
    ];
    let id = arena
        .func_decl("add", params, Type::I32, body, &token)
        .expect("alloc");
    match &arena[id].kind {
        NodeKind::FuncDecl { params, .. } => {
            assert_eq!(params.len(), 2);
            assert_eq!(params[0].name, "a");
            assert_eq!(params[1].ty, Type::F64);
        }
        other => panic!("expected func decl, got {:?}", other),
    }
}

#[test]
fn test_program_root_position_defaults() {
    let mut arena = Arena::new();
    let root = arena
        .program(Vec::new(), &Token::synthetic())
        .expect("alloc");
    let node = &arena[root];
    assert_eq!((node.line, node.column), (1, 1));
    assert_eq!(node.kind, NodeKind::Program {
        declarations: Vec::new()
    });
}

#[test]
fn test_arena_grows_past_initial_capacity() {
    let mut arena = Arena::new();
    let token = token_at(1, 1);
    let ids: Vec<_> = (0..100)
        .map(|i| {
            arena
                .literal(LiteralValue::Number(i as f64), &token)
                .expect("alloc")
        })
        .collect();
    assert_eq!(arena.len(), 100);
    // Handles stay valid across growth.
    for (i, id) in ids.iter().enumerate() {
        assert_eq!(
            arena[*id].kind,
            NodeKind::Literal(LiteralValue::Number(i as f64))
        );
    }
}

#[test]
fn test_dump_renders_tree_shape() {
    let mut arena = Arena::new();
    let token = token_at(1, 5);
    let one = arena
        .literal(LiteralValue::Number(1.0), &token)
        .expect("alloc");
    let var = arena
        .var_decl("x", Type::I32, false, Some(one), &token_at(1, 1))
        .expect("alloc");
    let root = arena.program(vec![var], &Token::synthetic()).expect("alloc");

    let dump = arena.dump(root);
    assert!(dump.starts_with("Program (1:1)"));
    assert!(dump.contains("VarDecl let 'x': i32 (1:1)"));
    assert!(dump.contains("Literal 1 (1:5)"));
}

#[test]
fn test_type_display() {
    assert_eq!(Type::I32.to_string(), "i32");
    assert_eq!(Type::F64.to_string(), "f64");
    assert_eq!(Type::String.to_string(), "string");
    assert_eq!(Type::Bool.to_string(), "bool");
    assert_eq!(Type::Void.to_string(), "void");
    assert_eq!(Type::Unknown.to_string(), "unknown");
}

#[test]
fn test_operator_display() {
    assert_eq!(BinaryOp::Add.to_string(), "+");
    assert_eq!(BinaryOp::Is.to_string(), "is");
    assert_eq!(BinaryOp::LogicalOr.to_string(), "||");
    assert_eq!(UnaryOp::Neg.to_string(), "-");
    assert_eq!(UnaryOp::Not.to_string(), "!");
}

#[test]
fn test_arena_error_display() {
    assert_eq!(
        ArenaError.to_string(),
        "out of memory growing the syntax tree arena"
    );
}
