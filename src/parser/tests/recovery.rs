//! Panic-mode resynchronization tests.
//!
//! After an error the parser must suppress cascading diagnostics, skip to a
//! statement boundary, and keep going. The result is always a program node;
//! malformed declarations are simply missing from it.

use super::*;

#[test]
fn test_parser_recovers_at_semicolon() {
    let result = parse("let = 1;\nlet y: i32 = 2;");
    assert!(!result.success);
    // One diagnostic for the bad declaration, none for the good one.
    assert_eq!(result.sink.len(), 1);
    // The malformed declaration is dropped; the good one survives.
    let decls = declarations(&result);
    assert_eq!(decls.len(), 1);
    assert!(matches!(
        &result.arena[decls[0]].kind,
        NodeKind::VarDecl { name, .. } if name == "y"
    ));
}

#[test]
fn test_parser_recovers_at_declaration_keyword() {
    // No semicolon to stop at: recovery stops in front of `func`.
    let result = parse("let = oops\nfunc still_here() { }");
    assert!(!result.success);
    let decls = declarations(&result);
    assert_eq!(decls.len(), 1);
    assert!(matches!(
        &result.arena[decls[0]].kind,
        NodeKind::FuncDecl { name, .. } if name == "still_here"
    ));
}

#[test]
fn test_errors_suppressed_until_resynchronization() {
    // Everything between the first error and the `;` is part of the same
    // panic region and must not produce further diagnostics.
    let result = parse("let = 1 2 3;");
    assert!(!result.success);
    assert_eq!(result.sink.len(), 1);
}

#[test]
fn test_lexical_error_inside_resync_span_is_suppressed() {
    // The lone `&` lexes as an error token, but it sits inside the panic
    // region of the bad `let`, so it must not add a second diagnostic.
    let result = parse("let = 1 & 2;");
    assert!(!result.success);
    assert_eq!(result.sink.len(), 1);
    assert!(declarations(&result).is_empty());
}

#[test]
fn test_independent_errors_each_reported() {
    let result = parse("func f() { let = 1; }\nfunc g() { let = 2; }");
    assert!(!result.success);
    assert_eq!(result.sink.len(), 2);
    // Both functions survive with empty bodies: the bad statements were
    // dropped inside their blocks.
    let decls = declarations(&result);
    assert_eq!(decls.len(), 2);
    for decl in decls {
        let NodeKind::FuncDecl { body, .. } = &result.arena[*decl].kind else {
            panic!("expected func decl");
        };
        let NodeKind::Block { statements } = &result.arena[*body].kind else {
            panic!("expected block body");
        };
        assert!(statements.is_empty());
    }
}

#[test]
fn test_error_at_end_still_returns_tree() {
    let result = parse("let x = ");
    assert!(!result.success);
    assert_eq!(result.sink.len(), 1);
    assert!(declarations(&result).is_empty());
}

#[test]
fn test_lexical_error_does_not_derail_declaration() {
    // The `#` is reported and skipped inside advance(); the declaration
    // around it still parses.
    let result = parse("let # x = 1;");
    assert!(!result.success);
    assert_eq!(result.sink.len(), 1);
    let decls = declarations(&result);
    assert_eq!(decls.len(), 1);
    assert!(matches!(
        &result.arena[decls[0]].kind,
        NodeKind::VarDecl { name, .. } if name == "x"
    ));
}

#[test]
fn test_recovery_clears_panic_for_later_errors() {
    // Two bad declarations separated by a semicolon boundary: the second
    // error must be reported after the first recovery.
    let result = parse("let = 1;\nlet = 2;");
    assert!(!result.success);
    assert_eq!(result.sink.len(), 2);
    assert!(declarations(&result).is_empty());
}

#[test]
fn test_garbage_input_terminates() {
    let result = parse("@@@ ${ ?? .. [ ] -> += #");
    assert!(!result.success);
    assert!(declarations(&result).is_empty());
}

#[test]
fn test_unclosed_block_reports_and_returns() {
    let result = parse("func f() {\n  let x = 1;\n");
    assert!(!result.success);
    let error = result.first_error.expect("expected an error");
    assert_eq!(error.message(), "Expected '}' after block");
}
