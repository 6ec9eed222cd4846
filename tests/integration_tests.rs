//! Integration tests for the front end.
//!
//! These tests run source text through the scanner and parser via the
//! public API and check the resulting tree, its rendering and the
//! diagnostics list.

use ponkey::{
    ast::ast::{Expression, Node, Statement},
    display_error,
    errors::errors::ErrorCategory,
    lexer::{lexer::tokenize, tokens::TokenKind},
    parser::parser::parse,
};

#[test]
fn test_parse_simple_program() {
    let source = "
        let five = 5;
        let ten = 10;
        let result = five * -ten + 2;
        return result == 48;
    ";
    let (program, errors) = parse(source);

    assert!(errors.is_empty(), "{:?}", errors);
    assert_eq!(program.len(), 4);
    assert_eq!(program.token_literal(), "let");

    let rendered: Vec<String> = program.iter().map(|stmt| stmt.string()).collect();
    assert_eq!(
        rendered,
        vec![
            "let five = 5;",
            "let ten = 10;",
            "let result = ((five * (-ten)) + 2);",
            "return (result == 48);",
        ]
    );
}

#[test]
fn test_rendering_reparses_to_same_tree() {
    let (program, errors) = parse("let x = -a * b + c / (d - e); x != 3 < 4;");
    assert!(errors.is_empty());

    let (reparsed, errors) = parse(&program.string());
    assert!(errors.is_empty(), "{:?}", errors);
    assert_eq!(reparsed.string(), program.string());
}

#[test]
fn test_expression_statement_program() {
    let (program, errors) = parse("5;");

    assert!(errors.is_empty());
    assert_eq!(program.len(), 1);
    match &program.statements[0] {
        Statement::Expression(stmt) => match &stmt.expression {
            Some(Expression::IntegerLiteral(literal)) => assert_eq!(literal.value, Some(5)),
            other => panic!("expected integer literal, got {:?}", other),
        },
        other => panic!("expected expression statement, got {:?}", other),
    }
}

#[test]
fn test_keywords_never_become_identifiers() {
    let tokens = tokenize("let func true false if else return");
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Let,
            TokenKind::Function,
            TokenKind::True,
            TokenKind::False,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::Return,
            TokenKind::EOF,
        ]
    );
    assert!(!kinds.contains(&TokenKind::Identifier));
}

#[test]
fn test_unsupported_keyword_in_expression_position() {
    let (_, errors) = parse("true;");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].to_string(), "no prefix parse function for true found");
    assert_eq!(errors[0].category(), ErrorCategory::Expression);
}

#[test]
fn test_diagnostic_categories() {
    let (_, errors) = parse("let x 1; $; 99999999999999999999;");

    let categories: Vec<ErrorCategory> = errors.iter().map(|e| e.category()).collect();
    assert_eq!(
        categories,
        vec![
            ErrorCategory::Syntax,
            ErrorCategory::Lexical,
            ErrorCategory::Expression,
        ]
    );
}

#[test]
fn test_partial_program_is_still_returned() {
    let (program, errors) = parse("let x 5; let y = 7; return y;");

    assert_eq!(errors.len(), 1);
    let rendered: Vec<String> = program.iter().map(|stmt| stmt.string()).collect();
    assert_eq!(rendered, vec!["5", "let y = 7;", "return y;"]);
}

#[test]
fn test_display_error_output() {
    let (_, errors) = parse("let 5;");

    assert_eq!(
        display_error(&errors[0]),
        "Error: UnexpectedToken (`INT` cannot be used as a binding name)\n  expected next token to be IDENT, got INT instead"
    );
}
