//! Unit tests for the lexer module.
//!
//! Covers keywords and identifiers, integer literals, one- and
//! two-character operators, illegal characters and end-of-input handling.

use super::{
    lexer::{tokenize, Scanner},
    tokens::{lookup_identifier, Token, TokenKind},
};
use crate::MK_TOKEN;

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("func let true false if else return");

    assert_eq!(tokens[0].kind, TokenKind::Function);
    assert_eq!(tokens[1].kind, TokenKind::Let);
    assert_eq!(tokens[2].kind, TokenKind::True);
    assert_eq!(tokens[3].kind, TokenKind::False);
    assert_eq!(tokens[4].kind, TokenKind::If);
    assert_eq!(tokens[5].kind, TokenKind::Else);
    assert_eq!(tokens[6].kind, TokenKind::Return);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_keyword_prefixes_are_identifiers() {
    let tokens = tokenize("lets returns iff funcs");

    for token in &tokens[..4] {
        assert_eq!(token.kind, TokenKind::Identifier);
    }
    assert_eq!(tokens[0].literal, "lets");
    assert_eq!(lookup_identifier("let"), TokenKind::Let);
    assert_eq!(lookup_identifier("Let"), TokenKind::Identifier);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar_baz _underscore CamelCase");

    assert_eq!(tokens[0], MK_TOKEN!(TokenKind::Identifier, "foo"));
    assert_eq!(tokens[1], MK_TOKEN!(TokenKind::Identifier, "bar_baz"));
    assert_eq!(tokens[2], MK_TOKEN!(TokenKind::Identifier, "_underscore"));
    assert_eq!(tokens[3], MK_TOKEN!(TokenKind::Identifier, "CamelCase"));
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_identifier_stops_at_digit() {
    let tokens = tokenize("x1");

    assert_eq!(tokens[0], MK_TOKEN!(TokenKind::Identifier, "x"));
    assert_eq!(tokens[1], MK_TOKEN!(TokenKind::Int, "1"));
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 0 838838 007");

    assert_eq!(tokens[0], MK_TOKEN!(TokenKind::Int, "42"));
    assert_eq!(tokens[1], MK_TOKEN!(TokenKind::Int, "0"));
    assert_eq!(tokens[2], MK_TOKEN!(TokenKind::Int, "838838"));
    assert_eq!(tokens[3], MK_TOKEN!(TokenKind::Int, "007"));
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_number_has_no_sign_or_fraction() {
    let tokens = tokenize("-3.5");

    assert_eq!(tokens[0].kind, TokenKind::Dash);
    assert_eq!(tokens[1], MK_TOKEN!(TokenKind::Int, "3"));
    assert_eq!(tokens[2], MK_TOKEN!(TokenKind::Illegal, "."));
    assert_eq!(tokens[3], MK_TOKEN!(TokenKind::Int, "5"));
}

#[test]
fn test_tokenize_operators() {
    let tokens = tokenize("= + - ! * / < > == !=");

    assert_eq!(tokens[0], MK_TOKEN!(TokenKind::Assignment, "="));
    assert_eq!(tokens[1], MK_TOKEN!(TokenKind::Plus, "+"));
    assert_eq!(tokens[2], MK_TOKEN!(TokenKind::Dash, "-"));
    assert_eq!(tokens[3], MK_TOKEN!(TokenKind::Not, "!"));
    assert_eq!(tokens[4], MK_TOKEN!(TokenKind::Star, "*"));
    assert_eq!(tokens[5], MK_TOKEN!(TokenKind::Slash, "/"));
    assert_eq!(tokens[6], MK_TOKEN!(TokenKind::Less, "<"));
    assert_eq!(tokens[7], MK_TOKEN!(TokenKind::Greater, ">"));
    assert_eq!(tokens[8], MK_TOKEN!(TokenKind::Equals, "=="));
    assert_eq!(tokens[9], MK_TOKEN!(TokenKind::NotEquals, "!="));
    assert_eq!(tokens[10].kind, TokenKind::EOF);
}

#[test]
fn test_two_character_operators_without_spaces() {
    let tokens = tokenize("a==b!=!c");

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::Equals,
            TokenKind::Identifier,
            TokenKind::NotEquals,
            TokenKind::Not,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_trailing_single_character_operators() {
    let tokens = tokenize("x =");
    assert_eq!(tokens[1], MK_TOKEN!(TokenKind::Assignment, "="));

    let tokens = tokenize("!");
    assert_eq!(tokens[0], MK_TOKEN!(TokenKind::Not, "!"));
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_punctuation() {
    let tokens = tokenize("( ) { } , ;");

    assert_eq!(tokens[0].kind, TokenKind::OpenParen);
    assert_eq!(tokens[1].kind, TokenKind::CloseParen);
    assert_eq!(tokens[2].kind, TokenKind::OpenCurly);
    assert_eq!(tokens[3].kind, TokenKind::CloseCurly);
    assert_eq!(tokens[4].kind, TokenKind::Comma);
    assert_eq!(tokens[5].kind, TokenKind::Semicolon);
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_illegal_characters() {
    let tokens = tokenize("let x = @ é;");

    assert_eq!(tokens[3], MK_TOKEN!(TokenKind::Illegal, "@"));
    assert_eq!(tokens[4], MK_TOKEN!(TokenKind::Illegal, "é"));
    assert_eq!(tokens[5].kind, TokenKind::Semicolon);
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_simple_program() {
    let tokens = tokenize("let five = 5;\nlet ten = 10;\n\tfive + ten;\r\n");

    let expected = vec![
        MK_TOKEN!(TokenKind::Let, "let"),
        MK_TOKEN!(TokenKind::Identifier, "five"),
        MK_TOKEN!(TokenKind::Assignment, "="),
        MK_TOKEN!(TokenKind::Int, "5"),
        MK_TOKEN!(TokenKind::Semicolon, ";"),
        MK_TOKEN!(TokenKind::Let, "let"),
        MK_TOKEN!(TokenKind::Identifier, "ten"),
        MK_TOKEN!(TokenKind::Assignment, "="),
        MK_TOKEN!(TokenKind::Int, "10"),
        MK_TOKEN!(TokenKind::Semicolon, ";"),
        MK_TOKEN!(TokenKind::Identifier, "five"),
        MK_TOKEN!(TokenKind::Plus, "+"),
        MK_TOKEN!(TokenKind::Identifier, "ten"),
        MK_TOKEN!(TokenKind::Semicolon, ";"),
        MK_TOKEN!(TokenKind::EOF, ""),
    ];
    assert_eq!(tokens, expected);
}

#[test]
fn test_empty_and_whitespace_input_yield_eof_repeatedly() {
    for source in ["", "   ", " \t\r\n  "] {
        let mut scanner = Scanner::new(source);
        for _ in 0..3 {
            assert_eq!(scanner.next_token(), MK_TOKEN!(TokenKind::EOF, ""));
        }
        assert!(scanner.at_eof());
    }
}

#[test]
fn test_eof_is_idempotent_after_input() {
    let mut scanner = Scanner::new("x");

    assert_eq!(scanner.next_token().kind, TokenKind::Identifier);
    assert_eq!(scanner.next_token().kind, TokenKind::EOF);
    assert_eq!(scanner.next_token().kind, TokenKind::EOF);
}

#[test]
fn test_scanner_iterator_stops_before_eof() {
    let tokens: Vec<Token> = Scanner::new("a + 1").collect();

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[2], MK_TOKEN!(TokenKind::Int, "1"));
}

#[test]
fn test_token_equality_is_kind_and_literal() {
    assert_eq!(Token::new(TokenKind::Int, "5"), MK_TOKEN!(TokenKind::Int, "5"));
    assert_ne!(Token::new(TokenKind::Int, "5"), Token::new(TokenKind::Int, "6"));
    assert_ne!(
        Token::new(TokenKind::Identifier, "let"),
        Token::new(TokenKind::Let, "let")
    );
}

#[test]
fn test_token_display() {
    assert_eq!(
        Token::new(TokenKind::Identifier, "foo").to_string(),
        "Token ( kind: IDENT, literal: foo )"
    );
    assert_eq!(TokenKind::Assignment.to_string(), "=");
    assert_eq!(TokenKind::Int.to_string(), "INT");
    assert_eq!(TokenKind::EOF.to_string(), "EOF");
}
