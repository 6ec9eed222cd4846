use crate::{
    ast::{
        ast::Statement,
        expressions::Identifier,
        statements::{ExpressionStatement, LetStatement, ReturnStatement},
    },
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::Precedence},
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Option<Statement> {
    match parser.current_token_kind() {
        TokenKind::Let => parse_let_stmt(parser),
        TokenKind::Return => parse_return_stmt(parser),
        _ => parse_expression_stmt(parser),
    }
}

/// Consumes an optional trailing `;`.
fn skip_semicolon(parser: &mut Parser) {
    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.next_token();
    }
}

pub fn parse_let_stmt(parser: &mut Parser) -> Option<Statement> {
    let mut stmt = LetStatement::new(parser.current_token().clone());

    if !parser.expect_peek(TokenKind::Identifier) {
        return None;
    }
    stmt.name = Some(Identifier::new(parser.current_token().clone()));

    if !parser.expect_peek(TokenKind::Assignment) {
        return None;
    }
    parser.next_token();

    stmt.value = parse_expr(parser, Precedence::Lowest);
    skip_semicolon(parser);

    Some(stmt.into())
}

pub fn parse_return_stmt(parser: &mut Parser) -> Option<Statement> {
    let mut stmt = ReturnStatement::new(parser.current_token().clone());
    parser.next_token();

    stmt.return_value = parse_expr(parser, Precedence::Lowest);
    skip_semicolon(parser);

    Some(stmt.into())
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Option<Statement> {
    let mut stmt = ExpressionStatement::new(parser.current_token().clone());

    stmt.expression = parse_expr(parser, Precedence::Lowest);
    skip_semicolon(parser);

    Some(stmt.into())
}
