use crate::{
    ast::{
        ast::Expression,
        expressions::{Identifier, InfixExpression, IntegerLiteral, PrefixExpression},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{lookups::Precedence, parser::Parser};

pub fn parse_expr(parser: &mut Parser, precedence: Precedence) -> Option<Expression> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = parser.get_nud(token_kind) else {
        parser.push_error(Error::MissingPrefixHandler { kind: token_kind });
        return None;
    };

    let mut left = nud(parser)?;

    // While the lookahead binds tighter than the caller, let it take `left` as its lhs
    while !parser
        .peek_token()
        .is_one_of_many(&[TokenKind::Semicolon, TokenKind::EOF])
        && precedence < parser.peek_precedence()
    {
        let Some(led) = parser.get_led(parser.peek_token().kind) else {
            return Some(left);
        };

        parser.next_token();
        left = led(parser, left)?;
    }

    Some(left)
}

pub fn parse_identifier(parser: &mut Parser) -> Option<Expression> {
    Some(Identifier::new(parser.current_token().clone()).into())
}

pub fn parse_integer_literal(parser: &mut Parser) -> Option<Expression> {
    let mut literal = IntegerLiteral::new(parser.current_token().clone());

    match literal.token.literal.parse::<i64>() {
        Ok(value) => literal.value = Some(value),
        Err(_) => parser.push_error(Error::NumberParseError {
            token: literal.token.literal.clone(),
        }),
    }

    Some(literal.into())
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Option<Expression> {
    let operator_token = parser.current_token().clone();
    parser.next_token();

    let rhs = parse_expr(parser, Precedence::Prefix)?;

    Some(PrefixExpression::new(operator_token, rhs).into())
}

pub fn parse_infix_expr(parser: &mut Parser, left: Expression) -> Option<Expression> {
    let operator_token = parser.current_token().clone();
    let precedence = parser.current_precedence();
    parser.next_token();

    // Recursing at the operator's own precedence keeps equal-precedence chains left-associative
    let right = parse_expr(parser, precedence)?;

    Some(InfixExpression::new(operator_token, left, right).into())
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Option<Expression> {
    parser.next_token();
    let expr = parse_expr(parser, Precedence::Lowest)?;

    if !parser.expect_peek(TokenKind::CloseParen) {
        return None;
    }

    Some(expr)
}
