use std::fmt::Display;

use crate::lexer::tokens::{Token, TokenKind};

use super::ast::{require_kind, Expression, Node};

// LITERALS

/// Identifier
/// A name reference, e.g. the `x` in `x + 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

impl Identifier {
    pub fn new(token: Token) -> Self {
        require_kind("Identifier", &token, &[TokenKind::Identifier]);
        let value = token.literal.clone();
        Identifier { token, value }
    }
}

impl Node for Identifier {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Integer Literal
/// `value` is `None` until the literal text has been parsed successfully.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: Option<i64>,
}

impl IntegerLiteral {
    pub fn new(token: Token) -> Self {
        require_kind("IntegerLiteral", &token, &[TokenKind::Int]);
        IntegerLiteral { token, value: None }
    }
}

impl Node for IntegerLiteral {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for IntegerLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token.literal)
    }
}

// COMPLEX

/// Prefix Expression
/// A unary operator applied to one operand. Renders as `(<op><operand>)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpression {
    pub token: Token,
    pub operator: String,
    pub right: Box<Expression>,
}

impl PrefixExpression {
    pub fn new(token: Token, right: Expression) -> Self {
        require_kind("PrefixExpression", &token, &[TokenKind::Not, TokenKind::Dash]);
        PrefixExpression {
            operator: token.literal.clone(),
            token,
            right: Box::new(right),
        }
    }
}

impl Node for PrefixExpression {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for PrefixExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}{})", self.operator, self.right)
    }
}

/// Infix Expression
/// A binary operator between two operands. Renders as `(<left> <op> <right>)`.
#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpression {
    pub token: Token,
    pub left: Box<Expression>,
    pub operator: String,
    pub right: Box<Expression>,
}

pub const INFIX_OPERATORS: [TokenKind; 8] = [
    TokenKind::Plus,
    TokenKind::Dash,
    TokenKind::Star,
    TokenKind::Slash,
    TokenKind::Less,
    TokenKind::Greater,
    TokenKind::Equals,
    TokenKind::NotEquals,
];

impl InfixExpression {
    pub fn new(token: Token, left: Expression, right: Expression) -> Self {
        require_kind("InfixExpression", &token, &INFIX_OPERATORS);
        InfixExpression {
            operator: token.literal.clone(),
            token,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

impl Node for InfixExpression {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for InfixExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}
