use std::fmt::{Debug, Display};

use crate::lexer::tokens::{Token, TokenKind};

use super::{
    expressions::{Identifier, InfixExpression, IntegerLiteral, PrefixExpression},
    statements::{ExpressionStatement, LetStatement, ReturnStatement},
};

/// Node Trait
///
/// Capabilities shared by every syntax-tree node. `Display` is the canonical
/// re-rendering of the node as source text; children render recursively.
pub trait Node: Display + Debug {
    /// Returns the literal text of the token that introduced the node.
    fn token_literal(&self) -> &str;
    /// Renders the node as (not necessarily format-preserving) source text.
    fn string(&self) -> String {
        self.to_string()
    }
}

/// Panics unless `token` is one of `kinds`.
///
/// Node constructors call this: a mismatch means the parser itself is
/// building the tree incorrectly, not that the input is malformed.
pub(crate) fn require_kind(node: &str, token: &Token, kinds: &[TokenKind]) {
    if !token.is_one_of_many(kinds) {
        panic!(
            "{} cannot be built from a {} token ({:?})",
            node, token.kind, token.literal
        );
    }
}

/// Statement Types
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        match self {
            Statement::Let(stmt) => stmt.token_literal(),
            Statement::Return(stmt) => stmt.token_literal(),
            Statement::Expression(stmt) => stmt.token_literal(),
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Statement::Let(stmt) => write!(f, "{}", stmt),
            Statement::Return(stmt) => write!(f, "{}", stmt),
            Statement::Expression(stmt) => write!(f, "{}", stmt),
        }
    }
}

impl From<LetStatement> for Statement {
    fn from(stmt: LetStatement) -> Self {
        Statement::Let(stmt)
    }
}

impl From<ReturnStatement> for Statement {
    fn from(stmt: ReturnStatement) -> Self {
        Statement::Return(stmt)
    }
}

impl From<ExpressionStatement> for Statement {
    fn from(stmt: ExpressionStatement) -> Self {
        Statement::Expression(stmt)
    }
}

/// Expression Types
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    IntegerLiteral(IntegerLiteral),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(expr) => expr.token_literal(),
            Expression::IntegerLiteral(expr) => expr.token_literal(),
            Expression::Prefix(expr) => expr.token_literal(),
            Expression::Infix(expr) => expr.token_literal(),
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Identifier(expr) => write!(f, "{}", expr),
            Expression::IntegerLiteral(expr) => write!(f, "{}", expr),
            Expression::Prefix(expr) => write!(f, "{}", expr),
            Expression::Infix(expr) => write!(f, "{}", expr),
        }
    }
}

impl From<Identifier> for Expression {
    fn from(expr: Identifier) -> Self {
        Expression::Identifier(expr)
    }
}

impl From<IntegerLiteral> for Expression {
    fn from(expr: IntegerLiteral) -> Self {
        Expression::IntegerLiteral(expr)
    }
}

impl From<PrefixExpression> for Expression {
    fn from(expr: PrefixExpression) -> Self {
        Expression::Prefix(expr)
    }
}

impl From<InfixExpression> for Expression {
    fn from(expr: InfixExpression) -> Self {
        Expression::Infix(expr)
    }
}

/// Root of every syntax tree: statements in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Self {
        Program { statements }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Statement> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Node for Program {
    /// The first statement's token literal, or `""` for an empty program.
    fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map_or("", |stmt| stmt.token_literal())
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
