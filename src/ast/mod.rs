/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the syntax tree structure
///
/// Submodules:
/// - ast: Node trait, the Statement/Expression sum types and Program
/// - expressions: Identifier, integer literal, prefix and infix expressions
/// - statements: let, return and expression statements
pub mod ast;
pub mod expressions;
pub mod statements;
