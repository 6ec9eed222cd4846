//! Lexical analysis module.
//!
//! This module contains the scanner that converts source text into a
//! stream of tokens for the parser. It handles:
//!
//! - Single- and two-character operators and delimiters
//! - Recognition of keywords and identifiers through the reserved table
//! - Integer literals
//! - `ILLEGAL` tokens for any character outside the language

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
