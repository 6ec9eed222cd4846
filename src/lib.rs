#![allow(clippy::module_inception)]

//! Front end of the ponkey language: source text is scanned into tokens and
//! parsed into a syntax tree, together with every diagnostic found on the way.

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Formats a diagnostic for the terminal.
///
/// ```text
/// Error: UnexpectedToken (a let binding needs `=` after its name)
///   expected next token to be =, got INT instead
/// ```
pub fn display_error(error: &Error) -> String {
    let header = if let ErrorTip::None = error.get_tip() {
        format!("Error: {}", error.get_error_name())
    } else {
        format!("Error: {} ({})", error.get_error_name(), error.get_tip())
    };

    format!("{}\n  {}", header, error)
}
