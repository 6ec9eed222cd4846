use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::TokenKind;

/// A parse diagnostic. `Display` yields the exact message reported to callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("expected next token to be {expected}, got {got} instead")]
    UnexpectedToken { expected: TokenKind, got: TokenKind },
    #[error("no prefix parse function for {kind} found")]
    MissingPrefixHandler { kind: TokenKind },
    #[error("could not parse {token} as integer")]
    NumberParseError { token: String },
}

/// Which stage of the front end a diagnostic originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// An unrecognised character reached the expression parser as `ILLEGAL`.
    Lexical,
    /// A required token was missing at a fixed grammar position.
    Syntax,
    /// An expression could not be started, or a literal could not be converted.
    Expression,
}

impl Error {
    pub fn get_error_name(&self) -> &str {
        match self {
            Error::UnexpectedToken { .. } => "UnexpectedToken",
            Error::MissingPrefixHandler { kind: TokenKind::Illegal } => "UnrecognisedToken",
            Error::MissingPrefixHandler { .. } => "MissingPrefixHandler",
            Error::NumberParseError { .. } => "NumberParseError",
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::UnexpectedToken { .. } => ErrorCategory::Syntax,
            Error::MissingPrefixHandler { kind: TokenKind::Illegal } => ErrorCategory::Lexical,
            Error::MissingPrefixHandler { .. } | Error::NumberParseError { .. } => {
                ErrorCategory::Expression
            }
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match self {
            Error::UnexpectedToken { expected: TokenKind::Assignment, .. } => {
                ErrorTip::Suggestion(String::from("a let binding needs `=` after its name"))
            }
            Error::UnexpectedToken { expected: TokenKind::Identifier, got } => ErrorTip::Suggestion(
                format!("`{}` cannot be used as a binding name", got),
            ),
            Error::UnexpectedToken { .. } => ErrorTip::None,
            Error::MissingPrefixHandler { kind: TokenKind::Illegal } => ErrorTip::Suggestion(
                String::from("the source contains a character outside the language"),
            ),
            Error::MissingPrefixHandler { kind } => {
                ErrorTip::Suggestion(format!("an expression cannot start with `{}`", kind))
            }
            Error::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}
