//! Diagnostics produced while parsing.
//!
//! The parser never stops at the first defect; it records one of these
//! per problem and keeps going. This module defines:
//!
//! - The diagnostic enum and its exact message text
//! - A lexical/syntax/expression classification
//! - Optional suggestions shown by the command-line driver

pub mod errors;
