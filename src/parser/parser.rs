//! Parser state and entry points.
//!
//! The parser pulls tokens from a [`Scanner`] on demand and keeps exactly
//! two of them: the token being examined and one token of lookahead.
//! Expressions are parsed with a Pratt parser driven by lookup tables:
//! - NUD (null denotation) handlers for tokens that start an expression
//! - LED (left denotation) handlers for tokens that continue one
//! - Binding powers for operator precedence
//!
//! Problems in the input never abort the parse. Each one is recorded as a
//! diagnostic and the statement loop resumes at the next token.

use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::ast::Program,
    errors::errors::Error,
    lexer::{
        lexer::Scanner,
        tokens::{Token, TokenKind},
    },
    MK_TOKEN,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, LEDHandler, LEDLookup, NUDHandler, NUDLookup, Precedence,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Source of tokens, pulled one at a time
    scanner: Scanner,
    /// The token being examined
    current_token: Token,
    /// One token of lookahead
    peek_token: Token,
    /// Diagnostics in detection order
    errors: Vec<Error>,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for infix binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a parser with the default handler tables and both lookahead
    /// slots primed from `scanner`.
    pub fn new(scanner: Scanner) -> Self {
        let mut parser = Parser {
            scanner,
            current_token: MK_TOKEN!(TokenKind::EOF, ""),
            peek_token: MK_TOKEN!(TokenKind::EOF, ""),
            errors: vec![],
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        parser.next_token();
        parser.next_token();
        parser
    }

    /// Shifts the lookahead token into the current slot and scans a new one.
    pub fn next_token(&mut self) {
        let next = self.scanner.next_token();
        self.current_token = std::mem::replace(&mut self.peek_token, next);
    }

    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek_token
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.is(kind)
    }

    /// Advances if the lookahead token is `kind`. Otherwise records a
    /// diagnostic and leaves both slots untouched.
    pub fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_token_is(kind) {
            self.next_token();
            true
        } else {
            self.push_error(Error::UnexpectedToken {
                expected: kind,
                got: self.peek_token.kind,
            });
            false
        }
    }

    /// Binding power of the lookahead token as an infix operator.
    pub fn peek_precedence(&self) -> Precedence {
        self.binding_power_lookup
            .get(&self.peek_token.kind)
            .copied()
            .unwrap_or(Precedence::Lowest)
    }

    /// Binding power of the current token as an infix operator.
    pub fn current_precedence(&self) -> Precedence {
        self.binding_power_lookup
            .get(&self.current_token.kind)
            .copied()
            .unwrap_or(Precedence::Lowest)
    }

    pub fn push_error(&mut self, error: Error) {
        debug!(error = %error, "parse error");
        self.errors.push(error);
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    /// Returns the NUD handler registered for `kind`, if any.
    pub fn get_nud(&self, kind: TokenKind) -> Option<NUDHandler> {
        self.nud_lookup.get(&kind).copied()
    }

    /// Returns the LED handler registered for `kind`, if any.
    pub fn get_led(&self, kind: TokenKind) -> Option<LEDHandler> {
        self.led_lookup.get(&kind).copied()
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: Precedence, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `nud_fn` - The handler function for this prefix operator
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Parses statements until EOF. Statements whose parse was aborted are
    /// left out; their diagnostics stay in [`Parser::errors`].
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_token.is(TokenKind::EOF) {
            if let Some(stmt) = parse_stmt(self) {
                debug!(statement = %stmt, "parsed statement");
                program.statements.push(stmt);
            }
            self.next_token();
        }

        debug!(
            statements = program.len(),
            errors = self.errors.len(),
            "finished parsing program"
        );
        program
    }
}

/// Parses `source` into a syntax tree.
///
/// This is the main entry point for parsing. It creates a scanner and a
/// parser, runs the statement loop until EOF and hands back the tree
/// together with every diagnostic found along the way.
///
/// # Returns
///
/// A tuple containing:
/// - The Program (possibly incomplete when diagnostics are present)
/// - The diagnostics, in detection order
pub fn parse(source: &str) -> (Program, Vec<Error>) {
    let mut parser = Parser::new(Scanner::new(source));
    let program = parser.parse_program();

    (program, parser.into_errors())
}
