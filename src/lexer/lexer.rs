use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::MK_TOKEN;

use super::tokens::{lookup_identifier, Token, TokenKind};

lazy_static! {
    static ref IDENTIFIER_RUN: Regex =
        Regex::new("^[a-zA-Z_]+").expect("identifier pattern is valid");
    static ref NUMBER_RUN: Regex = Regex::new("^[0-9]+").expect("number pattern is valid");
}

const WHITESPACE: [char; 4] = [' ', '\t', '\n', '\r'];

/// A cursor over the source text that hands out one token per call.
///
/// `position` is the byte offset of `ch`, the character under the cursor;
/// `ch` is `None` once the input is exhausted.
#[derive(Clone, Debug)]
pub struct Scanner {
    source: String,
    position: usize,
    ch: Option<char>,
}

impl Scanner {
    pub fn new(source: impl Into<String>) -> Scanner {
        let source = source.into();
        let ch = source.chars().next();

        Scanner {
            source,
            position: 0,
            ch,
        }
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.position..]
    }

    pub fn at_eof(&self) -> bool {
        self.ch.is_none()
    }

    fn read_char(&mut self) {
        if let Some(ch) = self.ch {
            self.position += ch.len_utf8();
        }
        self.ch = self.remainder().chars().next();
    }

    fn peek_char(&self) -> Option<char> {
        let mut chars = self.remainder().chars();
        chars.next();
        chars.next()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, Some(ch) if WHITESPACE.contains(&ch)) {
            self.read_char();
        }
    }

    /// Consumes the maximal run matched by `pattern` at the cursor.
    fn read_run(&mut self, pattern: &Regex) -> String {
        let end = pattern.find(self.remainder()).map_or(0, |m| m.end());
        let run = self.remainder()[..end].to_string();

        self.position += end;
        self.ch = self.remainder().chars().next();
        run
    }

    /// Returns `two` if the next character is `second`, `one` otherwise.
    /// Consumes the lookahead character only when the two-character form matches.
    fn either(&mut self, second: char, two: TokenKind, one: TokenKind) -> Token {
        let first = self.ch.unwrap_or_default();

        if self.peek_char() == Some(second) {
            self.read_char();
            MK_TOKEN!(two, format!("{}{}", first, second))
        } else {
            MK_TOKEN!(one, first.to_string())
        }
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let Some(ch) = self.ch else {
            return MK_TOKEN!(TokenKind::EOF, "");
        };

        let token = match ch {
            '=' => self.either('=', TokenKind::Equals, TokenKind::Assignment),
            '!' => self.either('=', TokenKind::NotEquals, TokenKind::Not),
            '+' => MK_TOKEN!(TokenKind::Plus, "+"),
            '-' => MK_TOKEN!(TokenKind::Dash, "-"),
            '*' => MK_TOKEN!(TokenKind::Star, "*"),
            '/' => MK_TOKEN!(TokenKind::Slash, "/"),
            '<' => MK_TOKEN!(TokenKind::Less, "<"),
            '>' => MK_TOKEN!(TokenKind::Greater, ">"),
            ',' => MK_TOKEN!(TokenKind::Comma, ","),
            ';' => MK_TOKEN!(TokenKind::Semicolon, ";"),
            '(' => MK_TOKEN!(TokenKind::OpenParen, "("),
            ')' => MK_TOKEN!(TokenKind::CloseParen, ")"),
            '{' => MK_TOKEN!(TokenKind::OpenCurly, "{"),
            '}' => MK_TOKEN!(TokenKind::CloseCurly, "}"),
            c if c.is_ascii_alphabetic() || c == '_' => {
                let literal = self.read_run(&IDENTIFIER_RUN);
                let token = MK_TOKEN!(lookup_identifier(&literal), literal);
                trace!(kind = %token.kind, literal = %token.literal, "scanned token");
                return token;
            }
            c if c.is_ascii_digit() => {
                let literal = self.read_run(&NUMBER_RUN);
                let token = MK_TOKEN!(TokenKind::Int, literal);
                trace!(kind = %token.kind, literal = %token.literal, "scanned token");
                return token;
            }
            c => MK_TOKEN!(TokenKind::Illegal, c.to_string()),
        };

        self.read_char();
        trace!(kind = %token.kind, literal = %token.literal, "scanned token");
        token
    }
}

/// Yields tokens up to, but not including, the EOF sentinel.
impl Iterator for Scanner {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is(TokenKind::EOF) {
            None
        } else {
            Some(token)
        }
    }
}

/// Scans the whole source, returning every token including the trailing EOF.
pub fn tokenize(source: impl Into<String>) -> Vec<Token> {
    let mut lex = Scanner::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.is(TokenKind::EOF);
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
