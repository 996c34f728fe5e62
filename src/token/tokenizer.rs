//! Module for breaking tlisp text into tokens.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::VecDeque;
use std::fmt;

use super::token::{Token, TokenKind};
use super::INPUT_NAME;
use crate::error::ErrorKind;


lazy_static! {
    // Terminals of the number and symbol rules, anchored at the current
    // position. number is tried first, so "-5" is a number.
    static ref NUMBER: Regex = Regex::new(r"^-?[0-9]+(\.[0-9]+)?").unwrap();
    static ref SYMBOL: Regex = Regex::new(r"^[-+*/%]").unwrap();
}


/// Accumulates Tokens from string-like input, one line at a time.
///
/// Terminals need not be whitespace-separated: "1+2" yields 1, +, 2.
pub struct Tokenizer {
    line_count: usize,
    tokens: VecDeque<Token>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TokenizeError {
    line: usize,
    col: usize,
    kind: TokenizeErrorKind,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TokenizeErrorKind {
    UnexpectedChar(char),
}


impl Tokenizer {
    pub fn new() -> Self {
        Self {
            line_count: 0,
            tokens: Default::default(),
        }
    }

    pub fn tokenize<S: AsRef<str>>(&mut self, input: S) -> Result<(), TokenizeError> {
        for line in input.as_ref().split('\n') {
            self.tokenize_line(line)?;
        }
        Ok(())
    }

    fn tokenize_line(&mut self, line: &str) -> Result<(), TokenizeError> {
        let mut start: usize = 0;
        let mut col: usize = 0;
        while let Some(c) = line[start..].chars().next() {
            let rest = &line[start..];
            let (token, len) = if c.is_whitespace() {
                start += c.len_utf8();
                col += 1;
                continue;
            } else if let Some(delim) = delimiter(c) {
                (delim, 1)
            } else if let Some(m) = NUMBER.find(rest) {
                (TokenKind::Number(m.as_str().to_string()), m.end())
            } else if let Some(m) = SYMBOL.find(rest) {
                (TokenKind::Symbol(m.as_str().to_string()), m.end())
            } else {
                return Err(TokenizeError {
                    line: self.line_count,
                    col,
                    kind: TokenizeErrorKind::UnexpectedChar(c),
                });
            };

            self.tokens.push_back(Token {
                token,
                line: self.line_count,
                col,
            });
            // Matched terminals are ASCII, so bytes == chars here.
            start += len;
            col += len;
        }

        self.line_count += 1;
        Ok(())
    }

}

fn delimiter(c: char) -> Option<TokenKind> {
    match c {
        '(' => Some(TokenKind::LeftParen),
        '{' => Some(TokenKind::LeftBrace),
        ')' => Some(TokenKind::RightParen),
        '}' => Some(TokenKind::RightBrace),
        _ => None,
    }
}


impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Tokenizer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.tokens.pop_front()
    }
}


impl ErrorKind for TokenizeError {
    fn category(&self) -> &'static str {
        "ParseError"
    }
}

impl fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}: error: ",
            INPUT_NAME,
            self.line + 1,
            self.col + 1
        )?;
        match self.kind {
            TokenizeErrorKind::UnexpectedChar(c) => write!(
                f,
                "unexpected '{}'; expected number, symbol, '(', ')', '{{' or '}}'",
                c
            ),
        }
    }
}


#[cfg(test)]
#[path = "./tokenizer_test.rs"]
mod tokenizer_test;
