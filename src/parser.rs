//! Module for parsing tlisp tokens into a concrete syntax tree.

use log::debug;
use std::fmt;

use crate::error::{Error, ErrorKind};
use crate::syntax::grammar::{self, CHAR, EXPR, NUMBER, QEXPR, REGEX, SEXPR, SYMBOL};
use crate::syntax::SyntaxNode;
use crate::token::{Token, TokenKind, TokenizeError, Tokenizer, INPUT_NAME};

use self::ParseErrorReason::*;

pub const MAX_DEPTH: usize = 1024;


/// Builds the start rule's tree from a stream of tokens.
///
/// Expressions at depth 0 become children of the root; open lists are kept
/// on a stack until their closing delimiter arrives.
pub struct Parser {
    root: SyntaxNode,
    // Innermost last, each with the location of its opening delimiter.
    current: Vec<(OpenList, SyntaxNode)>,
    max_depth: usize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct OpenList {
    open: char,
    line: usize,
    col: usize,
}

impl Parser {
    pub fn new() -> Self {
        Self::with_max_depth(MAX_DEPTH)
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            root: SyntaxNode::root(),
            current: Default::default(),
            max_depth,
        }
    }

    pub fn parse_token(&mut self, token: Token) -> Result<(), ParseError> {
        let Token {
            token: kind,
            line,
            col,
        } = token;

        match kind {
            TokenKind::LeftParen => self.open(SEXPR, OpenList { open: '(', line, col }),
            TokenKind::LeftBrace => self.open(QEXPR, OpenList { open: '{', line, col }),
            TokenKind::RightParen => self.close(')', line, col),
            TokenKind::RightBrace => self.close('}', line, col),
            TokenKind::Number(text) => {
                self.append(SyntaxNode::leaf(grammar::tag(&[EXPR, NUMBER, REGEX]), text));
                Ok(())
            }
            TokenKind::Symbol(text) => {
                self.append(SyntaxNode::leaf(grammar::tag(&[EXPR, SYMBOL, CHAR]), text));
                Ok(())
            }
        }
    }

    fn open(&mut self, rule: &str, opened: OpenList) -> Result<(), ParseError> {
        if self.current.len() >= self.max_depth {
            return Err(ParseError {
                reason: DepthOverflow(self.max_depth),
                line: opened.line,
                col: opened.col,
            });
        }
        self.current
            .push((opened, SyntaxNode::open_list(rule, opened.open)));
        Ok(())
    }

    fn close(&mut self, close: char, line: usize, col: usize) -> Result<(), ParseError> {
        let err = |reason| Err(ParseError { reason, line, col });

        let (opened, mut node) = match self.current.pop() {
            Some(top) => top,
            None => return err(UnmatchedClose(close)),
        };
        let expected = closing_delimiter(opened.open);
        if expected != close {
            return err(MismatchedClose {
                expected,
                found: close,
            });
        }
        node.push_child(SyntaxNode::delimiter(close));
        self.append(node);
        Ok(())
    }

    /// Closes the start rule. Fails if any list is still open.
    pub fn finish(mut self) -> Result<SyntaxNode, ParseError> {
        if let Some((opened, _)) = self.current.pop() {
            return Err(ParseError {
                reason: UnclosedList(opened.open),
                line: opened.line,
                col: opened.col,
            });
        }

        self.root.push_child(SyntaxNode::anchor());
        Ok(self.root)
    }

    fn append(&mut self, node: SyntaxNode) {
        match self.current.last_mut() {
            Some((_, parent)) => parent.push_child(node),
            None => self.root.push_child(node),
        }
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

fn closing_delimiter(open: char) -> char {
    if open == '{' {
        '}'
    } else {
        ')'
    }
}


/// Tokenizes and parses input as a whole.
pub fn parse_str<S: AsRef<str>>(input: S) -> Result<SyntaxNode, Error> {
    let mut tokenizer = Tokenizer::new();
    tokenizer.tokenize(input)?;

    let mut parser = Parser::new();
    for token in tokenizer {
        parser.parse_token(token)?;
    }
    let tree = parser.finish()?;
    debug!("Parsed:\n{}", tree);
    Ok(tree)
}


#[derive(Clone, Debug, PartialEq)]
pub enum ParseErrorReason {
    DepthOverflow(usize),
    UnmatchedClose(char),
    MismatchedClose { expected: char, found: char },
    UnclosedList(char),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParseError {
    reason: ParseErrorReason,
    line: usize,
    col: usize,
}

impl ParseError {
    pub fn reason(&self) -> &ParseErrorReason {
        &self.reason
    }
}

impl ErrorKind for ParseError {
    fn category(&self) -> &'static str {
        "ParseError"
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}: error: ",
            INPUT_NAME,
            self.line + 1,
            self.col + 1
        )?;
        match self.reason {
            DepthOverflow(max) => write!(f, "lists nested deeper than {}", max),
            UnmatchedClose(close) => write!(f, "unexpected '{}' with no open list", close),
            MismatchedClose { expected, found } => {
                write!(f, "expected '{}' but found '{}'", expected, found)
            }
            UnclosedList(open) => write!(
                f,
                "'{}' is never closed; expected '{}' at end of input",
                open,
                closing_delimiter(open)
            ),
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::new(Box::new(err))
    }
}

impl From<TokenizeError> for Error {
    fn from(err: TokenizeError) -> Self {
        Error::new(Box::new(err))
    }
}


#[cfg(test)]
#[path = "./parser_test.rs"]
mod parser_test;
