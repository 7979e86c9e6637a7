//! Module for parsing calculator tokens into the generic parse tree.

use std::fmt;

use derive_getters::Getters;
use log::trace;

use super::ast::{tag, AstNode};
use super::tokenizer::{Token, TokenKind, TokenizeError, Tokenizer};
use crate::error::{Error, ErrorKind};

use self::ParseErrorReason::*;

/// Deepest nesting of '(' accepted; also bounds evaluation recursion.
pub const MAX_DEPTH: usize = 128;


/// Parses all of input into a root node holding every top-level expr.
///
/// filename is only used when rendering errors.
pub fn parse<S: AsRef<str>>(filename: &str, input: S) -> Result<AstNode, ParseError> {
    let mut tokenizer = Tokenizer::new();
    if let Err(err) = tokenizer.tokenize(input) {
        return Err(ParseError::from_tokenize(filename, err));
    }
    let end = tokenizer.end_position();

    let mut parser = Parser::new(filename);
    for token in tokenizer {
        parser.parse_token(token)?;
    }
    parser.finish(end)
}


pub struct Parser {
    filename: String,
    root: AstNode,
    current: Vec<AstNode>,
    max_current_len: usize,
}

impl Parser {
    pub fn new<S: AsRef<str>>(filename: S) -> Self {
        let mut root = AstNode::branch(tag::ROOT, 1, 1);
        root.push(AstNode::leaf(tag::REGEX, "", 1, 1));
        Self {
            filename: filename.as_ref().to_string(),
            root,
            current: Default::default(),
            max_current_len: MAX_DEPTH,
        }
    }

    pub fn parse_token(&mut self, token: Token) -> Result<(), ParseError> {
        trace!("parse_token: {}", token);
        match token.kind {
            TokenKind::LeftParen => {
                if self.current.len() >= self.max_current_len {
                    return Err(self.error(DepthOverflow, token.line, token.col));
                }
                let mut group = AstNode::branch(tag::SEXPR, token.line, token.col);
                group.push(AstNode::leaf(tag::CHAR, "(", token.line, token.col));
                self.current.push(group);
            }
            TokenKind::RightParen => {
                let mut group = match self.current.pop() {
                    Some(group) => group,
                    None => return Err(self.error(UnmatchedClose, token.line, token.col)),
                };
                group.push(AstNode::leaf(tag::CHAR, ")", token.line, token.col));
                self.append(group);
            }
            TokenKind::Number => {
                self.append(AstNode::leaf(tag::NUMBER, token.text, token.line, token.col));
            }
            TokenKind::Symbol => {
                self.append(AstNode::leaf(tag::SYMBOL, token.text, token.line, token.col));
            }
        }
        Ok(())
    }

    /// Closes the root at end, the position just past the input.
    pub fn finish(mut self, end: (usize, usize)) -> Result<AstNode, ParseError> {
        if !self.current.is_empty() {
            return Err(self.error(UnmatchedOpen, end.0, end.1));
        }
        self.root.push(AstNode::leaf(tag::REGEX, "", end.0, end.1));
        Ok(self.root)
    }

    fn append(&mut self, node: AstNode) {
        match self.current.last_mut() {
            Some(group) => group.push(node),
            None => self.root.push(node),
        }
    }

    fn error(&self, reason: ParseErrorReason, line: usize, col: usize) -> ParseError {
        ParseError {
            filename: self.filename.clone(),
            line,
            col,
            reason,
        }
    }
}


#[derive(Debug, PartialEq)]
pub enum ParseErrorReason {
    UnexpectedChar(char),
    UnmatchedOpen,
    UnmatchedClose,
    DepthOverflow,
}

#[derive(Debug, Getters, PartialEq)]
pub struct ParseError {
    filename: String,
    line: usize,
    col: usize,
    reason: ParseErrorReason,
}

impl ParseError {
    fn from_tokenize(filename: &str, err: TokenizeError) -> Self {
        Self {
            filename: filename.to_string(),
            line: err.line,
            col: err.col,
            reason: UnexpectedChar(err.found),
        }
    }
}

impl fmt::Display for ParseErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnexpectedChar(c) => write!(
                f,
                "unexpected '{}'; expected number, one of '+-*/', '(' or ')'",
                c
            ),
            UnmatchedOpen => write!(f, "expected ')' at end of input"),
            UnmatchedClose => write!(f, "unexpected ')'"),
            DepthOverflow => write!(f, "nesting exceeds maximum depth of {}", MAX_DEPTH),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}: error: {}",
            self.filename, self.line, self.col, self.reason
        )
    }
}

impl ErrorKind for ParseError {
    fn name(&self) -> &'static str {
        "ParseError"
    }

    fn message(&self) -> String {
        self.to_string()
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::new(Box::new(err))
    }
}


#[cfg(test)]
#[path = "./parser_test.rs"]
mod parser_test;
