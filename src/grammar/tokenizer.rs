//! Module for breaking calculator text into tokens.

use std::collections::VecDeque;
use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;


#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TokenKind {
    LeftParen,
    RightParen,
    Number,
    Symbol,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
    pub col: usize,
}

/// Accumulates Tokens line by line, keeping track of paren depth so that
/// interactive callers can tell whether an expression is still open.
#[derive(Debug)]
pub struct Tokenizer {
    depth: usize,
    // Set once a ')' arrives with no '(' open.
    unmatched_close: bool,

    // 0-based count of lines consumed so far.
    line_count: usize,
    // Position just past the last character consumed.
    end: (usize, usize),
    tokens: VecDeque<Token>,
}

#[derive(Debug, PartialEq)]
pub struct TokenizeError {
    pub line: usize,
    pub col: usize,
    pub found: char,
}


impl Tokenizer {
    pub fn new() -> Self {
        Self {
            depth: 0,
            unmatched_close: false,
            line_count: 0,
            end: (1, 1),
            tokens: Default::default(),
        }
    }

    /// Number of currently unclosed '('.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Whether some ')' had no matching '('. Such input can never parse,
    /// however many lines follow.
    pub fn unmatched_close(&self) -> bool {
        self.unmatched_close
    }

    /// 1-based (line, col) just past the last consumed character.
    pub fn end_position(&self) -> (usize, usize) {
        self.end
    }

    pub fn tokenize<S: AsRef<str>>(&mut self, input: S) -> Result<(), TokenizeError> {
        for line in input.as_ref().split('\n') {
            self.tokenize_line(line)?;
        }
        Ok(())
    }

    fn tokenize_line(&mut self, l: &str) -> Result<(), TokenizeError> {
        lazy_static! {
            static ref NUMBER: Regex = Regex::new(r"^-?[0-9]+").unwrap();
        }

        let line = self.line_count + 1;
        // Column is counted in chars; skip_to is a byte offset.
        let mut skip_to: usize = 0;
        let mut col: usize = 0;
        for (i, c) in l.char_indices() {
            col += 1;
            if i < skip_to || c.is_whitespace() {
                continue;
            }

            let (kind, len) = match c {
                '(' => {
                    self.depth += 1;
                    (TokenKind::LeftParen, 1)
                }
                ')' => {
                    match self.depth.checked_sub(1) {
                        Some(depth) => self.depth = depth,
                        None => self.unmatched_close = true,
                    }
                    (TokenKind::RightParen, 1)
                }
                '-' | '0'..='9' => match NUMBER.find(&l[i..]) {
                    Some(m) => (TokenKind::Number, m.end()),
                    None => (TokenKind::Symbol, 1),
                },
                '+' | '*' | '/' => (TokenKind::Symbol, 1),
                _ => {
                    return Err(TokenizeError {
                        line,
                        col,
                        found: c,
                    });
                }
            };

            skip_to = i + len;
            self.tokens.push_back(Token {
                kind,
                text: l[i..skip_to].to_string(),
                line,
                col,
            });
        }

        self.end = (line, col + 1);
        self.line_count += 1;
        Ok(())
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

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} '{}' @ ({}, {})", self.kind, self.text, self.line, self.col)
    }
}


#[cfg(test)]
#[path = "./tokenizer_test.rs"]
mod tokenizer_test;
