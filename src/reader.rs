//! Conversion of the generic parse tree into Values.

use log::trace;

use crate::error::{Error, ErrorKind};
use crate::grammar::{tag, AstNode};
use crate::value::{List, Value};


/// Builds the Value for node and everything below it.
///
/// Number leaves that do not fit in an i64 become `Error("invalid number")`
/// rather than failing the read. A node shape the grammar never produces is a
/// ReadError.
pub fn read(node: &AstNode) -> Result<Value, Error> {
    trace!("read: {} '{}'", node.tag(), node.contents());
    let t = node.tag().as_str();
    if t.contains("number") {
        return Ok(read_number(node.contents()));
    }
    if t.contains("symbol") {
        return Ok(Value::symbol(node.contents()));
    }
    if t != tag::ROOT && !t.contains("sexpr") {
        return err!(ReadError::UnexpectedNode {
            tag: node.tag().clone(),
            line: *node.line(),
            col: *node.col(),
        });
    }

    let mut list = List::new();
    for child in node.children() {
        if is_markup(child) {
            continue;
        }
        list.append(read(child)?);
    }
    Ok(list.into())
}

fn read_number(contents: &str) -> Value {
    match contents.parse::<i64>() {
        Ok(num) => Value::number(num),
        Err(_) => Value::error("invalid number"),
    }
}

// Delimiters and start/end anchors carry no value.
fn is_markup(node: &AstNode) -> bool {
    node.contents() == "(" || node.contents() == ")" || node.tag() == tag::REGEX
}


#[derive(Debug)]
pub enum ReadError {
    UnexpectedNode { tag: String, line: usize, col: usize },
}

impl ErrorKind for ReadError {
    fn name(&self) -> &'static str {
        "ReadError"
    }

    fn message(&self) -> String {
        match self {
            ReadError::UnexpectedNode { tag, line, col } => format!(
                "[Read Error]: unexpected node '{}' @ ({}, {})",
                tag, line, col
            ),
        }
    }
}


#[cfg(test)]
#[path = "./reader_test.rs"]
mod reader_test;
