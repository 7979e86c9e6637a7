//! Rendering of Values as text.

use std::fmt;

use super::list::List;
use super::value::Value;


impl Value {
    /// Writes self, calling write_leaf for Number/Error/Symbol and write_paren
    /// for every list delimiter, so that callers can decorate either.
    ///
    /// Elements are separated by a single space with none trailing.
    pub fn write_list<W, F, P>(
        &self,
        w: &mut W,
        depth: usize,
        write_leaf: &mut F,
        write_paren: &mut P,
    ) -> fmt::Result
    where
        W: fmt::Write,
        F: FnMut(&mut W, &Value, usize) -> fmt::Result,
        P: FnMut(&mut W, &str, usize) -> fmt::Result,
    {
        match self {
            Value::List(list) => list.write_list(w, depth, write_leaf, write_paren),
            leaf => write_leaf(w, leaf, depth),
        }
    }
}

impl List {
    /// See Value::write_list.
    pub fn write_list<W, F, P>(
        &self,
        w: &mut W,
        depth: usize,
        write_leaf: &mut F,
        write_paren: &mut P,
    ) -> fmt::Result
    where
        W: fmt::Write,
        F: FnMut(&mut W, &Value, usize) -> fmt::Result,
        P: FnMut(&mut W, &str, usize) -> fmt::Result,
    {
        write_paren(w, "(", depth)?;
        for (i, val) in self.iter().enumerate() {
            if i > 0 {
                w.write_char(' ')?;
            }
            val.write_list(w, depth + 1, write_leaf, write_paren)?;
        }
        write_paren(w, ")", depth)
    }
}

/// Undecorated rendering of a single Value.
pub fn write_leaf<W: fmt::Write>(w: &mut W, value: &Value) -> fmt::Result {
    match value {
        Value::Number(num) => write!(w, "{}", num),
        Value::Error(message) => write!(w, "Error: {}", message),
        Value::Symbol(symbol) => write!(w, "{}", symbol),
        Value::List(_) => write!(w, "{}", value),
    }
}


impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_list(
            f,
            0,
            &mut |writer, leaf, _depth| write_leaf(writer, leaf),
            &mut |writer, paren, _depth| writer.write_str(paren),
        )
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_list(
            f,
            0,
            &mut |writer, leaf, _depth| write_leaf(writer, leaf),
            &mut |writer, paren, _depth| writer.write_str(paren),
        )
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self, f)
    }
}


#[cfg(test)]
#[path = "./printer_test.rs"]
mod printer_test;
