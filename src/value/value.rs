//! Module for representing calculator values.

use std::convert::TryFrom;

use super::list::List;
use super::symbol::Symbol;


/// Tagged value produced by the reader and reduced by the interpreter.
///
/// A Value is a strict tree: a List exclusively owns its elements and there is
/// no sharing between Values. Dropping a List drops everything it owns, and
/// moving an element out of a List (see List::remove_at) hands ownership to the
/// caller, so each Value is released exactly once.
#[derive(PartialEq)]
pub enum Value {
    Number(i64),
    Error(String),
    Symbol(Symbol),
    List(List),
}

impl Value {
    pub fn number(x: i64) -> Self {
        Value::Number(x)
    }

    pub fn error<S: Into<String>>(message: S) -> Self {
        Value::Error(message.into())
    }

    pub fn symbol<S: AsRef<str>>(name: S) -> Self {
        Value::Symbol(Symbol::new(name))
    }

    /// Empty List.
    pub fn list() -> Self {
        Value::List(List::new())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    pub fn is_leaf(&self) -> bool {
        !matches!(self, Value::List(_))
    }

    pub fn as_number(&self) -> Option<i64> {
        if let Value::Number(num) = self {
            Some(*num)
        } else {
            None
        }
    }

    pub fn into_number(self) -> Option<i64> {
        self.as_number()
    }
}


impl From<i64> for Value {
    fn from(num: i64) -> Self {
        Value::Number(num)
    }
}

impl From<Symbol> for Value {
    fn from(symbol: Symbol) -> Self {
        Value::Symbol(symbol)
    }
}

impl From<List> for Value {
    fn from(list: List) -> Self {
        Value::List(list)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(vec: Vec<T>) -> Self {
        Value::List(vec.into_iter().map(Into::into).collect())
    }
}


// TryFrom<Value> impls hand the Value back on mismatch so ownership is never
// lost.
impl TryFrom<Value> for i64 {
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        if let Value::Number(num) = value {
            Ok(num)
        } else {
            Err(value)
        }
    }
}

impl TryFrom<Value> for List {
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        if let Value::List(list) = value {
            Ok(list)
        } else {
            Err(value)
        }
    }
}

impl<'a> TryFrom<&'a Value> for &'a List {
    type Error = &'a Value;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        if let Value::List(list) = value {
            Ok(list)
        } else {
            Err(value)
        }
    }
}


#[cfg(test)]
#[path = "./value_test.rs"]
mod value_test;
