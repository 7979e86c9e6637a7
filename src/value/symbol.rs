use std::convert::TryFrom;
use std::fmt;

use super::value::Value;


/// Operator or identifier name, stored verbatim as read.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Symbol(String);

impl Symbol {
    pub fn new<S: AsRef<str>>(sym: S) -> Self {
        Symbol(sym.as_ref().to_string())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}


impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<Value> for Symbol {
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        if let Value::Symbol(symbol) = value {
            Ok(symbol)
        } else {
            Err(value)
        }
    }
}
