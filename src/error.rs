//! Representation of errors outside of the Value model.
//!
//! Evaluation errors are ordinary Values (see value::Value::Error). Everything
//! else that can go wrong (malformed input text, reader defects, I/O in the
//! REPL) uses this general mechanism, which can carry any ErrorKind.

use std::fmt;


/// Creates an Error wrapped in Err.
#[macro_export]
macro_rules! err {
    ($($kind:tt)+) => {
        Err($crate::error::Error::new(Box::new($($kind)+)))
    };
}


pub struct Error {
    kind: Box<dyn ErrorKind>,
}

pub trait ErrorKind: fmt::Debug /* fmt::Display auto-impled below */ {
    /// Stable category name, e.g. "ParseError".
    fn name(&self) -> &'static str;

    fn message(&self) -> String;
}


impl Error {
    /// Prefer using err! for convenience.
    pub fn new(kind: Box<dyn ErrorKind>) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> &dyn ErrorKind {
        &*self.kind
    }
}

impl PartialEq for Error {
    /// Compare kind.
    fn eq(&self, other: &Self) -> bool {
        self.kind().name() == other.kind().name()
            && self.kind().message() == other.kind().message()
    }
}

impl fmt::Display for dyn ErrorKind + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {:?}", self.kind().name(), self.kind)
    }
}


impl std::error::Error for Error {}
