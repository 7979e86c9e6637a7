use log::trace;

use crate::error::Error;
use crate::value::Value;


#[macro_use]
pub mod error;

pub mod builtins;
pub mod grammar;
pub mod interpreter;
pub mod reader;
pub mod std_error;
pub mod value;

#[cfg(feature = "cli")]
pub mod repl;

pub mod prelude {
    pub use crate::error::{Error, ErrorKind};
    pub use crate::grammar::{parse, AstNode, ParseError};
    pub use crate::interpreter::eval;
    pub use crate::reader::read;
    pub use crate::value::{List, Symbol, Value};
    pub use crate::{err, evaluate};
}


/// Filename reported in parse errors for interactive input.
pub const STDIN: &str = "<stdin>";

/// Parses, reads and evaluates one chunk of input.
///
/// Malformed text is reported through Err. Evaluation failures are ordinary
/// results, i.e. Ok(Value::Error(..)).
///
/// Note that this function does *not* setup logging, clients should take care
/// of that prior to calling it. See:
///   https://github.com/rust-lang/log#in-executables.
pub fn evaluate<S: AsRef<str>>(input: S) -> Result<Value, Error> {
    evaluate_named(STDIN, input)
}

/// Like evaluate, reporting parse errors against filename.
pub fn evaluate_named<S: AsRef<str>>(filename: &str, input: S) -> Result<Value, Error> {
    let tree = grammar::parse(filename, input)?;
    trace!("Parse tree:\n{}", tree);
    let value = reader::read(&tree)?;
    Ok(interpreter::eval(value))
}
