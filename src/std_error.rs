use crate::error::{Error, ErrorKind};


/// Encapsulation of Errors from std and the line editor.
#[derive(Debug)]
pub enum StdError {
    Io(std::io::Error),
    #[cfg(feature = "cli")]
    Readline(rustyline::error::ReadlineError),
}

impl ErrorKind for StdError {
    fn name(&self) -> &'static str {
        "StdError"
    }

    fn message(&self) -> String {
        match self {
            Self::Io(err) => format!("[IoError]: {}", err),
            #[cfg(feature = "cli")]
            Self::Readline(err) => format!("[Readline Error]: {}", err),
        }
    }
}

/// Allow for io::Errors to be used seamlessly with simplysp::Errors.
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::new(Box::new(StdError::Io(err)))
    }
}

#[cfg(feature = "cli")]
impl From<rustyline::error::ReadlineError> for Error {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        Error::new(Box::new(StdError::Readline(err)))
    }
}
