use std::{error::Error, fmt::Display, io};

/// Everything that can go wrong while a program runs. The driver reports
/// these through the page buffer; they never escape the interpreter as a
/// crash.
#[derive(Debug)]
pub enum RuntimeError {
    UndefinedVariable(String),
    TypeMismatch(String),
    InvalidValue(String),
    IndexOutOfRange,
    DivisionByZero,
    Io(io::Error),
}

impl Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuntimeError::UndefinedVariable(name) => write!(f, "Variable '{name}' not defined"),
            RuntimeError::TypeMismatch(message) => f.write_str(message),
            RuntimeError::InvalidValue(message) => f.write_str(message),
            RuntimeError::IndexOutOfRange => f.write_str("Array index out of range"),
            RuntimeError::DivisionByZero => f.write_str("division by zero"),
            RuntimeError::Io(error) => write!(f, "{error}"),
        }
    }
}

impl Error for RuntimeError {}

impl From<io::Error> for RuntimeError {
    fn from(error: io::Error) -> Self {
        RuntimeError::Io(error)
    }
}
