use std::fmt;
use std::num::ParseFloatError;

// type alias for Result for use across the library
pub type Result<T> = std::result::Result<T, Error>;

/// Internal error type for fallible attribute parsing.
///
/// The public bounds API never surfaces these; callers of the fallible
/// helpers substitute a default value on failure.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Parse(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(reason) => write!(f, "Parse error: {reason}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<ParseFloatError> for Error {
    fn from(err: ParseFloatError) -> Error {
        Error::Parse(format!("float: {err}"))
    }
}
