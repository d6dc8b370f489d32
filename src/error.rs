use std::{error, fmt, result};

/// Error variants that can be returned by this package's API.
///
/// Each variant carries a prefix, typically identifying the
/// error location, and a message describing the failure.
#[derive(Clone, PartialEq)]
pub enum Error {
    /// Broken invariant, index or some internal state is not
    /// consistent. Call the programmer.
    Fatal(String, String),
    /// Supplied input, argument or configuration value is not valid.
    InvalidInput(String, String),
    /// File or path is not valid.
    InvalidFile(String, String),
    /// Error returned by the std::io layer.
    IOError(String, String),
    /// Conversion between types, or parsing text into types, failed.
    FailConvert(String, String),
    /// Spawned thread panicked or failed to join.
    ThreadFail(String, String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        use Error::*;

        match self {
            Fatal(p, msg) => write!(f, "{} Fatal: {}", p, msg),
            InvalidInput(p, msg) => write!(f, "{} InvalidInput: {}", p, msg),
            InvalidFile(p, msg) => write!(f, "{} InvalidFile: {}", p, msg),
            IOError(p, msg) => write!(f, "{} IOError: {}", p, msg),
            FailConvert(p, msg) => write!(f, "{} FailConvert: {}", p, msg),
            ThreadFail(p, msg) => write!(f, "{} ThreadFail: {}", p, msg),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        write!(f, "{}", self)
    }
}

impl error::Error for Error {}
