//! Error types for deformkit

use std::fmt;
use std::io;

/// Result type for deformkit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in deformkit operations
#[derive(Debug)]
pub enum Error {
    /// I/O error
    Io(io::Error),

    /// CSV reading or writing error
    Csv(csv::Error),

    /// Configuration parsing error
    Json(serde_json::Error),

    /// Parameter outside its valid domain (non-positive buffer, step, ...)
    InvalidParameter(String),

    /// Too few input values for the requested construction
    OutOfRange {
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::Csv(e) => write!(f, "CSV error: {}", e),
            Error::Json(e) => write!(f, "Config error: {}", e),
            Error::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            Error::OutOfRange { expected, actual } => write!(
                f,
                "Out of range: expected at least {} values, got {}",
                expected, actual
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Csv(e) => Some(e),
            Error::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::Io(error)
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Error::Csv(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Json(error)
    }
}
