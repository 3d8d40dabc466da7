//! Error type for reading an index and computing its Fibonacci number

use std::num::ParseIntError;

/// Everything that can stop a run short of printing a result.
#[derive(Debug)]
pub enum FibError {
    /// Input line was not a base-10 integer (empty when stdin hit EOF)
    Parse {
        input: String,
        source: Option<ParseIntError>,
    },
    /// Result would not fit in an `i64`
    Overflow { index: i64 },
    /// Index is above the configured `max_index`
    IndexAboveLimit { index: i64, max_index: i64 },
    /// Reading stdin or writing stdout failed
    Io(std::io::Error),
    /// Configuration file could not be read or parsed
    Config(String),
}

impl std::fmt::Display for FibError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FibError::Parse { input, source: _ } if input.is_empty() => {
                write!(f, "expected an integer, got no input")
            }
            FibError::Parse { input, source } => match source {
                Some(e) => write!(f, "expected an integer, got '{}': {}", input, e),
                None => write!(f, "expected an integer, got '{}'", input),
            },
            FibError::Overflow { index } => {
                write!(f, "fib({}) overflows a 64-bit integer", index)
            }
            FibError::IndexAboveLimit { index, max_index } => write!(
                f,
                "index {} is above the configured limit {}",
                index, max_index
            ),
            FibError::Io(e) => write!(f, "I/O error: {}", e),
            FibError::Config(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FibError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FibError::Parse {
                source: Some(e), ..
            } => Some(e),
            FibError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FibError {
    fn from(e: std::io::Error) -> Self {
        FibError::Io(e)
    }
}
