//! One line in, one line out
//!
//! [`run`] is the whole program minus process setup: it takes any reader
//! and writer so the binary can hand it locked stdin/stdout and tests can
//! hand it byte buffers.

use crate::config::FibConfig;
use crate::error::FibError;
use crate::fibonacci::checked_fib;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// Read one line and parse it as a base-10 `i64`.
///
/// Surrounding whitespace (including the line terminator) is ignored.
/// Anything after the first line is left unread.
pub fn read_index(mut reader: impl BufRead) -> Result<i64, FibError> {
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(FibError::Parse {
            input: String::new(),
            source: None,
        });
    }

    trimmed.parse::<i64>().map_err(|e| FibError::Parse {
        input: trimmed.to_string(),
        source: Some(e),
    })
}

/// Prompt (if configured), read an index, and print its Fibonacci number.
///
/// Returns the printed value. Nothing is written to `writer` besides the
/// prompt when an error is returned, and nothing at all when `config`
/// fails [`FibConfig::validate`].
pub fn run(
    reader: impl BufRead,
    mut writer: impl Write,
    config: &FibConfig,
) -> Result<i64, FibError> {
    config.validate()?;

    if let Some(prompt) = &config.prompt {
        writeln!(writer, "{}", prompt)?;
        writer.flush()?;
    }

    let index = read_index(reader)?;
    debug!(index, "read index");

    if let Some(max_index) = config.max_index
        && index > max_index
    {
        warn!(index, max_index, "index above configured limit");
        return Err(FibError::IndexAboveLimit { index, max_index });
    }

    let Some(value) = checked_fib(index) else {
        warn!(index, "result overflows i64");
        return Err(FibError::Overflow { index });
    };
    debug!(index, value, "computed");

    writeln!(writer, "{}", value)?;
    writer.flush()?;
    Ok(value)
}
