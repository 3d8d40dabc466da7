//! Fibonacci numbers, one line at a time
//!
//! The library behind the `fib` binary: a naive recursive [`fib`], a
//! console wrapper that reads an index and prints the result, and the
//! configuration and error types they share.
//!
//! ```rust
//! use fib_core::{FibConfig, run};
//!
//! let mut out = Vec::new();
//! let value = run("10\n".as_bytes(), &mut out, &FibConfig::default())?;
//! assert_eq!(value, 55);
//! assert_eq!(out, b"55\n");
//! # Ok::<(), fib_core::FibError>(())
//! ```

pub mod config;
pub mod console;
pub mod error;
pub mod fibonacci;

pub use config::FibConfig;
pub use console::{read_index, run};
pub use error::FibError;
pub use fibonacci::{MAX_INDEX, checked_fib, fib};
