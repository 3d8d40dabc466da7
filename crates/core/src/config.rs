//! Run configuration
//!
//! Defaults reproduce the bare behaviour: no prompt and no index limit
//! beyond what fits in an `i64`. A TOML file can override either:
//!
//! ```toml
//! prompt = "Enter the position-> "
//! max_index = 40
//! ```
//!
//! ```rust
//! use fib_core::FibConfig;
//!
//! let config = FibConfig::new().with_prompt("n?").with_max_index(30);
//! assert_eq!(config.max_index, Some(30));
//! ```

use crate::error::FibError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FibConfig {
    /// Line written to stdout before the index is read
    pub prompt: Option<String>,

    /// Largest index accepted; must be non-negative.
    ///
    /// Indices above it are rejected with [`FibError::IndexAboveLimit`]
    /// before any work is done.
    pub max_index: Option<i64>,
}

impl FibConfig {
    pub fn new() -> Self {
        FibConfig::default()
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, FibError> {
        let config: FibConfig = toml::from_str(toml_str)
            .map_err(|e| FibError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML configuration file
    pub fn load(path: &Path) -> Result<Self, FibError> {
        let content = fs::read_to_string(path).map_err(|e| {
            FibError::Config(format!("Error reading config {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Check values the type alone cannot rule out
    pub fn validate(&self) -> Result<(), FibError> {
        match self.max_index {
            Some(max_index) if max_index < 0 => Err(FibError::Config(format!(
                "max_index must be non-negative, got {}",
                max_index
            ))),
            _ => Ok(()),
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn with_max_index(mut self, max_index: i64) -> Self {
        self.max_index = Some(max_index);
        self
    }
}
