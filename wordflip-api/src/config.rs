//! High-level configuration API

use crate::error::{ApiError, Result};
use std::fmt;
use std::str::FromStr;

/// Operation applied to the input text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Operation {
    /// Extract the ordered list of words
    #[default]
    Split,
    /// Reverse every word in place
    Reverse,
}

impl Operation {
    /// All supported operations
    pub const ALL: [Operation; 2] = [Operation::Split, Operation::Reverse];

    /// Stable name of the operation
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Split => "split",
            Operation::Reverse => "reverse",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "split" => Ok(Operation::Split),
            "reverse" => Ok(Operation::Reverse),
            other => Err(ApiError::Config(format!("unknown operation '{other}'"))),
        }
    }
}

/// High-level configuration for text processing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) operation: Operation,
    pub(crate) include_spans: bool,
    pub(crate) max_input_bytes: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            operation: Operation::Split,
            include_spans: true,
            max_input_bytes: None,
        }
    }
}

impl Config {
    /// Configuration for word extraction
    pub fn split() -> Self {
        Self::default()
    }

    /// Configuration for word reversal
    pub fn reverse() -> Self {
        Self {
            operation: Operation::Reverse,
            ..Self::default()
        }
    }

    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Configured operation
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Whether extracted words carry their spans
    pub fn include_spans(&self) -> bool {
        self.include_spans
    }

    /// Maximum accepted input size in bytes, if any
    pub fn max_input_bytes(&self) -> Option<usize> {
        self.max_input_bytes
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.max_input_bytes == Some(0) {
            return Err(ApiError::Config(
                "max_input_bytes must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the operation
    pub fn operation(mut self, operation: Operation) -> Self {
        self.config.operation = operation;
        self
    }

    /// Set the operation by name (`"split"` or `"reverse"`)
    pub fn operation_name(mut self, name: &str) -> Result<Self> {
        self.config.operation = name.parse()?;
        Ok(self)
    }

    /// Include char and byte spans with every extracted word
    pub fn include_spans(mut self, include: bool) -> Self {
        self.config.include_spans = include;
        self
    }

    /// Reject inputs larger than `bytes`
    pub fn max_input_bytes(mut self, bytes: Option<usize>) -> Self {
        self.config.max_input_bytes = bytes;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}
