//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format (`text`, `json` or `markdown`)
    pub default_format: String,

    /// Include word offsets in structured output
    pub include_spans: bool,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            include_spans: true,
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Process files in parallel once at least this many are given (0 = never)
    pub parallel_file_threshold: usize,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,

    /// Reject inputs larger than this many megabytes (0 = unlimited)
    pub max_input_mb: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            parallel_file_threshold: 8,
            worker_threads: 0,
            max_input_mb: 0,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CliConfig =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.message().to_string()))?;
        Ok(config)
    }

    /// Input size limit in bytes, if any
    pub fn max_input_bytes(&self) -> Option<usize> {
        match self.performance.max_input_mb {
            0 => None,
            mb => Some(mb.saturating_mul(1024 * 1024)),
        }
    }
}
