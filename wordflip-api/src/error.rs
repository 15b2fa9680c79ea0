//! API error types

use std::string::FromUtf8Error;
use thiserror::Error;

/// API-level errors
///
/// Word matching itself never fails; every variant here comes from reading
/// input or validating configuration.
#[derive(Error, Debug)]
pub enum ApiError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 conversion error
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Input exceeds the configured size limit
    #[error("input of {size} bytes exceeds limit of {limit} bytes")]
    InputTooLarge {
        /// Size of the rejected input in bytes
        size: usize,
        /// Configured limit in bytes
        limit: usize,
    },

    /// Serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
