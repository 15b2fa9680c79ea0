//! Data Transfer Objects for API

use crate::config::Operation;
use crate::error::{ApiError, Result};
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use wordflip_core::Span;

/// Input source for processing
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// Raw text string
    Text(String),
    /// File path
    File(PathBuf),
    /// Raw bytes (UTF-8)
    Bytes(Vec<u8>),
    /// Reader (not serializable)
    #[cfg_attr(feature = "serde", serde(skip))]
    Reader(Box<dyn Read + Send>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<dyn Read>").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the text content from the input
    pub fn read_text(self) -> Result<String> {
        self.read_text_limited(None)
    }

    /// Read the text content, failing with [`ApiError::InputTooLarge`] when it
    /// exceeds `limit` bytes.
    ///
    /// Files are checked against their metadata before reading, and readers
    /// are consumed no further than one byte past the limit.
    pub fn read_text_limited(self, limit: Option<usize>) -> Result<String> {
        let text = match self {
            Input::Text(text) => text,
            Input::File(path) => {
                if let Some(limit) = limit {
                    let size = fs::metadata(&path)?.len();
                    check_size(usize::try_from(size).unwrap_or(usize::MAX), limit)?;
                }
                fs::read_to_string(&path)?
            }
            Input::Bytes(bytes) => String::from_utf8(bytes)?,
            Input::Reader(reader) => {
                let cap = limit.map_or(u64::MAX, |limit| {
                    u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1)
                });
                let mut buffer = Vec::new();
                reader.take(cap).read_to_end(&mut buffer)?;
                if let Some(limit) = limit {
                    check_size(buffer.len(), limit)?;
                }
                String::from_utf8(buffer)?
            }
        };

        if let Some(limit) = limit {
            check_size(text.len(), limit)?;
        }
        Ok(text)
    }
}

fn check_size(size: usize, limit: usize) -> Result<()> {
    if size > limit {
        return Err(ApiError::InputTooLarge { size, limit });
    }
    Ok(())
}

/// One extracted word
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordDTO {
    /// The word as it appears in the input
    pub text: String,
    /// Location in the input (omitted when spans are disabled)
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub span: Option<Span>,
}

impl WordDTO {
    /// Create a new word DTO
    pub fn new(text: impl Into<String>, span: Option<Span>) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }
}

/// Type alias for symmetry with the core crate
pub type Word = WordDTO;

/// Processing metadata with runtime statistics
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Operation that produced the output
    pub operation: Operation,
    /// Total bytes processed
    pub total_bytes: usize,
    /// Total characters processed
    pub total_chars: usize,
    /// Number of words matched
    pub word_count: usize,
    /// Processing time in microseconds
    pub processing_time_us: u64,
}

/// Complete output of one processing call
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// Extracted words (split operation only)
    pub words: Vec<WordDTO>,
    /// Text with every word reversed (reverse operation only)
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub reversed: Option<String>,
    /// Processing metadata
    pub metadata: Metadata,
}

impl Output {
    /// Word texts in order
    pub fn word_texts(&self) -> Vec<&str> {
        self.words.iter().map(|word| word.text.as_str()).collect()
    }

    /// Serialize to pretty-printed JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
