//! Public API for wordflip word extraction and reversal
//!
//! This crate wraps the pure matching functions of `wordflip-core` with
//! input handling, configuration and serializable output.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use dto::{Metadata, WordDTO};
use error::Result;
use std::time::Instant;
use wordflip_core::{WordMatcher, WordReverser};

// Re-export key types
pub use config::{Config, ConfigBuilder, Operation};
pub use dto::{Input, Output, Word};
pub use error::ApiError;
pub use wordflip_core::{reverse_words, split_into_words, Span};

/// Main entry point for word processing
///
/// The processor holds only its configuration, so one instance can be
/// shared across threads.
#[derive(Debug, Clone, Default)]
pub struct TextProcessor {
    config: Config,
}

impl TextProcessor {
    /// Create a new processor with default configuration (split, with spans)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new processor with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a processor for a single operation with otherwise default settings
    pub fn for_operation(operation: Operation) -> Self {
        Self {
            config: Config {
                operation,
                ..Config::default()
            },
        }
    }

    /// Process input with the configured operation
    pub fn process(&self, input: Input) -> Result<Output> {
        self.process_with_operation(input, self.config.operation)
    }

    /// Process input with an explicit operation
    pub fn process_with_operation(&self, input: Input, operation: Operation) -> Result<Output> {
        log::trace!("reading input: {input:?}");
        let text = input.read_text_limited(self.config.max_input_bytes)?;
        self.process_str(&text, operation)
    }

    /// Process text directly (convenience method)
    pub fn process_text(&self, text: &str) -> Result<Output> {
        self.process_str(text, self.config.operation)
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn process_str(&self, text: &str, operation: Operation) -> Result<Output> {
        if let Some(limit) = self.config.max_input_bytes {
            if text.len() > limit {
                return Err(ApiError::InputTooLarge {
                    size: text.len(),
                    limit,
                });
            }
        }

        let start = Instant::now();
        log::debug!("{operation}: {} bytes", text.len());

        let (words, reversed, word_count) = match operation {
            Operation::Split => {
                let include_spans = self.config.include_spans;
                let words: Vec<WordDTO> = WordMatcher::new(text)
                    .map(|span| WordDTO::new(span.slice(text), include_spans.then_some(span)))
                    .collect();
                let count = words.len();
                (words, None, count)
            }
            Operation::Reverse => {
                let count = WordMatcher::new(text).count();
                let reversed = WordReverser::new().reverse(text).into_owned();
                (Vec::new(), Some(reversed), count)
            }
        };

        let elapsed = start.elapsed();
        log::debug!("{operation}: {word_count} words in {elapsed:?}");

        Ok(Output {
            words,
            reversed,
            metadata: Metadata {
                operation,
                total_bytes: text.len(),
                total_chars: text.chars().count(),
                word_count,
                processing_time_us: u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
            },
        })
    }
}

// Convenience functions

/// Extract words from text with default configuration
pub fn process_text(text: &str) -> Result<Output> {
    TextProcessor::new().process_text(text)
}

/// Extract words from a file with default configuration
pub fn process_file<P: AsRef<std::path::Path>>(path: P) -> Result<Output> {
    TextProcessor::new().process(Input::from_file(path.as_ref().to_path_buf()))
}

/// Reverse the words of text with default configuration
pub fn reverse_text(text: &str) -> Result<Output> {
    TextProcessor::for_operation(Operation::Reverse).process_text(text)
}
