//! Output formatting module

use anyhow::Result;
use wordflip_api::Word;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format the words extracted from one source
    fn format_words(&mut self, source: &str, words: &[Word]) -> Result<()>;

    /// Format one source with its words reversed
    fn format_reversed(&mut self, source: &str, text: &str) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
