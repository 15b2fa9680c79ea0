//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use wordflip_api::Word;

/// JSON formatter - outputs one JSON array for the whole run
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    records: Vec<Record>,
}

/// Data structure for one extracted word
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordData {
    /// Input the word came from
    pub source: String,
    /// The word text
    pub text: String,
    /// First code point of the word
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub char_start: Option<usize>,
    /// One past the last code point
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub char_end: Option<usize>,
    /// Byte offset of the word
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub byte_start: Option<usize>,
    /// Byte offset one past the word
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub byte_end: Option<usize>,
}

/// Data structure for one reversed document
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReversedData {
    /// Input the text came from
    pub source: String,
    /// Text with every word reversed
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Record {
    Word(WordData),
    Reversed(ReversedData),
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            records: Vec::new(),
        }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_words(&mut self, source: &str, words: &[Word]) -> Result<()> {
        self.records.extend(words.iter().map(|word| {
            Record::Word(WordData {
                source: source.to_string(),
                text: word.text.clone(),
                char_start: word.span.map(|s| s.start),
                char_end: word.span.map(|s| s.end),
                byte_start: word.span.map(|s| s.byte_start),
                byte_end: word.span.map(|s| s.byte_end),
            })
        }));
        Ok(())
    }

    fn format_reversed(&mut self, source: &str, text: &str) -> Result<()> {
        self.records.push(Record::Reversed(ReversedData {
            source: source.to_string(),
            text: text.to_string(),
        }));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.records)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
