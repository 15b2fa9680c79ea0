//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use wordflip_api::Word;

/// Markdown formatter - words as a numbered list, reversed texts as sections
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    word_count: usize,
    document_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            word_count: 0,
            document_count: 0,
        }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_words(&mut self, _source: &str, words: &[Word]) -> Result<()> {
        for word in words {
            self.word_count += 1;
            writeln!(self.writer, "{}. {}", self.word_count, word.text)?;
        }
        Ok(())
    }

    fn format_reversed(&mut self, source: &str, text: &str) -> Result<()> {
        self.document_count += 1;
        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;
        self.writer.write_all(text.as_bytes())?;
        if !text.is_empty() && !text.ends_with('\n') {
            writeln!(self.writer)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        if self.document_count > 0 {
            writeln!(self.writer, "*Total documents: {}*", self.document_count)?;
        } else {
            writeln!(self.writer, "*Total words: {}*", self.word_count)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
