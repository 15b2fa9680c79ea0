//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use wordflip_api::Word;

/// Plain text formatter - one word per line, or the reversed text as is
///
/// With headers enabled, each reversed document is preceded by a
/// `==> source <==` line and documents are separated by a blank line.
pub struct TextFormatter<W: Write> {
    writer: W,
    headers: bool,
    documents: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter writing reversed text verbatim
    pub fn new(writer: W) -> Self {
        Self::with_headers(writer, false)
    }

    /// Create a text formatter that labels every reversed document
    pub fn with_headers(writer: W, headers: bool) -> Self {
        Self {
            writer,
            headers,
            documents: 0,
        }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_words(&mut self, _source: &str, words: &[Word]) -> Result<()> {
        for word in words {
            writeln!(self.writer, "{}", word.text)?;
        }
        Ok(())
    }

    fn format_reversed(&mut self, source: &str, text: &str) -> Result<()> {
        self.documents += 1;
        if !self.headers {
            self.writer.write_all(text.as_bytes())?;
            return Ok(());
        }

        if self.documents > 1 {
            writeln!(self.writer)?;
        }
        writeln!(self.writer, "==> {source} <==")?;
        self.writer.write_all(text.as_bytes())?;
        // A labelled document always ends its own line
        if !text.is_empty() && !text.ends_with('\n') {
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
