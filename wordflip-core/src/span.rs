//! Word span type

use core::ops::Range;

/// Location of one matched word.
///
/// `start..end` is the half-open range in code points (`char`s) and
/// `byte_start..byte_end` is the same range in UTF-8 bytes, so the word can
/// be sliced from the source `&str` without rescanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// First code point of the word
    pub start: usize,
    /// One past the last code point of the word
    pub end: usize,
    /// Byte offset of the first code point
    pub byte_start: usize,
    /// Byte offset one past the last code point
    pub byte_end: usize,
}

impl Span {
    /// Create a new span from code point and byte ranges
    pub fn new(chars: Range<usize>, bytes: Range<usize>) -> Self {
        debug_assert!(chars.start < chars.end, "span must not be empty");
        debug_assert!(bytes.start < bytes.end, "span must not be empty");
        Self {
            start: chars.start,
            end: chars.end,
            byte_start: bytes.start,
            byte_end: bytes.end,
        }
    }

    /// Number of code points covered by the span
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always false for spans produced by the matcher
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Code point range
    pub fn char_range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Byte range
    pub fn byte_range(&self) -> Range<usize> {
        self.byte_start..self.byte_end
    }

    /// Slice the word out of the text the span was produced from.
    ///
    /// # Panics
    ///
    /// Panics if `text` is not the text this span was matched against and the
    /// byte range falls outside it or off a character boundary.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.byte_range()]
    }
}
