//! Word matching state machine
//!
//! A word is a run of letters, optionally joined to further letter runs by a
//! single hyphen or apostrophe:
//!
//! ```text
//! Letter+ ( Separator Letter+ )*
//! ```
//!
//! The matcher scans left to right and never backtracks past the end of the
//! last emitted word. A separator is only kept when the character after it is
//! a letter; otherwise the word ends at the preceding letter and the
//! separator is skipped by the next scan.

use crate::classifier::{CharClass, CharacterClassifier, UnicodeClassifier};
use crate::span::Span;
use core::iter::FusedIterator;

/// Scanner state between two characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// No word started yet
    Seeking,
    /// Inside a letter run; the word may end here
    Letters,
    /// Just read a separator after a letter run; needs a letter to continue
    Separator,
}

/// Lazy iterator over the word spans of a text.
///
/// Each call to [`WordMatcher::new`] starts a fresh scan. Spans are
/// non-overlapping and strictly increasing.
///
/// # Example
///
/// ```rust
/// use wordflip_core::WordMatcher;
///
/// let text = "mother-in-law's 2nd car";
/// let words: Vec<&str> = WordMatcher::new(text).map(|s| s.slice(text)).collect();
/// assert_eq!(words, ["mother-in-law's", "nd", "car"]);
/// ```
#[derive(Debug, Clone)]
pub struct WordMatcher<'a, C = UnicodeClassifier> {
    text: &'a str,
    classifier: C,
    byte_pos: usize,
    char_pos: usize,
}

impl<'a> WordMatcher<'a> {
    /// Create a matcher using Unicode letter classification
    pub fn new(text: &'a str) -> Self {
        Self::with_classifier(text, UnicodeClassifier)
    }
}

impl<'a, C: CharacterClassifier> WordMatcher<'a, C> {
    /// Create a matcher with a custom classifier
    pub fn with_classifier(text: &'a str, classifier: C) -> Self {
        Self {
            text,
            classifier,
            byte_pos: 0,
            char_pos: 0,
        }
    }

    /// The text being scanned
    pub fn text(&self) -> &'a str {
        self.text
    }
}

impl<C: CharacterClassifier> Iterator for WordMatcher<'_, C> {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        let rest = &self.text[self.byte_pos..];

        let mut state = ScanState::Seeking;
        // (byte, char) of the first letter of the word
        let mut start = None;
        // (byte, char) just past the last letter accepted into the word
        let mut end = (self.byte_pos, self.char_pos);
        let mut char_pos = self.char_pos;

        for (offset, ch) in rest.char_indices() {
            let byte_pos = self.byte_pos + offset;
            let after = (byte_pos + ch.len_utf8(), char_pos + 1);

            state = match (state, self.classifier.classify(ch)) {
                (ScanState::Seeking, CharClass::Letter) => {
                    start = Some((byte_pos, char_pos));
                    end = after;
                    ScanState::Letters
                }
                (ScanState::Seeking, _) => ScanState::Seeking,
                (ScanState::Letters | ScanState::Separator, CharClass::Letter) => {
                    end = after;
                    ScanState::Letters
                }
                (ScanState::Letters, CharClass::Separator) => ScanState::Separator,
                // Word is complete; a pending separator is left unconsumed.
                (ScanState::Letters | ScanState::Separator, _) => break,
            };

            char_pos += 1;
        }

        match start {
            Some((byte_start, char_start)) => {
                (self.byte_pos, self.char_pos) = end;
                Some(Span::new(char_start..end.1, byte_start..end.0))
            }
            None => {
                self.byte_pos = self.text.len();
                self.char_pos = char_pos;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Words are separated by at least one non-letter character.
        let remaining = self.text.len() - self.byte_pos;
        (0, Some(remaining.div_ceil(2)))
    }
}

impl<C: CharacterClassifier> FusedIterator for WordMatcher<'_, C> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<&str> {
        WordMatcher::new(text).map(|span| span.slice(text)).collect()
    }

    fn spans(text: &str) -> Vec<(usize, usize)> {
        WordMatcher::new(text)
            .map(|span| (span.start, span.end))
            .collect()
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(WordMatcher::new("").next(), None);
    }

    #[test]
    fn test_simple_words() {
        assert_eq!(words("Hello World"), ["Hello", "World"]);
        assert_eq!(spans("Hello World"), [(0, 5), (6, 11)]);
    }

    #[test]
    fn test_char_offsets_with_multibyte_text() {
        let text = "Привет, мир";
        let found: Vec<Span> = WordMatcher::new(text).collect();
        assert_eq!(found.len(), 2);
        assert_eq!((found[0].start, found[0].end), (0, 6));
        assert_eq!((found[0].byte_start, found[0].byte_end), (0, 12));
        assert_eq!((found[1].start, found[1].end), (8, 11));
        assert_eq!((found[1].byte_start, found[1].byte_end), (14, 20));
    }

    #[test]
    fn test_internal_separators() {
        assert_eq!(words("mother-in-law's"), ["mother-in-law's"]);
        assert_eq!(words("Can't do that"), ["Can't", "do", "that"]);
    }

    #[test]
    fn test_leading_and_trailing_separators() {
        assert_eq!(words("-привет"), ["привет"]);
        assert_eq!(words("привет-"), ["привет"]);
        assert_eq!(words("''hello''"), ["hello"]);
        assert_eq!(words("'a-b'"), ["a-b"]);
        assert_eq!(spans("'a-b'"), [(1, 4)]);
    }

    #[test]
    fn test_double_separator_splits_word() {
        assert_eq!(words("a--b"), ["a", "b"]);
        assert_eq!(words("a-'b"), ["a", "b"]);
        assert_eq!(words("rock''n''roll"), ["rock", "n", "roll"]);
    }

    #[test]
    fn test_separator_only_text() {
        assert!(words("--").is_empty());
        assert!(words("'").is_empty());
        assert!(words("- ' -").is_empty());
    }

    #[test]
    fn test_digits_break_words() {
        assert_eq!(words("word123abc"), ["word", "abc"]);
        assert_eq!(words("abc-123"), ["abc"]);
        assert_eq!(words("x-1-y"), ["x", "y"]);
    }

    #[test]
    fn test_separator_followed_by_digit_is_left_behind() {
        let text = "ab-1cd";
        let found: Vec<Span> = WordMatcher::new(text).collect();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].slice(text), "ab");
        assert_eq!(found[1].slice(text), "cd");
        assert_eq!(found[1].start, 4);
    }

    #[test]
    fn test_spans_strictly_increasing() {
        let text = "a b-c d'e 1f g--h";
        let found: Vec<Span> = WordMatcher::new(text).collect();
        for pair in found.windows(2) {
            assert!(pair[0].end <= pair[1].start);
        }
        assert!(found.iter().all(|span| span.start < span.end));
    }

    #[test]
    fn test_fused_after_exhaustion() {
        let mut matcher = WordMatcher::new("one");
        assert!(matcher.next().is_some());
        assert!(matcher.next().is_none());
        assert!(matcher.next().is_none());
    }

    #[test]
    fn test_clone_continues_from_current_position() {
        let mut matcher = WordMatcher::new("one two");
        matcher.next();
        let rest: Vec<Span> = matcher.clone().collect();
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].slice(matcher.text()), "two");
    }

    #[test]
    fn test_custom_classifier() {
        #[derive(Clone, Copy)]
        struct AsciiOnly;

        impl CharacterClassifier for AsciiOnly {
            fn classify(&self, ch: char) -> CharClass {
                match ch {
                    'a'..='z' | 'A'..='Z' => CharClass::Letter,
                    '-' | '\'' => CharClass::Separator,
                    _ => CharClass::Other,
                }
            }
        }

        let text = "naïve café";
        let found: Vec<&str> = WordMatcher::with_classifier(text, AsciiOnly)
            .map(|span| span.slice(text))
            .collect();
        assert_eq!(found, ["na", "ve", "caf"]);
    }
}
