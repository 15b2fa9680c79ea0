//! In-place word reversal

use crate::classifier::{CharacterClassifier, UnicodeClassifier};
use crate::matcher::WordMatcher;
use std::borrow::Cow;

/// Reverses every matched word while keeping all other characters in place.
///
/// Reversal works on code points. A base letter followed by a combining mark
/// is not kept together: the mark is not a letter, so it ends the word and
/// stays where it was.
///
/// Since reversing letters inside a word does not change which characters
/// are letters or separators, the spans of the output equal the spans of the
/// input and applying the reverser twice restores the original text.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordReverser<C = UnicodeClassifier> {
    classifier: C,
}

impl WordReverser {
    /// Create a reverser using Unicode letter classification
    pub const fn new() -> Self {
        Self {
            classifier: UnicodeClassifier::new(),
        }
    }
}

impl<C: CharacterClassifier + Clone> WordReverser<C> {
    /// Create a reverser with a custom classifier
    pub fn with_classifier(classifier: C) -> Self {
        Self { classifier }
    }

    /// Reverse every word of `text`.
    ///
    /// Returns the input unchanged (borrowed) when it contains no word.
    pub fn reverse<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let mut spans = WordMatcher::with_classifier(text, self.classifier.clone()).peekable();
        if spans.peek().is_none() {
            return Cow::Borrowed(text);
        }

        let mut reversed = String::with_capacity(text.len());
        let mut copied_to = 0;
        for span in spans {
            reversed.push_str(&text[copied_to..span.byte_start]);
            reversed.extend(span.slice(text).chars().rev());
            copied_to = span.byte_end;
        }
        reversed.push_str(&text[copied_to..]);

        Cow::Owned(reversed)
    }
}
