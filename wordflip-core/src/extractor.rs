//! Word extraction

use crate::classifier::{CharacterClassifier, UnicodeClassifier};
use crate::matcher::WordMatcher;

/// Collects matched words as slices of the input.
///
/// Words come back in source order with duplicates and case preserved.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordExtractor<C = UnicodeClassifier> {
    classifier: C,
}

impl WordExtractor {
    /// Create an extractor using Unicode letter classification
    pub const fn new() -> Self {
        Self {
            classifier: UnicodeClassifier::new(),
        }
    }
}

impl<C: CharacterClassifier + Clone> WordExtractor<C> {
    /// Create an extractor with a custom classifier
    pub fn with_classifier(classifier: C) -> Self {
        Self { classifier }
    }

    /// Lazily yield the words of `text`
    pub fn words<'a>(&self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a
    where
        C: 'a,
    {
        WordMatcher::with_classifier(text, self.classifier.clone())
            .map(move |span| span.slice(text))
    }

    /// Extract all words of `text`
    pub fn extract<'a>(&self, text: &'a str) -> Vec<&'a str>
    where
        C: 'a,
    {
        self.words(text).collect()
    }
}
