//! Unicode-aware word matching and in-place word reversal
//!
//! A *word* is a maximal run of Unicode letters (general category `L`, any
//! script), optionally joined to further letter runs by a single hyphen or
//! apostrophe. Digits, punctuation, symbols and whitespace never belong to a
//! word, and a word never starts or ends with a separator.
//!
//! One matching rule is shared by two operations:
//! - [`split_into_words`] returns the words of a text in order
//! - [`reverse_words`] reverses every word in place, leaving every other
//!   character where it was
//!
//! Every function here is total: all inputs are valid and nothing panics.
//!
//! # Example
//!
//! ```rust
//! use wordflip_core::{reverse_words, split_into_words};
//!
//! assert_eq!(split_into_words("word123abc"), ["word", "abc"]);
//! assert_eq!(split_into_words("mother-in-law's"), ["mother-in-law's"]);
//! assert_eq!(reverse_words("Hello, мир!"), "olleH, рим!");
//! ```

pub mod classifier;
pub mod extractor;
pub mod matcher;
pub mod reverser;
pub mod span;

use std::borrow::Cow;

pub use classifier::{CharClass, CharacterClassifier, UnicodeClassifier};
pub use extractor::WordExtractor;
pub use matcher::WordMatcher;
pub use reverser::WordReverser;
pub use span::Span;

/// Split `text` into its words, in order of appearance
pub fn split_into_words(text: &str) -> Vec<&str> {
    WordExtractor::new().extract(text)
}

/// Like [`split_into_words`], treating an absent text as empty
pub fn split_into_words_opt(text: Option<&str>) -> Vec<&str> {
    text.map(split_into_words).unwrap_or_default()
}

/// Reverse every word of `text` at the code point level.
///
/// Text without words is returned borrowed and unchanged.
pub fn reverse_words(text: &str) -> Cow<'_, str> {
    WordReverser::new().reverse(text)
}

/// Like [`reverse_words`], passing an absent text through as absent
pub fn reverse_words_opt(text: Option<&str>) -> Option<Cow<'_, str>> {
    text.map(reverse_words)
}

/// Locate the spans of all words in `text`
pub fn word_spans(text: &str) -> Vec<Span> {
    WordMatcher::new(text).collect()
}
