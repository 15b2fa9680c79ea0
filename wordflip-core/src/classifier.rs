//! Character classification for word matching

use unicode_general_category::{get_general_category, GeneralCategory};

/// Classification of characters for word matching
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Unicode letter of any script
    Letter,
    /// Hyphen or apostrophe, a word constituent only between two letters
    Separator,
    /// Digits, whitespace, punctuation, symbols, marks and everything else
    Other,
}

/// Pure character classification logic
///
/// The word matcher only ever asks for a [`CharClass`]; the helper methods
/// are provided for callers that need a single predicate.
pub trait CharacterClassifier: Send + Sync {
    /// Classify a character
    fn classify(&self, ch: char) -> CharClass;

    /// Check if character is a letter
    fn is_letter(&self, ch: char) -> bool {
        matches!(self.classify(ch), CharClass::Letter)
    }

    /// Check if character is a word-internal separator
    fn is_separator(&self, ch: char) -> bool {
        matches!(self.classify(ch), CharClass::Separator)
    }
}

/// Classifier backed by the Unicode general category tables.
///
/// A character is a [`CharClass::Letter`] when its general category is one of
/// `Lu`, `Ll`, `Lt`, `Lm` or `Lo`. This differs from [`char::is_alphabetic`],
/// which also admits letter numbers (`Nl`) and many combining marks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnicodeClassifier;

impl UnicodeClassifier {
    /// Create a new classifier
    pub const fn new() -> Self {
        Self
    }
}

impl CharacterClassifier for UnicodeClassifier {
    #[inline]
    fn classify(&self, ch: char) -> CharClass {
        if is_separator(ch) {
            CharClass::Separator
        } else if is_letter(ch) {
            CharClass::Letter
        } else {
            CharClass::Other
        }
    }
}

/// Check whether `ch` belongs to Unicode general category L.
#[inline]
pub fn is_letter(ch: char) -> bool {
    // ASCII fast path; the table lookup is only needed above U+007F.
    if ch.is_ascii() {
        return ch.is_ascii_alphabetic();
    }

    matches!(
        get_general_category(ch),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Check whether `ch` is an ASCII hyphen-minus or apostrophe.
///
/// Typographic variants (U+2019, U+2010, ...) are not separators.
#[inline]
pub fn is_separator(ch: char) -> bool {
    matches!(ch, '-' | '\'')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_and_cyrillic_letters() {
        let classifier = UnicodeClassifier::new();
        for ch in ['a', 'Z', 'é', 'Ñ', 'ё', 'Ё', 'ж', 'Щ'] {
            assert_eq!(classifier.classify(ch), CharClass::Letter, "{ch:?}");
        }
    }

    #[test]
    fn test_other_scripts_are_letters() {
        // Greek, Hebrew, Arabic, Devanagari, CJK, Hiragana, modifier letter
        for ch in ['λ', 'א', 'ب', 'क', '中', 'あ', 'ʰ'] {
            assert!(is_letter(ch), "{ch:?} should be a letter");
        }
    }

    #[test]
    fn test_titlecase_letter() {
        // U+01C5 LATIN CAPITAL LETTER D WITH SMALL LETTER Z WITH CARON
        assert!(is_letter('\u{01C5}'));
    }

    #[test]
    fn test_digits_are_not_letters() {
        for ch in ['0', '9', '٣', '７', 'Ⅻ'] {
            assert_eq!(UnicodeClassifier.classify(ch), CharClass::Other, "{ch:?}");
        }
    }

    #[test]
    fn test_punctuation_and_symbols() {
        for ch in ['_', '.', ',', '!', '#', '$', '@', '"', '★', '→', '😊', ' ', '\t', '\n'] {
            assert_eq!(UnicodeClassifier.classify(ch), CharClass::Other, "{ch:?}");
        }
    }

    #[test]
    fn test_separators() {
        assert_eq!(UnicodeClassifier.classify('-'), CharClass::Separator);
        assert_eq!(UnicodeClassifier.classify('\''), CharClass::Separator);
        assert!(UnicodeClassifier.is_separator('-'));
        assert!(!UnicodeClassifier.is_letter('\''));
    }

    #[test]
    fn test_typographic_variants_are_not_separators() {
        // Right single quotation mark, hyphen, en dash
        for ch in ['\u{2019}', '\u{2010}', '\u{2013}'] {
            assert_eq!(UnicodeClassifier.classify(ch), CharClass::Other, "{ch:?}");
        }
    }

    #[test]
    fn test_combining_mark_is_not_letter() {
        // U+0301 COMBINING ACUTE ACCENT (Mn)
        assert!(!is_letter('\u{0301}'));
    }

    #[test]
    fn test_letter_number_is_alphabetic_but_not_letter() {
        // U+216B ROMAN NUMERAL TWELVE is Nl
        assert!('Ⅻ'.is_alphabetic());
        assert!(!is_letter('Ⅻ'));
    }
}
