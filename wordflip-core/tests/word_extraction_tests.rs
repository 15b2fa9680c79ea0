//! Word extraction across scripts, separators, digits and punctuation

use wordflip_core::{split_into_words, split_into_words_opt};

/// Run a table of (input, expected words) cases
fn check_cases(cases: &[(&str, &[&str])]) {
    for (text, expected) in cases {
        let words = split_into_words(text);
        assert_eq!(
            words, *expected,
            "Failed for text: {text:?}\nGot: {words:?}\nExpected: {expected:?}"
        );
    }
}

#[test]
fn test_apostrophe_inside_word() {
    check_cases(&[("Can't do that", &["Can't", "do", "that"])]);
}

#[test]
fn test_cyrillic_yo_is_a_letter() {
    check_cases(&[
        ("Ёжик в тумане", &["Ёжик", "в", "тумане"]),
        ("Уж замуж невтерпёж", &["Уж", "замуж", "невтерпёж"]),
    ]);
}

#[test]
fn test_hyphen_inside_word() {
    check_cases(&[
        ("Что-нибудь хорошее", &["Что-нибудь", "хорошее"]),
        ("mother-in-law's", &["mother-in-law's"]),
        ("up-to-date", &["up-to-date"]),
        ("Привет-пока", &["Привет-пока"]),
    ]);
}

#[test]
fn test_single_letter_words() {
    check_cases(&[("Ну и о чём речь?", &["Ну", "и", "о", "чём", "речь"])]);
}

#[test]
fn test_case_changes_do_not_split() {
    check_cases(&[
        ("HeLLo WoRLd", &["HeLLo", "WoRLd"]),
        (
            "UpperCamelCase or lowerCamelCase?",
            &["UpperCamelCase", "or", "lowerCamelCase"],
        ),
    ]);
}

#[test]
fn test_digits_are_not_word_characters() {
    check_cases(&[
        ("word123", &["word"]),
        ("123word", &["word"]),
        ("word123abc", &["word", "abc"]),
    ]);
}

#[test]
fn test_punctuation_is_not_word_characters() {
    check_cases(&[
        ("C# is awesome", &["C", "is", "awesome"]),
        ("Hello, мир!", &["Hello", "мир"]),
        ("Много   пробелов", &["Много", "пробелов"]),
    ]);
}

#[test]
fn test_texts_without_words() {
    check_cases(&[
        ("", &[]),
        ("   \t\n", &[]),
        ("!@#$%^&*() 12345", &[]),
        ("\"", &[]),
    ]);
    assert!(split_into_words_opt(None).is_empty());
}

#[test]
fn test_separator_edge_cases() {
    check_cases(&[
        ("-привет", &["привет"]),
        ("привет-", &["привет"]),
        ("'hello", &["hello"]),
        ("hello'", &["hello"]),
        ("--привет--", &["привет"]),
        ("''hello''", &["hello"]),
        ("'a-b'", &["a-b"]),
        ("--", &[]),
        ("'", &[]),
    ]);
}

#[test]
fn test_typographic_apostrophe_splits_word() {
    // U+2019 is punctuation, not a separator
    check_cases(&[("isn\u{2019}t", &["isn", "t"])]);
}

#[test]
fn test_other_scripts() {
    check_cases(&[
        ("Καλημέρα κόσμε", &["Καλημέρα", "κόσμε"]),
        ("שלום עולם", &["שלום", "עולם"]),
        ("日本語のテキスト", &["日本語のテキスト"]),
        ("naïve café", &["naïve", "café"]),
    ]);
}

#[test]
fn test_emoji_and_symbols_split_words() {
    check_cases(&[
        ("emoji 😊 test", &["emoji", "test"]),
        ("★hello★", &["hello"]),
        ("a😊b", &["a", "b"]),
        ("snake_case_name", &["snake", "case", "name"]),
    ]);
}
