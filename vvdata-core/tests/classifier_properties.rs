//! Property tests for script-based line bucketing

use proptest::prelude::*;
use vvdata_core::script::{detect_line_script, Script};
use vvdata_core::LineClassifier;

fn telugu_word() -> impl Strategy<Value = String> {
    proptest::collection::vec(proptest::char::range('\u{0C15}', '\u{0C39}'), 1..8)
        .prop_map(|chars| chars.into_iter().collect())
}

fn devanagari_word() -> impl Strategy<Value = String> {
    proptest::collection::vec(proptest::char::range('\u{0915}', '\u{0939}'), 1..8)
        .prop_map(|chars| chars.into_iter().collect())
}

fn ascii_word() -> impl Strategy<Value = String> {
    "[A-Za-z]{1,10}"
}

proptest! {
    #[test]
    fn telugu_anywhere_wins(
        prefix in "[ a-z0-9]{0,10}",
        word in telugu_word(),
        deva in devanagari_word(),
    ) {
        let line = format!("{prefix}{deva} {word}");
        prop_assert_eq!(detect_line_script(&line), Some(Script::Telugu));

        let buckets = LineClassifier::new().classify(&line);
        prop_assert_eq!(buckets.te, line.trim());
        prop_assert!(buckets.sa.is_empty() && buckets.en.is_empty());
    }

    #[test]
    fn latin_without_telugu_goes_to_english(word in ascii_word(), deva in devanagari_word()) {
        let line = format!("{deva} {word}");
        let buckets = LineClassifier::new().classify(&line);
        prop_assert_eq!(buckets.en, line);
        prop_assert!(buckets.sa.is_empty());
    }

    #[test]
    fn devanagari_only_goes_to_sanskrit(
        words in proptest::collection::vec(devanagari_word(), 1..5),
    ) {
        let text = words.join("\n");
        let buckets = LineClassifier::new().classify(&text);
        prop_assert_eq!(buckets.sa, text);
        prop_assert!(buckets.te.is_empty() && buckets.en.is_empty());
    }

    #[test]
    fn classification_is_deterministic(text in "\\PC{0,200}") {
        let classifier = LineClassifier::new();
        prop_assert_eq!(classifier.classify(&text), classifier.classify(&text));
    }

    #[test]
    fn buckets_never_carry_outer_whitespace(text in "[ \\n\\-a-zक-हక-హ]{0,120}") {
        let buckets = LineClassifier::new().classify(&text);
        for block in [&buckets.sa, &buckets.te, &buckets.en] {
            prop_assert_eq!(block.trim(), block.as_str());
            prop_assert!(!block.contains("\n\n\n"));
        }
    }
}
