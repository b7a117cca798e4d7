//! Property-based tests for segmentation invariants

use pragmaseg_core::language::{embedded_config, AbbreviationPolicy};
use pragmaseg_core::{clean, sentinel, Config, DocType, Segmenter};
use proptest::prelude::*;

fn without_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

fn raw_segmenter() -> Segmenter {
    let config = Config::builder().clean(false).build().unwrap();
    Segmenter::with_config(config).unwrap()
}

/// Words separated by single punctuation marks and spaces
fn prose() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (
            "[A-Za-z]{1,8}",
            prop::sample::select(vec![" ", ". ", "! ", "? ", ", ", "."]),
        ),
        1..40,
    )
    .prop_map(|parts| {
        parts
            .into_iter()
            .map(|(word, sep)| format!("{word}{sep}"))
            .collect()
    })
}

/// Text the cleaner has nothing to do on: no line breaks, markup, inline
/// formatting, doubled quotes, or dot leaders
fn clean_text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ,;:!?'\"().-]{0,200}".prop_filter("cleaner input", |text| {
        !text.contains("''") && !text.contains(".....")
    })
}

proptest! {
    #[test]
    fn test_cleaner_is_noop_on_clean_text(text in clean_text()) {
        for doc_type in DocType::all() {
            let once = clean(&text, *doc_type);
            prop_assert_eq!(&once, &text);
            prop_assert_eq!(clean(&once, *doc_type), once);
        }
    }

    #[test]
    fn test_no_sentinels_in_output(text in "\\PC{0,300}") {
        for doc_type in DocType::all() {
            let config = Config::builder().doc_type(*doc_type).build().unwrap();
            let segmenter = Segmenter::with_config(config).unwrap();
            for sentence in segmenter.segment(&text) {
                prop_assert!(!sentence.chars().any(sentinel::is_sentinel));
            }
        }
    }

    #[test]
    fn test_sentences_are_trimmed_and_non_empty(text in "\\PC{0,300}") {
        for sentence in Segmenter::new().segment(&text) {
            prop_assert!(!sentence.is_empty());
            prop_assert_eq!(sentence.trim(), sentence.as_str());
        }
    }

    #[test]
    fn test_prose_is_preserved(text in prose()) {
        let sentences = raw_segmenter().segment(&text);
        prop_assert_eq!(
            without_whitespace(&sentences.concat()),
            without_whitespace(&text)
        );
    }

    #[test]
    fn test_any_language_never_panics(
        text in "\\PC{0,200}",
        lang in prop::sample::select(vec!["en", "de", "nl", "ar", "ja", "zh", "hy", "el", "ru"]),
    ) {
        let _ = Segmenter::with_language(lang).segment(&text);
    }
}

#[test]
fn test_listed_abbreviations_never_split() {
    let cases = [
        ("nl", "Zie", ["Brown kwam hier.", "de rest volgt.", "12 keer."]),
        ("de", "Siehe", ["Brown kam hier.", "der Rest folgt.", "12 Mal."]),
        ("ar", "انظر", ["كتب الرجل.", "في البيت.", "12 مرة."]),
    ];

    for (code, lead, continuations) in cases {
        let config = embedded_config(code).unwrap();
        assert_eq!(config.abbreviations.policy, AbbreviationPolicy::Always);
        let segmenter = Segmenter::with_language(code);
        let abbr = &config.abbreviations;
        for entry in abbr.general.iter().chain(&abbr.prepositive).chain(&abbr.number) {
            for rest in continuations {
                let text = format!("{lead} {entry}. {rest}");
                let sentences = segmenter.segment(&text);
                assert_eq!(sentences, vec![text.clone()], "{code}: {entry}");
            }
        }
    }
}
