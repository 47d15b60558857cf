//! Integration tests for the Bayesian classifier and its data sources.

use std::sync::Arc;

use krites::analysis::stop_words::NoStopWordProvider;
use krites::classifier::bayesian::BayesianClassifier;
use krites::classifier::data_source::{
    CategorizedWordDataSource, MemoryWordDataSource, WordStore,
};
use krites::classifier::{DEFAULT_CATEGORY, LOWER_BOUND, NEUTRAL_PROBABILITY, UPPER_BOUND};
use krites::error::KritesError;

#[test]
fn test_repeated_matches_drive_probability_to_the_upper_bound() {
    let mut classifier = BayesianClassifier::new();
    for _ in 0..20 {
        classifier
            .teach_match(DEFAULT_CATEGORY, "java is a programming language")
            .unwrap();
    }

    let probability = classifier.classify(DEFAULT_CATEGORY, "java").unwrap();
    assert_eq!(probability, UPPER_BOUND);
    assert!(classifier.is_match(DEFAULT_CATEGORY, "java").unwrap());
}

#[test]
fn test_teaching_is_frequency_weighted() {
    let mut classifier = BayesianClassifier::new();
    // "java" occurs three times in the matching sample and once in the
    // non-matching one; set-based teaching would give 1/2 instead of 3/4.
    classifier
        .teach_match(DEFAULT_CATEGORY, "java java java")
        .unwrap();
    classifier.teach_non_match(DEFAULT_CATEGORY, "java").unwrap();

    let probability = classifier.classify(DEFAULT_CATEGORY, "java").unwrap();
    assert!((probability - 0.75).abs() < 1e-12);
}

#[test]
fn test_zero_informative_tokens_is_neutral() {
    let classifier = BayesianClassifier::new();

    // nothing taught at all
    assert_eq!(
        classifier.classify(DEFAULT_CATEGORY, "anything here").unwrap(),
        NEUTRAL_PROBABILITY
    );
    // stop words only
    assert_eq!(
        classifier.classify(DEFAULT_CATEGORY, "the and of").unwrap(),
        NEUTRAL_PROBABILITY
    );
}

#[test]
fn test_results_stay_clamped() {
    let mut classifier = BayesianClassifier::new();
    classifier
        .teach_match(DEFAULT_CATEGORY, "always matching words")
        .unwrap();
    classifier
        .teach_non_match(DEFAULT_CATEGORY, "never matching words")
        .unwrap();

    for input in ["always", "never", "always never", "words", "unseen"] {
        let p = classifier.classify(DEFAULT_CATEGORY, input).unwrap();
        assert!(
            (LOWER_BOUND..=UPPER_BOUND).contains(&p),
            "out of bounds for {input:?}: {p}"
        );
    }
}

#[test]
fn test_multiple_categories_with_one_classifier() {
    let mut classifier = BayesianClassifier::new();
    classifier
        .teach_match("lang", "rust ownership borrowing")
        .unwrap();
    classifier.teach_non_match("lang", "knitting yarn").unwrap();
    classifier.teach_match("craft", "knitting yarn").unwrap();

    assert_eq!(classifier.classify("lang", "rust").unwrap(), UPPER_BOUND);
    assert_eq!(classifier.classify("lang", "knitting").unwrap(), LOWER_BOUND);
    assert_eq!(classifier.classify("craft", "knitting").unwrap(), UPPER_BOUND);
}

#[test]
fn test_simple_store_rejects_non_default_categories() {
    let store = WordStore::Simple(Box::new(MemoryWordDataSource::new()));
    let mut classifier = BayesianClassifier::with_store(store);

    // checked before any lookup or teach is attempted
    assert!(matches!(
        classifier.classify("spam", "words"),
        Err(KritesError::InvalidArgument(_))
    ));
    assert!(matches!(
        classifier.teach_non_match("spam", "words"),
        Err(KritesError::InvalidArgument(_))
    ));

    classifier.teach_match(DEFAULT_CATEGORY, "words").unwrap();
    assert_eq!(
        classifier.classify(DEFAULT_CATEGORY, "words").unwrap(),
        UPPER_BOUND
    );
}

#[test]
fn test_no_stop_word_provider_keeps_every_token() {
    // classifying names: even "an" and "the" carry signal
    let mut classifier =
        BayesianClassifier::new().with_stop_words(Arc::new(NoStopWordProvider));
    classifier.teach_match(DEFAULT_CATEGORY, "the rock").unwrap();

    assert_eq!(
        classifier.classify(DEFAULT_CATEGORY, "the").unwrap(),
        UPPER_BOUND
    );
}

#[test]
fn test_pruning_insignificant_words() {
    let mut source = MemoryWordDataSource::new();
    source.add_category_match("spam", "winner").unwrap();
    // ambiguous word: probability 1/2
    source.add_category_match("spam", "offer").unwrap();
    source.add_category_non_match("spam", "offer").unwrap();
    // too short to be informative
    source.add_category_match("spam", "x").unwrap();

    source.remove_insignificant().unwrap();

    assert!(
        source
            .category_word_probability("spam", "winner")
            .unwrap()
            .is_some()
    );
    assert!(
        source
            .category_word_probability("spam", "offer")
            .unwrap()
            .is_none()
    );
    assert!(
        source
            .category_word_probability("spam", "x")
            .unwrap()
            .is_none()
    );
}
