//! Bayesian text classifier.
//!
//! Combines per-word match probabilities into one document-level probability
//! using the two-class Bayes combination `xy / (xy + z)` where
//! `xy = Π p_i` and `z = Π (1 - p_i)`.

use std::sync::Arc;

use crate::analysis::stop_words::{DefaultStopWordProvider, StopWordProvider};
use crate::analysis::tokenizer::{Tokenizer, WordTokenizer};
use crate::classifier::data_source::{MemoryWordDataSource, WordStore};
use crate::classifier::{
    Classifier, DEFAULT_CATEGORY, LOWER_BOUND, NEUTRAL_PROBABILITY, Trainable, UPPER_BOUND,
};
use crate::error::{KritesError, Result};

/// Default match cutoff for the Bayesian classifier.
pub const DEFAULT_BAYESIAN_CUTOFF: f64 = 0.9;

/// A trainable classifier based on Bayes' theorem.
///
/// The basic usage pattern is teach-then-classify:
///
/// ```
/// use krites::classifier::DEFAULT_CATEGORY;
/// use krites::classifier::bayesian::BayesianClassifier;
///
/// # fn main() -> krites::error::Result<()> {
/// let mut classifier = BayesianClassifier::new();
/// classifier.teach_match(DEFAULT_CATEGORY, "deposit bonus winner")?;
/// classifier.teach_non_match(DEFAULT_CATEGORY, "meeting agenda minutes")?;
///
/// let probability = classifier.classify(DEFAULT_CATEGORY, "bonus winner")?;
/// assert!(probability > 0.9);
/// # Ok(())
/// # }
/// ```
pub struct BayesianClassifier {
    store: WordStore,
    tokenizer: Arc<dyn Tokenizer>,
    stop_words: Arc<dyn StopWordProvider>,
    case_sensitive: bool,
    cutoff: f64,
}

impl BayesianClassifier {
    /// Create a classifier with an in-memory categorized data source, a
    /// word-boundary tokenizer and the default English stop words.
    pub fn new() -> Self {
        Self::with_store(WordStore::Categorized(Box::new(MemoryWordDataSource::new())))
    }

    /// Create a classifier over an explicit word store.
    ///
    /// The store's capability level is fixed here: a [`WordStore::Simple`]
    /// store rejects every non-default category with an invalid-argument
    /// error.
    pub fn with_store(store: WordStore) -> Self {
        BayesianClassifier {
            store,
            tokenizer: Arc::new(WordTokenizer::new()),
            stop_words: Arc::new(DefaultStopWordProvider::new()),
            case_sensitive: false,
            cutoff: DEFAULT_BAYESIAN_CUTOFF,
        }
    }

    /// Set the tokenizer.
    pub fn with_tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Set the stop word provider.
    pub fn with_stop_words(mut self, stop_words: Arc<dyn StopWordProvider>) -> Self {
        self.stop_words = stop_words;
        self
    }

    /// Set case sensitivity. When insensitive (the default), words are
    /// lower-cased before storage and lookup.
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Set the match cutoff.
    pub fn with_cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = cutoff;
        self
    }

    /// Get the match cutoff.
    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Check if the classifier is case sensitive (false by default).
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Get the word store backing this classifier.
    pub fn store(&self) -> &WordStore {
        &self.store
    }

    /// Classify `input` against `category`, returning a probability clamped
    /// into `[LOWER_BOUND, UPPER_BOUND]`.
    ///
    /// Tokens that are stop words or have no stored statistic contribute
    /// nothing. With zero informative tokens the result is exactly the
    /// neutral probability 0.5.
    pub fn classify(&self, category: &str, input: &str) -> Result<f64> {
        self.check_category(category)?;

        let mut probabilities = Vec::new();
        for token in self.tokenizer.tokenize(input)? {
            if !self.is_classifiable(&token.text) {
                continue;
            }
            let word = self.transform_word(&token.text);
            if let Some(wp) = self.store.word_probability(category, &word)? {
                probabilities.push(wp.probability());
            }
        }

        Ok(normalize_significance(combine_probabilities(
            &probabilities,
        )))
    }

    /// Check whether `input` classifies at or above the cutoff.
    pub fn is_match(&self, category: &str, input: &str) -> Result<bool> {
        Ok(self.classify(category, input)? >= self.cutoff)
    }

    /// Teach every classifiable word of `input` as evidence for `category`.
    ///
    /// Duplicated words increment their counter multiple times; teaching is
    /// frequency-weighted.
    pub fn teach_match(&mut self, category: &str, input: &str) -> Result<()> {
        self.teach(category, input, true)
    }

    /// Teach every classifiable word of `input` as evidence against
    /// `category`.
    pub fn teach_non_match(&mut self, category: &str, input: &str) -> Result<()> {
        self.teach(category, input, false)
    }

    fn teach(&mut self, category: &str, input: &str, matched: bool) -> Result<()> {
        self.check_category(category)?;

        for token in self.tokenizer.tokenize(input)? {
            if !self.is_classifiable(&token.text) {
                continue;
            }
            let word = self.transform_word(&token.text);
            if matched {
                self.store.add_match(category, &word)?;
            } else {
                self.store.add_non_match(category, &word)?;
            }
        }
        Ok(())
    }

    fn check_category(&self, category: &str) -> Result<()> {
        if category.is_empty() {
            return Err(KritesError::invalid_argument("category cannot be empty"));
        }
        if category != DEFAULT_CATEGORY && !self.store.supports_categories() {
            return Err(KritesError::invalid_argument(
                "word data source does not support non-default categories",
            ));
        }
        Ok(())
    }

    fn is_classifiable(&self, word: &str) -> bool {
        !word.is_empty() && !self.stop_words.is_stop_word(word)
    }

    fn transform_word(&self, word: &str) -> String {
        if self.case_sensitive {
            word.to_string()
        } else {
            word.to_lowercase()
        }
    }
}

impl Default for BayesianClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for BayesianClassifier {
    fn classify(&self, category: &str, input: &str) -> Result<f64> {
        BayesianClassifier::classify(self, category, input)
    }

    fn is_match(&self, category: &str, input: &str) -> Result<bool> {
        BayesianClassifier::is_match(self, category, input)
    }

    fn cutoff(&self) -> f64 {
        self.cutoff
    }
}

impl Trainable for BayesianClassifier {
    fn teach_match(&mut self, category: &str, input: &str) -> Result<()> {
        BayesianClassifier::teach_match(self, category, input)
    }

    fn teach_non_match(&mut self, category: &str, input: &str) -> Result<()> {
        BayesianClassifier::teach_non_match(self, category, input)
    }
}

/// Combine per-word probabilities in token order: `xy / (xy + z)` with
/// `xy = Π p_i` and `z = Π (1 - p_i)`. Zero surviving words is defined as the
/// neutral probability.
fn combine_probabilities(probabilities: &[f64]) -> f64 {
    if probabilities.is_empty() {
        return NEUTRAL_PROBABILITY;
    }

    let mut xy = 1.0;
    let mut z = 1.0;
    for p in probabilities {
        xy *= p;
        z *= 1.0 - p;
    }

    // Both products vanish when certain evidence conflicts (some p_i == 1.0
    // and another == 0.0); that is no evidence either way, not a 0/0.
    let denominator = xy + z;
    if denominator == 0.0 {
        NEUTRAL_PROBABILITY
    } else {
        xy / denominator
    }
}

/// Clamp a probability into `[LOWER_BOUND, UPPER_BOUND]` so later
/// multiplicative combinations never collapse to a hard 0 or 1.
fn normalize_significance(significance: f64) -> f64 {
    significance.clamp(LOWER_BOUND, UPPER_BOUND)
}
