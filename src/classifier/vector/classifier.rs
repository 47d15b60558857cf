//! Cosine-similarity vector classifier.

use std::sync::Arc;

use ahash::AHashMap;

use super::math::cosine;
use super::storage::{MemoryTermVectorStorage, TermVectorStorage};
use super::term_vector::TermVector;
use crate::analysis::stop_words::{DefaultStopWordProvider, StopWordProvider};
use crate::analysis::tokenizer::{Tokenizer, WordTokenizer};
use crate::classifier::{Classifier, Trainable};
use crate::error::{KritesError, Result};
use crate::util::frequency::{most_frequent_words, word_frequency};

/// Default match cutoff for the vector classifier.
pub const DEFAULT_VECTOR_CUTOFF: f64 = 0.80;

/// Default number of terms kept in a category's term vector.
pub const DEFAULT_VECTOR_TERM_COUNT: usize = 25;

/// A classifier that compares documents to a per-category term vector by
/// cosine similarity.
///
/// Teaching builds the category fingerprint from the most frequent words of
/// the training text; classification projects the input onto exactly that
/// term list and measures the cosine between the two frequency vectors. The
/// model has no concept of negative evidence, so
/// [`VectorClassifier::teach_non_match`] is a no-op.
///
/// # Examples
///
/// ```
/// use krites::classifier::vector::VectorClassifier;
///
/// # fn main() -> krites::error::Result<()> {
/// let mut classifier = VectorClassifier::new();
/// classifier.teach_match("rust", "ownership borrowing lifetimes ownership traits")?;
///
/// assert_eq!(classifier.classify("rust", "knitting")?, 0.0);
/// assert!(classifier.classify("rust", "ownership traits")? > 0.5);
/// # Ok(())
/// # }
/// ```
pub struct VectorClassifier {
    tokenizer: Arc<dyn Tokenizer>,
    stop_words: Arc<dyn StopWordProvider>,
    storage: Box<dyn TermVectorStorage>,
    case_sensitive: bool,
    cutoff: f64,
    term_count: usize,
}

impl VectorClassifier {
    /// Create a classifier with in-memory storage, a word-boundary tokenizer
    /// and the default English stop words.
    pub fn new() -> Self {
        Self::with_storage(Box::new(MemoryTermVectorStorage::new()))
    }

    /// Create a classifier over an explicit term vector storage.
    pub fn with_storage(storage: Box<dyn TermVectorStorage>) -> Self {
        VectorClassifier {
            tokenizer: Arc::new(WordTokenizer::new()),
            stop_words: Arc::new(DefaultStopWordProvider::new()),
            storage,
            case_sensitive: false,
            cutoff: DEFAULT_VECTOR_CUTOFF,
            term_count: DEFAULT_VECTOR_TERM_COUNT,
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

    /// Set case sensitivity (false by default).
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Set the match cutoff.
    pub fn with_cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = cutoff;
        self
    }

    /// Set the number of terms kept per category vector.
    pub fn with_term_count(mut self, term_count: usize) -> Self {
        self.term_count = term_count;
        self
    }

    /// Get the match cutoff.
    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Get the storage backing this classifier.
    pub fn storage(&self) -> &dyn TermVectorStorage {
        self.storage.as_ref()
    }

    /// Classify `input` against `category`, returning the cosine similarity
    /// in `[0, 1]`. An unknown category yields 0.0.
    pub fn classify(&self, category: &str, input: &str) -> Result<f64> {
        check_category(category)?;

        let frequencies = self.frequencies(input)?;
        match self.storage.term_vector(category) {
            None => Ok(0.0),
            Some(tv) => {
                let input_values = term_values(tv.terms(), &frequencies);
                cosine(&input_values, tv.values())
            }
        }
    }

    /// Check whether `input` classifies strictly above the cutoff.
    pub fn is_match(&self, category: &str, input: &str) -> Result<bool> {
        Ok(self.classify(category, input)? > self.cutoff)
    }

    /// Build and store the term vector for `category` from `input`,
    /// replacing any prior vector.
    ///
    /// The most frequent words are selected by descending frequency bucket,
    /// so ties can push the vector past the configured term count rather
    /// than being split arbitrarily.
    pub fn teach_match(&mut self, category: &str, input: &str) -> Result<()> {
        check_category(category)?;

        let frequencies = self.frequencies(input)?;
        let mut terms: Vec<String> = most_frequent_words(self.term_count, &frequencies)
            .into_iter()
            .collect();
        terms.sort_unstable();

        let values = term_values(&terms, &frequencies);
        self.storage
            .add_term_vector(category, TermVector::new(terms, values)?);
        Ok(())
    }

    /// Intentionally a no-op: the vector model has no negative evidence.
    pub fn teach_non_match(&mut self, _category: &str, _input: &str) -> Result<()> {
        Ok(())
    }

    fn frequencies(&self, input: &str) -> Result<AHashMap<String, u32>> {
        word_frequency(
            input,
            self.case_sensitive,
            self.tokenizer.as_ref(),
            Some(self.stop_words.as_ref()),
        )
    }
}

impl Default for VectorClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for VectorClassifier {
    fn classify(&self, category: &str, input: &str) -> Result<f64> {
        VectorClassifier::classify(self, category, input)
    }

    fn is_match(&self, category: &str, input: &str) -> Result<bool> {
        VectorClassifier::is_match(self, category, input)
    }

    fn cutoff(&self) -> f64 {
        self.cutoff
    }
}

impl Trainable for VectorClassifier {
    fn teach_match(&mut self, category: &str, input: &str) -> Result<()> {
        VectorClassifier::teach_match(self, category, input)
    }

    fn teach_non_match(&mut self, category: &str, input: &str) -> Result<()> {
        VectorClassifier::teach_non_match(self, category, input)
    }
}

fn check_category(category: &str) -> Result<()> {
    if category.is_empty() {
        return Err(KritesError::invalid_argument("category cannot be empty"));
    }
    Ok(())
}

/// Project a frequency map onto a fixed term list; absent terms get 0.
fn term_values(terms: &[String], frequencies: &AHashMap<String, u32>) -> Vec<u32> {
    terms
        .iter()
        .map(|term| frequencies.get(term).copied().unwrap_or(0))
        .collect()
}
