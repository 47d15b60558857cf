//! The per-word sufficient statistic for Bayesian classification.

use serde::{Deserialize, Serialize};

use crate::classifier::NEUTRAL_PROBABILITY;

/// Match and non-match counts for one word in one category.
///
/// Counts are monotonically non-decreasing; mutation happens only through the
/// increment operations. A word with zero counts is never materialized in
/// storage, so [`WordProbability::probability`] always has real evidence
/// behind it.
///
/// # Examples
///
/// ```
/// use krites::classifier::word_probability::WordProbability;
///
/// let mut wp = WordProbability::matched("java");
/// wp.increment_match();
/// wp.increment_non_match();
///
/// assert_eq!(wp.match_count(), 2);
/// assert_eq!(wp.non_match_count(), 1);
/// assert!((wp.probability() - 2.0 / 3.0).abs() < f64::EPSILON);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordProbability {
    word: String,
    match_count: u64,
    non_match_count: u64,
}

impl WordProbability {
    /// Create a word probability with explicit counts.
    pub fn new<S: Into<String>>(word: S, match_count: u64, non_match_count: u64) -> Self {
        WordProbability {
            word: word.into(),
            match_count,
            non_match_count,
        }
    }

    /// Create a word probability for a word first seen in matching text.
    pub fn matched<S: Into<String>>(word: S) -> Self {
        Self::new(word, 1, 0)
    }

    /// Create a word probability for a word first seen in non-matching text.
    pub fn non_matched<S: Into<String>>(word: S) -> Self {
        Self::new(word, 0, 1)
    }

    /// Get the word this statistic belongs to.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Get the number of times the word was seen in matching text.
    pub fn match_count(&self) -> u64 {
        self.match_count
    }

    /// Get the number of times the word was seen in non-matching text.
    pub fn non_match_count(&self) -> u64 {
        self.non_match_count
    }

    /// Record another occurrence in matching text.
    pub fn increment_match(&mut self) {
        self.match_count += 1;
    }

    /// Record another occurrence in non-matching text.
    pub fn increment_non_match(&mut self) {
        self.non_match_count += 1;
    }

    /// The probability that text containing this word is a match.
    pub fn probability(&self) -> f64 {
        let total = self.match_count + self.non_match_count;
        if total == 0 {
            NEUTRAL_PROBABILITY
        } else {
            self.match_count as f64 / total as f64
        }
    }
}
