//! Classifiers and their supporting storage contracts.
//!
//! Two interchangeable algorithms live here: the Bayesian word-probability
//! combiner ([`bayesian::BayesianClassifier`]) and the cosine-similarity
//! matcher ([`vector::VectorClassifier`]). Both are taught incrementally and
//! queried per category.

use crate::error::Result;

pub mod bayesian;
pub mod data_source;
pub mod vector;
pub mod word_probability;

// Re-export commonly used types
pub use bayesian::{BayesianClassifier, DEFAULT_BAYESIAN_CUTOFF};
pub use data_source::{
    CategorizedWordDataSource, MemoryWordDataSource, WordDataSource, WordStore,
};
pub use vector::VectorClassifier;
pub use word_probability::WordProbability;

/// The category used when the caller does not specify one.
pub const DEFAULT_CATEGORY: &str = "DEFAULT";

/// The probability returned when no evidence exists for or against a match.
pub const NEUTRAL_PROBABILITY: f64 = 0.5;

/// The lowest probability a classifier ever reports; never exactly 0 so that
/// later multiplicative combinations cannot collapse to a hard zero.
pub const LOWER_BOUND: f64 = 0.01;

/// The highest probability a classifier ever reports; never exactly 1.
pub const UPPER_BOUND: f64 = 0.99;

/// Common query surface of every classifier.
pub trait Classifier {
    /// Classify `input` against `category`, returning a value in `[0, 1]`.
    fn classify(&self, category: &str, input: &str) -> Result<f64>;

    /// Check whether `input` matches `category` per this classifier's cutoff.
    fn is_match(&self, category: &str, input: &str) -> Result<bool>;

    /// Get the match cutoff.
    fn cutoff(&self) -> f64;
}

/// Common training surface of every classifier.
pub trait Trainable {
    /// Teach `input` as an example of `category`.
    fn teach_match(&mut self, category: &str, input: &str) -> Result<()>;

    /// Teach `input` as a counter-example of `category`.
    fn teach_non_match(&mut self, category: &str, input: &str) -> Result<()>;
}
