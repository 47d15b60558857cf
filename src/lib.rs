//! # Krites
//!
//! An incrementally trained text classification library for Rust.
//!
//! Krites classifies free text against named categories using two
//! interchangeable algorithms: a Bayesian word-probability combiner and a
//! vector cosine-similarity matcher. Classifiers are taught incrementally
//! ("this text matches", "this text does not") and then queried for the
//! probability that new text matches a category.
//!
//! ## Features
//!
//! - Word, whitespace, HTML-aware and n-gram tokenizers
//! - Stop word filtering
//! - Pluggable word-probability and term-vector storage
//! - Per-category training with a single default category for simple cases
//!
//! ## Example
//!
//! ```
//! use krites::classifier::DEFAULT_CATEGORY;
//! use krites::classifier::bayesian::BayesianClassifier;
//!
//! # fn main() -> krites::error::Result<()> {
//! let mut classifier = BayesianClassifier::new();
//! classifier.teach_match(DEFAULT_CATEGORY, "limited offer claim your bonus now")?;
//! classifier.teach_non_match(DEFAULT_CATEGORY, "the quarterly report is attached")?;
//!
//! let probability = classifier.classify(DEFAULT_CATEGORY, "claim bonus")?;
//! assert!(probability > 0.9);
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod classifier;
pub mod error;
pub mod util;

pub mod prelude {
    //! Convenient re-exports of the most commonly used types.

    pub use crate::analysis::stop_words::{
        DefaultStopWordProvider, NoStopWordProvider, StopWordProvider,
    };
    pub use crate::analysis::token::{Token, TokenStream};
    pub use crate::analysis::tokenizer::{
        HtmlTokenizer, NgramTokenizer, Tokenizer, TokenizerMethod, WordTokenizer,
    };
    pub use crate::classifier::{
        BayesianClassifier, Classifier, DEFAULT_CATEGORY, MemoryWordDataSource, Trainable,
        VectorClassifier, WordDataSource, WordProbability, WordStore,
    };
    pub use crate::error::{KritesError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
