//! Text analysis module for krites.
//!
//! This module provides the tokenization layer that feeds the classifiers:
//! word, HTML-aware and n-gram tokenizers, plus stop word filtering.

pub mod stop_words;
pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use stop_words::*;
pub use token::*;
pub use tokenizer::*;
