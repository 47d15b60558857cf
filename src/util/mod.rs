//! Shared utilities.

pub mod frequency;

pub use frequency::{most_frequent_words, sentences, word_frequency};
