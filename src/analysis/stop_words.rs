//! Stop word providers.
//!
//! Stop words are common words ("the", "and", ...) that carry little
//! discriminative signal and are excluded from classification statistics.
//! Matching is case-sensitive against whatever the caller passes in; callers
//! normalize case before checking.

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

/// Default English stop words list.
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

/// Default English stop words as a HashSet.
pub static DEFAULT_ENGLISH_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_ENGLISH_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

static EMPTY_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(HashSet::new);

/// Trait answering "is this token a stop word?".
pub trait StopWordProvider: Send + Sync {
    /// Check if a word is a stop word.
    fn is_stop_word(&self, word: &str) -> bool;

    /// Get the full set of stop words.
    fn stop_words(&self) -> &HashSet<String>;
}

/// A stop word provider backed by a word set, defaulting to common English
/// stop words.
///
/// # Examples
///
/// ```
/// use krites::analysis::stop_words::{DefaultStopWordProvider, StopWordProvider};
///
/// let provider = DefaultStopWordProvider::new();
/// assert!(provider.is_stop_word("the"));
/// assert!(!provider.is_stop_word("hello"));
///
/// let custom = DefaultStopWordProvider::from_words(vec!["foo", "bar"]);
/// assert!(custom.is_stop_word("foo"));
/// ```
#[derive(Clone, Debug)]
pub struct DefaultStopWordProvider {
    stop_words: Arc<HashSet<String>>,
}

impl DefaultStopWordProvider {
    /// Create a provider with the default English stop words.
    pub fn new() -> Self {
        Self::with_stop_words(DEFAULT_ENGLISH_STOP_WORDS_SET.clone())
    }

    /// Create a provider with a custom stop word set.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        DefaultStopWordProvider {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Create a provider from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_stop_words(words.into_iter().map(|s| s.into()).collect())
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for DefaultStopWordProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl StopWordProvider for DefaultStopWordProvider {
    fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    fn stop_words(&self) -> &HashSet<String> {
        &self.stop_words
    }
}

/// A provider that treats nothing as a stop word.
///
/// Useful when every token matters, for example when classifying names.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoStopWordProvider;

impl StopWordProvider for NoStopWordProvider {
    fn is_stop_word(&self, _word: &str) -> bool {
        false
    }

    fn stop_words(&self) -> &HashSet<String> {
        &EMPTY_STOP_WORDS_SET
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_provider() {
        let provider = DefaultStopWordProvider::new();
        assert!(provider.is_stop_word("and"));
        assert!(provider.is_stop_word("there"));
        assert!(!provider.is_stop_word("hello"));
        assert_eq!(provider.len(), 33);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let provider = DefaultStopWordProvider::new();
        assert!(provider.is_stop_word("the"));
        assert!(!provider.is_stop_word("The"));
    }

    #[test]
    fn test_custom_words() {
        let provider = DefaultStopWordProvider::from_words(vec!["custom", "words"]);
        assert!(provider.is_stop_word("custom"));
        assert!(!provider.is_stop_word("the"));
        assert_eq!(provider.stop_words().len(), 2);
    }

    #[test]
    fn test_no_stop_word_provider() {
        let provider = NoStopWordProvider;
        assert!(!provider.is_stop_word("the"));
        assert!(provider.stop_words().is_empty());
    }
}
