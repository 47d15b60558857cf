//! Word data source capabilities and the in-memory reference implementation.
//!
//! Storage comes in two capability levels. [`WordDataSource`] operates on the
//! implicit [`DEFAULT_CATEGORY`]; [`CategorizedWordDataSource`] extends it with
//! explicit categories, bulk access and pruning. A classifier handed a
//! non-default category but only the base capability fails with an
//! invalid-argument error instead of silently using the default category.
//!
//! Implementations may block (a database-backed source, for example); the
//! classifiers treat every call as an opaque synchronous operation and
//! propagate failures unchanged. Sharing one source between classifiers is
//! the collaborator's concern, including any locking; [`MemoryWordDataSource`]
//! is single-writer and not internally synchronized.

use ahash::AHashMap;

use crate::classifier::DEFAULT_CATEGORY;
use crate::classifier::word_probability::WordProbability;
use crate::error::Result;

/// Base storage capability: word statistics for the default category.
pub trait WordDataSource: Send + Sync {
    /// Record an occurrence of `word` in matching text.
    fn add_match(&mut self, word: &str) -> Result<()>;

    /// Record an occurrence of `word` in non-matching text.
    fn add_non_match(&mut self, word: &str) -> Result<()>;

    /// Look up the stored statistic for `word`, if any.
    fn word_probability(&self, word: &str) -> Result<Option<WordProbability>>;

    /// Get the name of this data source (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Extended storage capability: explicit categories, bulk access and pruning.
pub trait CategorizedWordDataSource: WordDataSource {
    /// Record an occurrence of `word` in text matching `category`.
    fn add_category_match(&mut self, category: &str, word: &str) -> Result<()>;

    /// Record an occurrence of `word` in text not matching `category`.
    fn add_category_non_match(&mut self, category: &str, word: &str) -> Result<()>;

    /// Look up the stored statistic for `word` in `category`, if any.
    fn category_word_probability(
        &self,
        category: &str,
        word: &str,
    ) -> Result<Option<WordProbability>>;

    /// Snapshot every stored word probability across all categories.
    fn all_word_probabilities(&self) -> Result<Vec<WordProbability>>;

    /// Drop non-informative entries: words shorter than 2 characters or with
    /// a probability in the open interval (0.45, 0.55).
    fn remove_insignificant(&mut self) -> Result<()>;
}

/// The storage handle a Bayesian classifier holds, tagged once at
/// construction with the capability level of the underlying source.
pub enum WordStore {
    /// A source without category support; only [`DEFAULT_CATEGORY`] works.
    Simple(Box<dyn WordDataSource>),
    /// A source with full category support.
    Categorized(Box<dyn CategorizedWordDataSource>),
}

impl WordStore {
    /// Whether non-default categories can be used with this store.
    pub fn supports_categories(&self) -> bool {
        matches!(self, WordStore::Categorized(_))
    }

    pub(crate) fn add_match(&mut self, category: &str, word: &str) -> Result<()> {
        match self {
            WordStore::Simple(source) => source.add_match(word),
            WordStore::Categorized(source) => source.add_category_match(category, word),
        }
    }

    pub(crate) fn add_non_match(&mut self, category: &str, word: &str) -> Result<()> {
        match self {
            WordStore::Simple(source) => source.add_non_match(word),
            WordStore::Categorized(source) => source.add_category_non_match(category, word),
        }
    }

    pub(crate) fn word_probability(
        &self,
        category: &str,
        word: &str,
    ) -> Result<Option<WordProbability>> {
        match self {
            WordStore::Simple(source) => source.word_probability(word),
            WordStore::Categorized(source) => source.category_word_probability(category, word),
        }
    }
}

/// In-memory reference implementation of both storage capabilities.
///
/// A single owned map keyed by `(category, word)`. Not thread-safe; wrap it
/// externally if concurrent teaching is required.
///
/// # Examples
///
/// ```
/// use krites::classifier::data_source::{MemoryWordDataSource, WordDataSource};
///
/// let mut source = MemoryWordDataSource::new();
/// source.add_match("java").unwrap();
/// source.add_match("java").unwrap();
/// source.add_non_match("java").unwrap();
///
/// let wp = source.word_probability("java").unwrap().unwrap();
/// assert_eq!(wp.match_count(), 2);
/// assert_eq!(wp.non_match_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemoryWordDataSource {
    words: AHashMap<(String, String), WordProbability>,
}

impl MemoryWordDataSource {
    /// Create an empty in-memory data source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored word probabilities.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if nothing has been taught yet.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn add(&mut self, category: &str, word: &str, matched: bool) {
        let key = (category.to_string(), word.to_string());
        match self.words.entry(key) {
            std::collections::hash_map::Entry::Occupied(mut entry) => {
                if matched {
                    entry.get_mut().increment_match();
                } else {
                    entry.get_mut().increment_non_match();
                }
            }
            std::collections::hash_map::Entry::Vacant(entry) => {
                entry.insert(if matched {
                    WordProbability::matched(word)
                } else {
                    WordProbability::non_matched(word)
                });
            }
        }
    }
}

impl WordDataSource for MemoryWordDataSource {
    fn add_match(&mut self, word: &str) -> Result<()> {
        self.add_category_match(DEFAULT_CATEGORY, word)
    }

    fn add_non_match(&mut self, word: &str) -> Result<()> {
        self.add_category_non_match(DEFAULT_CATEGORY, word)
    }

    fn word_probability(&self, word: &str) -> Result<Option<WordProbability>> {
        self.category_word_probability(DEFAULT_CATEGORY, word)
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

impl CategorizedWordDataSource for MemoryWordDataSource {
    fn add_category_match(&mut self, category: &str, word: &str) -> Result<()> {
        self.add(category, word, true);
        Ok(())
    }

    fn add_category_non_match(&mut self, category: &str, word: &str) -> Result<()> {
        self.add(category, word, false);
        Ok(())
    }

    fn category_word_probability(
        &self,
        category: &str,
        word: &str,
    ) -> Result<Option<WordProbability>> {
        let key = (category.to_string(), word.to_string());
        Ok(self.words.get(&key).cloned())
    }

    fn all_word_probabilities(&self) -> Result<Vec<WordProbability>> {
        Ok(self.words.values().cloned().collect())
    }

    fn remove_insignificant(&mut self) -> Result<()> {
        self.words.retain(|(_, word), wp| {
            if word.chars().count() < 2 {
                return false;
            }
            let probability = wp.probability();
            !(probability > 0.45 && probability < 0.55)
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_lookup() {
        let mut source = MemoryWordDataSource::new();
        assert!(source.word_probability("word").unwrap().is_none());

        source.add_match("word").unwrap();
        let wp = source.word_probability("word").unwrap().unwrap();
        assert_eq!(wp.match_count(), 1);
        assert_eq!(wp.non_match_count(), 0);

        source.add_non_match("word").unwrap();
        let wp = source.word_probability("word").unwrap().unwrap();
        assert_eq!(wp.non_match_count(), 1);
    }

    #[test]
    fn test_categories_are_independent() {
        let mut source = MemoryWordDataSource::new();
        source.add_category_match("spam", "winner").unwrap();
        source.add_category_non_match("ham", "winner").unwrap();

        let spam = source
            .category_word_probability("spam", "winner")
            .unwrap()
            .unwrap();
        assert_eq!(spam.probability(), 1.0);

        let ham = source
            .category_word_probability("ham", "winner")
            .unwrap()
            .unwrap();
        assert_eq!(ham.probability(), 0.0);
    }

    #[test]
    fn test_base_capability_uses_default_category() {
        let mut source = MemoryWordDataSource::new();
        source.add_match("word").unwrap();
        assert!(
            source
                .category_word_probability(DEFAULT_CATEGORY, "word")
                .unwrap()
                .is_some()
        );
    }

    #[test]
    fn test_remove_insignificant() {
        let mut source = MemoryWordDataSource::new();

        // informative: probability 1.0
        source.add_match("keep").unwrap();
        // too short
        source.add_match("x").unwrap();
        // probability 0.5, inside the non-informative band
        source.add_match("noise").unwrap();
        source.add_non_match("noise").unwrap();
        // probability exactly 0.45 stays; the band is an open interval
        for _ in 0..9 {
            source.add_match("edge").unwrap();
        }
        for _ in 0..11 {
            source.add_non_match("edge").unwrap();
        }

        source.remove_insignificant().unwrap();

        assert!(source.word_probability("keep").unwrap().is_some());
        assert!(source.word_probability("x").unwrap().is_none());
        assert!(source.word_probability("noise").unwrap().is_none());
        assert!(source.word_probability("edge").unwrap().is_some());
        assert_eq!(source.len(), 2);
    }

    #[test]
    fn test_all_word_probabilities() {
        let mut source = MemoryWordDataSource::new();
        source.add_category_match("a", "one").unwrap();
        source.add_category_match("b", "two").unwrap();
        assert_eq!(source.all_word_probabilities().unwrap().len(), 2);
    }

    #[test]
    fn test_word_store_capability_tag() {
        let simple = WordStore::Simple(Box::new(MemoryWordDataSource::new()));
        assert!(!simple.supports_categories());

        let categorized = WordStore::Categorized(Box::new(MemoryWordDataSource::new()));
        assert!(categorized.supports_categories());
    }
}
