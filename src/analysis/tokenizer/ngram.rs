//! Word n-gram tokenizer implementation.

use std::sync::Arc;

use ahash::AHashSet;

use super::{Tokenizer, WordTokenizer};
use crate::analysis::stop_words::{DefaultStopWordProvider, StopWordProvider};
use crate::analysis::token::{Token, TokenStream};
use crate::error::{KritesError, Result};

/// A tokenizer that composes word n-grams over a base tokenizer.
///
/// Base tokens of length 1 or less and stop words are discarded. For each
/// retained token the unigram is emitted along with every space-joined window
/// of 2 up to `ngram_length` following tokens that fits fully in range. The
/// output is de-duplicated and its order is unspecified.
///
/// # Examples
///
/// ```
/// use krites::analysis::tokenizer::{NgramTokenizer, Tokenizer};
///
/// let tokenizer = NgramTokenizer::new(2).unwrap();
/// let mut grams: Vec<String> = tokenizer
///     .tokenize("quick brown fox")
///     .unwrap()
///     .map(|t| t.text)
///     .collect();
/// grams.sort();
///
/// assert_eq!(
///     grams,
///     vec!["brown", "brown fox", "fox", "quick", "quick brown"]
/// );
/// ```
pub struct NgramTokenizer {
    ngram_length: usize,
    base: Arc<dyn Tokenizer>,
    stop_words: Arc<dyn StopWordProvider>,
}

impl NgramTokenizer {
    /// Create a new n-gram tokenizer over a word-boundary base tokenizer and
    /// the default stop words.
    ///
    /// # Errors
    ///
    /// Returns an error if `ngram_length` is 0.
    pub fn new(ngram_length: usize) -> Result<Self> {
        Self::with_parts(
            ngram_length,
            Arc::new(WordTokenizer::new()),
            Arc::new(DefaultStopWordProvider::new()),
        )
    }

    /// Create a new n-gram tokenizer with an explicit base tokenizer and stop
    /// word provider.
    pub fn with_parts(
        ngram_length: usize,
        base: Arc<dyn Tokenizer>,
        stop_words: Arc<dyn StopWordProvider>,
    ) -> Result<Self> {
        if ngram_length == 0 {
            return Err(KritesError::invalid_argument(
                "ngram_length must be at least 1",
            ));
        }
        Ok(NgramTokenizer {
            ngram_length,
            base,
            stop_words,
        })
    }

    /// Get the maximum n-gram length.
    pub fn ngram_length(&self) -> usize {
        self.ngram_length
    }
}

impl Tokenizer for NgramTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let retained: Vec<String> = self
            .base
            .tokenize(text)?
            .map(|token| token.text)
            .filter(|word| word.chars().count() > 1 && !self.stop_words.is_stop_word(word))
            .collect();

        let mut grams: AHashSet<String> = AHashSet::new();
        for i in 0..retained.len() {
            grams.insert(retained[i].clone());
            let mut gram = retained[i].clone();
            for word in retained.iter().skip(i + 1).take(self.ngram_length - 1) {
                gram.push(' ');
                gram.push_str(word);
                grams.insert(gram.clone());
            }
        }

        Ok(Box::new(
            grams
                .into_iter()
                .enumerate()
                .map(|(position, text)| Token::new(text, position)),
        ))
    }

    fn name(&self) -> &'static str {
        "ngram"
    }
}
