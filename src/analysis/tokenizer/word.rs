//! Regex-based word tokenizer implementation.
//!
//! This is the default tokenizer. It splits text either on runs of non-word
//! characters or on runs of whitespace, depending on the configured
//! [`TokenizerMethod`].

use std::sync::LazyLock;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

static WORD_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\W+").expect("word-break pattern should be valid"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern should be valid"));

/// How a [`WordTokenizer`] decides where one token ends and the next begins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TokenizerMethod {
    /// Split on any run of non-word characters. Letters, digits and
    /// underscore are word characters; punctuation is discarded.
    #[default]
    SplitByWord,
    /// Split on any run of whitespace. Punctuation stays attached to tokens.
    SplitOnWhitespace,
}

impl TokenizerMethod {
    fn pattern(&self) -> &'static Regex {
        match self {
            TokenizerMethod::SplitByWord => &WORD_BREAKS,
            TokenizerMethod::SplitOnWhitespace => &WHITESPACE,
        }
    }
}

/// A tokenizer that splits text into words using a regex boundary pattern.
///
/// # Examples
///
/// ```
/// use krites::analysis::token::Token;
/// use krites::analysis::tokenizer::{Tokenizer, WordTokenizer};
///
/// let tokenizer = WordTokenizer::new();
/// let tokens: Vec<Token> = tokenizer.tokenize("hello, world!").unwrap().collect();
///
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].text, "hello");
/// assert_eq!(tokens[1].text, "world");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct WordTokenizer {
    method: TokenizerMethod,
}

impl WordTokenizer {
    /// Create a new word tokenizer that splits on word boundaries.
    pub fn new() -> Self {
        WordTokenizer {
            method: TokenizerMethod::SplitByWord,
        }
    }

    /// Create a new word tokenizer with the given split method.
    pub fn with_method(method: TokenizerMethod) -> Self {
        WordTokenizer { method }
    }

    /// Get the split method used by this tokenizer.
    pub fn method(&self) -> TokenizerMethod {
        self.method
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .method
            .pattern()
            .split(text)
            .filter(|word| !word.is_empty())
            .enumerate()
            .map(|(position, word)| Token::new(word, position))
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        match self.method {
            TokenizerMethod::SplitByWord => "word",
            TokenizerMethod::SplitOnWhitespace => "whitespace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokenizer: &WordTokenizer, input: &str) -> Vec<String> {
        tokenizer
            .tokenize(input)
            .unwrap()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_split_by_word() {
        let tokenizer = WordTokenizer::new();
        assert_eq!(
            texts(&tokenizer, "My very,interesting sentence!!"),
            vec!["My", "very", "interesting", "sentence"]
        );
    }

    #[test]
    fn test_split_by_word_keeps_digits_and_underscore() {
        let tokenizer = WordTokenizer::new();
        assert_eq!(
            texts(&tokenizer, "a1 snake_case 42"),
            vec!["a1", "snake_case", "42"]
        );
    }

    #[test]
    fn test_split_on_whitespace_keeps_punctuation() {
        let tokenizer = WordTokenizer::with_method(TokenizerMethod::SplitOnWhitespace);
        assert_eq!(
            texts(&tokenizer, "hello,  world!\tblah."),
            vec!["hello,", "world!", "blah."]
        );
    }

    #[test]
    fn test_empty_tokens_discarded() {
        let tokenizer = WordTokenizer::new();
        assert_eq!(texts(&tokenizer, "...!?"), Vec::<String>::new());
        assert_eq!(texts(&tokenizer, ""), Vec::<String>::new());
    }

    #[test]
    fn test_positions_are_sequential() {
        let tokenizer = WordTokenizer::new();
        let tokens: Vec<_> = tokenizer.tokenize("one two three").unwrap().collect();
        let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WordTokenizer::new().name(), "word");
        assert_eq!(
            WordTokenizer::with_method(TokenizerMethod::SplitOnWhitespace).name(),
            "whitespace"
        );
    }
}
