//! Token types for text analysis.
//!
//! A [`Token`] is the unit that flows out of a tokenizer and into the
//! classifiers. Tokens carry their text and their position in the stream;
//! classifiers combine word probabilities in token order, so position is
//! part of the contract.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single unit of text produced by tokenization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token.
    pub text: String,

    /// The position of the token in the token stream (0-based).
    pub position: usize,
}

impl Token {
    /// Create a new token with the given text and position.
    ///
    /// # Examples
    ///
    /// ```
    /// use krites::analysis::token::Token;
    ///
    /// let token = Token::new("hello", 0);
    /// assert_eq!(token.text, "hello");
    /// assert_eq!(token.position, 0);
    /// ```
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
        }
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens produced by a tokenizer.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("hello", 3);
        assert_eq!(token.text, "hello");
        assert_eq!(token.position, 3);
        assert_eq!(token.len(), 5);
        assert!(!token.is_empty());
    }

    #[test]
    fn test_token_display() {
        let token = Token::new("world", 0);
        assert_eq!(format!("{token}"), "world");
    }

    #[test]
    fn test_token_serde_round_trip() {
        let token = Token::new("hello", 1);
        let json = serde_json::to_string(&token).unwrap();
        let back: Token = serde_json::from_str(&json).unwrap();
        assert_eq!(token, back);
    }
}
