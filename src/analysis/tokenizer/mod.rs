//! Tokenizer implementations for text analysis.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    ///
    /// The returned stream is finite, single-pass, and owns its tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual tokenizer modules
pub mod html;
pub mod ngram;
pub mod word;

// Re-export all tokenizers for convenient access
pub use html::HtmlTokenizer;
pub use ngram::NgramTokenizer;
pub use word::{TokenizerMethod, WordTokenizer};
