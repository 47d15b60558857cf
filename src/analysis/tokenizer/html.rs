//! HTML-aware tokenizer implementation.
//!
//! Extracts the text an HTML page would actually display and tokenizes that.
//! The goal is tokenizing rendered content, not validating markup: the scanner
//! does not check well-formedness and silently tolerates unmatched tags. It
//! does not handle meta tags or alt/title attributes, but it does drop CSS
//! style definitions and script bodies.

use std::sync::LazyLock;

use regex::Regex;

use super::{Tokenizer, TokenizerMethod, WordTokenizer};
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// An entity reference is `&` followed by 2 to 8 characters and a `;`.
static ENTITY_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&.{2,8};").expect("entity pattern should be valid"));

/// A tokenizer for HTML documents.
///
/// The input is scanned one character at a time with two stacks: a tag-depth
/// marker stack (are we inside `<...>`) and a stack of currently open tag
/// names. Text inside `<script>` or `<style>` elements is suppressed. After
/// the scan, entity references are replaced by spaces and the remaining text
/// is delegated to a [`WordTokenizer`].
///
/// # Examples
///
/// ```
/// use krites::analysis::token::Token;
/// use krites::analysis::tokenizer::{HtmlTokenizer, Tokenizer};
///
/// let tokenizer = HtmlTokenizer::new();
/// let tokens: Vec<Token> = tokenizer
///     .tokenize("<p>Hello&nbsp;<b>world</b></p><script>var hidden = 1;</script>")
///     .unwrap()
///     .collect();
///
/// let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
/// assert_eq!(texts, vec!["Hello", "world"]);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct HtmlTokenizer {
    base: WordTokenizer,
}

impl HtmlTokenizer {
    /// Create a new HTML tokenizer that splits extracted text on word
    /// boundaries.
    pub fn new() -> Self {
        HtmlTokenizer {
            base: WordTokenizer::new(),
        }
    }

    /// Create a new HTML tokenizer with the given split method for the
    /// extracted text.
    pub fn with_method(method: TokenizerMethod) -> Self {
        HtmlTokenizer {
            base: WordTokenizer::with_method(method),
        }
    }

    /// Replace entity references (`&nbsp;`, `&amp;`, ...) with spaces so they
    /// act as word separators instead of gluing adjacent words together.
    fn resolve_entities(contents: &str) -> String {
        ENTITY_REFERENCE.replace_all(contents, " ").into_owned()
    }

    /// Scan the input and collect the characters a browser would display.
    fn extract_displayed_text(input: &str) -> String {
        // Markers pushed on '<' and popped on '>'; non-empty means we are
        // inside a tag and characters belong to the tag name.
        let mut tag_depth: Vec<()> = Vec::new();
        // Names of currently open tags, lower-cased, innermost last.
        let mut open_tags: Vec<String> = Vec::new();

        let mut displayed = String::new();
        let mut current_tag = String::new();

        for c in input.chars() {
            match c {
                '<' => {
                    tag_depth.push(());
                    current_tag.clear();
                }
                '>' => {
                    // Pop from an empty stack is a no-op; malformed inputs
                    // with stray '>' characters rely on this.
                    tag_depth.pop();
                    if current_tag.starts_with('/') {
                        open_tags.pop();
                    } else {
                        open_tags.push(current_tag.to_lowercase());
                    }
                }
                _ => {
                    if tag_depth.is_empty() {
                        // starts_with so attributes on the tag do not defeat
                        // the check
                        let suppressed = open_tags
                            .last()
                            .is_some_and(|tag| tag.starts_with("script") || tag.starts_with("style"));
                        if !suppressed {
                            displayed.push(c);
                        }
                    } else {
                        current_tag.push(c);
                    }
                }
            }
        }

        displayed
    }
}

impl Tokenizer for HtmlTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let displayed = Self::extract_displayed_text(text);
        let resolved = Self::resolve_entities(&displayed);
        self.base.tokenize(resolved.trim())
    }

    fn name(&self) -> &'static str {
        "html"
    }
}
