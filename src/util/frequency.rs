//! Word-frequency utilities shared by the classifiers.

use std::sync::LazyLock;

use ahash::{AHashMap, AHashSet};
use regex::Regex;

use crate::analysis::stop_words::StopWordProvider;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

static SENTENCE_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+(\s|$)").expect("sentence pattern should be valid"));

/// Count how often each word occurs in `input`.
///
/// Unless `case_sensitive` is set, the whole input is lower-cased before
/// tokenization. Passing `None` for `stop_words` disables filtering entirely,
/// including the blank-token check; this is an explicit mode, not an error.
///
/// # Examples
///
/// ```
/// use krites::analysis::stop_words::DefaultStopWordProvider;
/// use krites::analysis::tokenizer::WordTokenizer;
/// use krites::util::frequency::word_frequency;
///
/// let tokenizer = WordTokenizer::new();
/// let stop_words = DefaultStopWordProvider::new();
/// let frequencies =
///     word_frequency("Hello there hello again", false, &tokenizer, Some(&stop_words)).unwrap();
///
/// assert_eq!(frequencies.get("hello"), Some(&2));
/// assert_eq!(frequencies.get("there"), None);
/// ```
pub fn word_frequency(
    input: &str,
    case_sensitive: bool,
    tokenizer: &dyn Tokenizer,
    stop_words: Option<&dyn StopWordProvider>,
) -> Result<AHashMap<String, u32>> {
    let converted;
    let input = if case_sensitive {
        input
    } else {
        converted = input.to_lowercase();
        converted.as_str()
    };

    let mut frequencies = AHashMap::new();
    for token in tokenizer.tokenize(input)? {
        if let Some(provider) = stop_words {
            if token.text.trim().is_empty() || provider.is_stop_word(&token.text) {
                continue;
            }
        }
        *frequencies.entry(token.text).or_insert(0) += 1;
    }
    Ok(frequencies)
}

/// Select the `count` highest-frequency words.
///
/// Words are collected by descending frequency bucket: every word at a given
/// frequency is taken before moving to the next lower frequency, so a tie in
/// the last included bucket can make the result exceed `count`. This
/// over-inclusion is deliberate; ties are never split arbitrarily.
pub fn most_frequent_words(count: usize, frequencies: &AHashMap<String, u32>) -> AHashSet<String> {
    let mut result = AHashSet::new();
    let Some(&max) = frequencies.values().max() else {
        return result;
    };

    let mut freq = max;
    while result.len() < count && freq > 0 {
        for (word, &f) in frequencies {
            if f == freq {
                result.insert(word.clone());
            }
        }
        freq -= 1;
    }
    result
}

/// Split text into sentences on `.`, `!` or `?` followed by whitespace or the
/// end of the input.
pub fn sentences(input: &str) -> Vec<&str> {
    SENTENCE_BREAKS
        .split(input)
        .filter(|s| !s.is_empty())
        .collect()
}
