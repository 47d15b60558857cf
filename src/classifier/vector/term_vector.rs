//! Term vector model.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{KritesError, Result};

/// A category fingerprint: lexicographically sorted unique terms paired with
/// their frequencies in the training sample.
///
/// Immutable once constructed; re-teaching a category replaces its vector
/// wholesale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermVector {
    terms: Vec<String>,
    values: Vec<u32>,
}

impl TermVector {
    /// Create a term vector from aligned terms and values.
    ///
    /// # Errors
    ///
    /// Returns an error if the two sequences differ in length.
    pub fn new(terms: Vec<String>, values: Vec<u32>) -> Result<Self> {
        if terms.len() != values.len() {
            return Err(KritesError::invalid_argument(
                "terms and values must have the same length",
            ));
        }
        Ok(TermVector { terms, values })
    }

    /// Get the sorted term list.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Get the frequency of each term, aligned with [`TermVector::terms`].
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Get the number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Check if the vector has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl fmt::Display for TermVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (term, value) in self.terms.iter().zip(&self.values) {
            write!(f, "[{term}, {value}] ")?;
        }
        write!(f, "}}")
    }
}
