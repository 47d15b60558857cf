//! Term vector storage.

use ahash::AHashMap;

use super::term_vector::TermVector;

/// Storage for one term vector per category.
pub trait TermVectorStorage: Send + Sync {
    /// Store `term_vector` for `category`, replacing any prior vector.
    fn add_term_vector(&mut self, category: &str, term_vector: TermVector);

    /// Look up the term vector for `category`, if one was taught.
    fn term_vector(&self, category: &str) -> Option<&TermVector>;

    /// Get the name of this storage (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// In-memory term vector storage backed by a hash map.
#[derive(Debug, Default)]
pub struct MemoryTermVectorStorage {
    vectors: AHashMap<String, TermVector>,
}

impl MemoryTermVectorStorage {
    /// Create an empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored term vectors.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Check if no category has been taught yet.
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

impl TermVectorStorage for MemoryTermVectorStorage {
    fn add_term_vector(&mut self, category: &str, term_vector: TermVector) {
        self.vectors.insert(category.to_string(), term_vector);
    }

    fn term_vector(&self, category: &str) -> Option<&TermVector> {
        self.vectors.get(category)
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
