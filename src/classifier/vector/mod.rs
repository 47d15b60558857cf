//! Vector-space classification: term vectors, cosine math, storage and the
//! classifier itself.

pub mod classifier;
pub mod math;
pub mod storage;
pub mod term_vector;

// Re-export commonly used types
pub use classifier::{DEFAULT_VECTOR_CUTOFF, DEFAULT_VECTOR_TERM_COUNT, VectorClassifier};
pub use math::{cosine, scalar_product, vector_length};
pub use storage::{MemoryTermVectorStorage, TermVectorStorage};
pub use term_vector::TermVector;
