//! Error types for the krites library.
//!
//! All fallible operations return [`Result`], which carries a [`KritesError`].
//! The error surface is deliberately small: callers either passed something
//! unusable ([`KritesError::InvalidArgument`]) or a collaborator-supplied word
//! data source failed ([`KritesError::DataSource`]). Everything else (empty
//! token lists, unknown categories, zero-magnitude vectors) has a defined
//! numeric outcome and is not an error.
//!
//! # Examples
//!
//! ```
//! use krites::error::{KritesError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(KritesError::invalid_argument("category cannot be empty"))
//! }
//!
//! assert!(example_operation().is_err());
//! ```

use thiserror::Error;

/// The main error type for krites operations.
#[derive(Error, Debug)]
pub enum KritesError {
    /// The caller supplied an unusable argument (empty category, unsupported
    /// category on a non-categorized data source, mismatched vector lengths).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A failure surfaced by a collaborator-supplied word data source,
    /// propagated unchanged.
    #[error("Data source error: {0}")]
    DataSource(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with [`KritesError`].
pub type Result<T> = std::result::Result<T, KritesError>;

impl KritesError {
    /// Create a new invalid-argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        KritesError::InvalidArgument(msg.into())
    }

    /// Wrap a collaborator failure as a data source error.
    pub fn data_source<E>(err: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        KritesError::DataSource(err.into())
    }
}
