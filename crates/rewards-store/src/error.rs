//! # Store Error Types
//!
//! The store has a single failure mode visible to callers: asking for a
//! receipt that was never stored.

use thiserror::Error;

/// Receipt store errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No receipt is stored under this id.
    ///
    /// ## When This Occurs
    /// - The id was never returned by a submission
    /// - The text is not a receipt id at all
    #[error("No receipt found for id: {id}")]
    NotFound { id: String },
}

impl StoreError {
    /// Creates a NotFound error for the given id text.
    pub fn not_found(id: impl Into<String>) -> Self {
        StoreError::NotFound { id: id.into() }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
