//! # Error Types
//!
//! Domain-specific error types for rewards-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  rewards-core errors (this file)                                        │
//! │  ├── CoreError        - Malformed receipt identifiers                   │
//! │  └── ValidationError  - Strict-mode field failures                      │
//! │                                                                         │
//! │  rewards-store errors (separate crate)                                  │
//! │  └── StoreError       - Unknown receipt id                              │
//! │                                                                         │
//! │  rewards-api errors (in app)                                            │
//! │  └── ApiError         - What HTTP clients see (status + JSON body)      │
//! │                                                                         │
//! │  Flow: ValidationError ──────→ ApiError (400)                           │
//! │        StoreError::NotFound ─→ ApiError (404)                           │
//! │        CoreError ────────────→ StoreError::NotFound (bad id lookup)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Scoring never produces an error. A rule whose input does not parse just
//! contributes nothing.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The text is not a receipt identifier.
    #[error("Invalid receipt id: {0}")]
    InvalidReceiptId(String),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field validation errors raised by [`crate::validation`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Invalid format (e.g., `9.0` for a total, `2022-1-1` for a date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// A collection has fewer entries than allowed.
    #[error("{field} must contain at least {min} entries")]
    TooFew { field: String, min: usize },
}
