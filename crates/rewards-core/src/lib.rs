//! # rewards-core: Pure Scoring Logic
//!
//! This crate is the **heart** of the rewards service. It turns a submitted
//! purchase receipt into a points score with pure functions and zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Rewards Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    rewards-api (axum)                           │   │
//! │  │    POST /receipts/process      GET /receipts/{id}/points        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                rewards-store (ReceiptStore)                     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ rewards-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  amount   │  │  points   │  │ validation│  │   │
//! │  │   │  Receipt  │  │  Amount   │  │  rules    │  │  strict   │  │   │
//! │  │   │   Item    │  │  parsing  │  │ breakdown │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Receipt, Item, ReceiptId)
//! - [`amount`] - Monetary string parsing with the scoring arithmetic
//! - [`points`] - The points rules and their per-rule breakdown
//! - [`error`] - Domain error types
//! - [`validation`] - Strict field-format checks
//!
//! ## Example Usage
//!
//! ```rust
//! use rewards_core::{calculate_points, Item, Receipt};
//!
//! let receipt = Receipt {
//!     retailer: "M&M Corner Market".to_string(),
//!     purchase_date: "2022-03-20".to_string(),
//!     purchase_time: "14:33".to_string(),
//!     total: "9.00".to_string(),
//!     items: vec![Item::new("Gatorade", "2.25"); 4],
//! };
//!
//! // 14 (name) + 50 (round dollar) + 10 (two pairs)
//! assert_eq!(calculate_points(&receipt), 74);
//! ```

pub mod amount;
pub mod error;
pub mod points;
pub mod types;
pub mod validation;

pub use amount::Amount;
pub use error::{CoreError, ValidationError};
pub use points::{calculate_points, PointsBreakdown};
pub use types::*;
