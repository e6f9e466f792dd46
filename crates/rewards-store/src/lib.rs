//! # rewards-store: In-Memory Receipt Store
//!
//! Holds submitted receipts for the lifetime of the process and serves the
//! two operations the HTTP layer needs.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Rewards Data Flow                                │
//! │                                                                         │
//! │  POST /receipts/process          GET /receipts/{id}/points             │
//! │       │                                │                                │
//! │       ▼                                ▼                                │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 rewards-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   RewardsService::submit_receipt   RewardsService::compute_points│   │
//! │  │          │                                │                     │   │
//! │  │          ▼                                ▼                     │   │
//! │  │   ReceiptStore::put ──► RwLock<HashMap<ReceiptId, Arc<Receipt>>> │   │
//! │  │                                ▲          │                     │   │
//! │  │                 ReceiptStore::get ────────┘                     │   │
//! │  └────────────────────────────────────────────┬────────────────────┘   │
//! │                                               │ Arc<Receipt> snapshot   │
//! │                                               ▼                         │
//! │                              rewards_core::calculate_points             │
//! │                              (runs outside the lock)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The receipt map and its lock
//! - [`service`] - SubmitReceipt / ComputePoints
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust
//! use rewards_core::{Item, Receipt};
//! use rewards_store::RewardsService;
//!
//! let service = RewardsService::new();
//! let receipt = Receipt {
//!     retailer: "Target".to_string(),
//!     purchase_date: "2022-01-01".to_string(),
//!     purchase_time: "13:01".to_string(),
//!     total: "35.35".to_string(),
//!     items: vec![Item::new("Emils Cheese Pizza", "12.25")],
//! };
//!
//! let id = service.submit_receipt(receipt);
//! let points = service.compute_points(&id.to_string()).unwrap();
//! assert_eq!(points, 6 + 3 + 6);
//!
//! assert!(service.compute_points("no-such-receipt").is_err());
//! ```

pub mod error;
pub mod service;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use service::RewardsService;
pub use store::ReceiptStore;
