//! # Rewards Service
//!
//! The two operations exposed to the HTTP layer.
//!
//! ## Operation Flow
//! ```text
//! submit_receipt(receipt)                 compute_points("3f2a…")
//!      │                                       │
//!      ▼                                       ▼
//! ReceiptStore::put                       parse id ── malformed ──► NotFound
//!      │                                       │
//!      ▼                                       ▼
//! ReceiptId                               ReceiptStore::get ── missing ──► NotFound
//!                                              │
//!                                              ▼
//!                                         PointsBreakdown::for_receipt
//!                                              │
//!                                              ▼
//!                                         points (u64)
//! ```

use std::sync::Arc;

use rewards_core::{PointsBreakdown, Receipt, ReceiptId};
use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};
use crate::store::ReceiptStore;

/// Submission and scoring on top of a [`ReceiptStore`].
///
/// Cheap to clone; clones share the same store.
#[derive(Debug, Clone, Default)]
pub struct RewardsService {
    store: Arc<ReceiptStore>,
}

impl RewardsService {
    /// Creates a service backed by a new, empty store.
    pub fn new() -> Self {
        RewardsService::default()
    }

    /// Stores a receipt and returns its new id.
    ///
    /// Always succeeds; shape checks happen before this call.
    pub fn submit_receipt(&self, receipt: Receipt) -> ReceiptId {
        let item_count = receipt.items.len();
        let id = self.store.put(receipt);

        info!(id = %id, item_count, "Receipt accepted");
        id
    }

    /// Scores the receipt stored under `id`.
    ///
    /// Text that is not a receipt id is reported as [`StoreError::NotFound`],
    /// the same as a well-formed id that was never issued.
    pub fn compute_points(&self, id: &str) -> StoreResult<u64> {
        let breakdown = self.points_breakdown(id)?;
        let points = breakdown.total();

        debug!(id = %id, points, ?breakdown, "Computed points");
        Ok(points)
    }

    /// Per-rule points for the receipt stored under `id`.
    pub fn points_breakdown(&self, id: &str) -> StoreResult<PointsBreakdown> {
        let receipt = self.lookup(id)?;
        Ok(PointsBreakdown::for_receipt(&receipt))
    }

    /// Number of receipts held.
    pub fn receipt_count(&self) -> usize {
        self.store.len()
    }

    fn lookup(&self, id: &str) -> StoreResult<Arc<Receipt>> {
        let result = id
            .parse::<ReceiptId>()
            .map_err(|_| StoreError::not_found(id))
            .and_then(|receipt_id| self.store.get(&receipt_id));

        if result.is_err() {
            warn!(id = %id, "Receipt not found");
        }
        result
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
