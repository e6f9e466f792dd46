//! # Receipt Store
//!
//! Concurrency-safe map from [`ReceiptId`] to [`Receipt`].
//!
//! ## Thread Safety
//! The map sits behind a single `RwLock` owned by the store; nothing outside
//! this module can reach it. Each operation holds the lock for exactly one
//! insert or one lookup, so a reader either sees a whole receipt or none.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store Operations                                     │
//! │                                                                         │
//! │  Caller                   Lock          Map Change                      │
//! │  ──────                   ────          ──────────                      │
//! │                                                                         │
//! │  put(receipt) ──────────► write ──────► insert(new id, Arc<Receipt>)   │
//! │                                                                         │
//! │  get(id) ───────────────► read ───────► clone Arc (cheap)              │
//! │                                                                         │
//! │  len() ─────────────────► read ───────► (read only)                    │
//! │                                                                         │
//! │  NOTE: Entries are never removed or replaced.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Receipts are stored as `Arc<Receipt>`: `get` hands out a shared immutable
//! snapshot and scoring happens after the lock is released.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use rewards_core::{Receipt, ReceiptId};
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// In-memory receipt store.
///
/// ## Invariants
/// - Each stored receipt has exactly one id, assigned by [`ReceiptStore::put`]
/// - Ids are never reused and entries are never removed
/// - A successful `get` always returns the receipt exactly as it was put
#[derive(Debug, Default)]
pub struct ReceiptStore {
    receipts: RwLock<HashMap<ReceiptId, Arc<Receipt>>>,
}

impl ReceiptStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        ReceiptStore::default()
    }

    /// Stores `receipt` under a freshly generated id and returns the id.
    ///
    /// Never fails. UUID v4 collisions are not guarded against.
    pub fn put(&self, receipt: Receipt) -> ReceiptId {
        let id = ReceiptId::generate();
        let receipt = Arc::new(receipt);

        // The map is only ever mutated by a single insert, so a panic in
        // another holder cannot have left it half-written.
        self.receipts
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, receipt);

        debug!(id = %id, "Stored receipt");
        id
    }

    /// Returns the receipt stored under `id`.
    pub fn get(&self, id: &ReceiptId) -> StoreResult<Arc<Receipt>> {
        self.receipts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(id.to_string()))
    }

    /// Number of stored receipts.
    pub fn len(&self) -> usize {
        self.receipts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
