//! HTTP routes and handlers.
//!
//! ```text
//! POST /receipts/process        body: Receipt JSON   → {"id": "<uuid>"}
//! GET  /receipts/{id}/points                         → {"points": 28}
//! GET  /health                                       → {"status": "ok", "receipts": 3}
//! ```

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use rewards_core::{validation::validate_receipt, Receipt};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// Response for a stored receipt.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: String,
}

/// Response for a points query.
#[derive(Debug, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}

/// Response for the health endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub receipts: usize,
}

/// Builds the application router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/{id}/points", get(get_points))
        .route("/health", get(health))
        .with_state(state)
}

/// Decodes and stores a receipt.
///
/// The body is decoded from raw bytes so a missing or unusual content type
/// is not an error. Only the first JSON value is read: a top-level `null`
/// is an empty receipt and anything after the value is ignored, except in
/// strict mode where trailing data is rejected.
async fn process_receipt(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<Json<ProcessResponse>> {
    let receipt = decode_receipt(&body, state.config.strict_validation).map_err(|e| {
        debug!(error = %e, "Rejected receipt payload");
        ApiError::InvalidPayload(e)
    })?;

    if state.config.strict_validation {
        validate_receipt(&receipt)?;
    }

    let id = state.service.submit_receipt(receipt);
    Ok(Json(ProcessResponse { id: id.to_string() }))
}

fn decode_receipt(body: &[u8], reject_trailing: bool) -> serde_json::Result<Receipt> {
    let mut deserializer = serde_json::Deserializer::from_slice(body);
    let receipt = Option::<Receipt>::deserialize(&mut deserializer)?.unwrap_or_default();

    if reject_trailing {
        deserializer.end()?;
    }
    Ok(receipt)
}

async fn get_points(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    let points = state.service.compute_points(&id)?;
    Ok(Json(PointsResponse { points }))
}

async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        receipts: state.service.receipt_count(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
