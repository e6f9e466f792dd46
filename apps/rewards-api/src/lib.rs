//! # Rewards API
//!
//! HTTP server that accepts purchase receipts and reports their rewards
//! points.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Rewards API                                     │
//! │                                                                         │
//! │  ┌────────────────────┐  ┌────────────────────┐  ┌──────────────────┐  │
//! │  │ POST               │  │ GET                │  │ GET              │  │
//! │  │ /receipts/process  │  │ /receipts/{id}/    │  │ /health          │  │
//! │  │                    │  │        points      │  │                  │  │
//! │  │ • decode JSON      │  │ • look up receipt  │  │ • receipt count  │  │
//! │  │ • strict checks    │  │ • score it         │  │                  │  │
//! │  │ • store, return id │  │ • 404 if unknown   │  │                  │  │
//! │  └─────────┬──────────┘  └─────────┬──────────┘  └────────┬─────────┘  │
//! │            └───────────────────────┼──────────────────────┘            │
//! │                                    ▼                                    │
//! │                     RewardsService (rewards-store)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `PORT` - HTTP port (default: 8080)
//! - `BIND_ADDR` - Bind address (default: 0.0.0.0)
//! - `LOG_LEVEL` - Log filter when `RUST_LOG` is unset (default: info)
//! - `STRICT_VALIDATION` - Reject malformed receipt fields (default: false)

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

pub use config::ApiConfig;
pub use error::ApiError;
pub use routes::build_router;

use rewards_store::RewardsService;

/// Shared application state.
pub struct AppState {
    pub service: RewardsService,
    pub config: ApiConfig,
}

impl AppState {
    /// State with an empty receipt store.
    pub fn new(config: ApiConfig) -> Self {
        AppState {
            service: RewardsService::new(),
            config,
        }
    }
}

/// Binds to the configured address and serves until `shutdown` resolves.
pub async fn serve<F>(config: ApiConfig, shutdown: F) -> std::io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let bind_addr = config.bind_address();
    let listener = TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, strict = config.strict_validation, "Server is running");

    let app = build_router(Arc::new(AppState::new(config)));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}
