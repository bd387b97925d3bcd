//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /?code=...`  - Share code and redirect to the playground
//! - `GET  /health`     - Liveness check
//!
//! # Middleware
//!
//! Outermost first:
//!
//! - **Request ID** - Assigns `x-request-id` when missing
//! - **Tracing** - Structured request/response logging
//! - **Request ID propagation** - Echoes `x-request-id` on the response
//! - **Recovery** - Turns handler panics into a generic 500

use crate::api;
use crate::api::middleware::{recovery, request_id, tracing};
use crate::state::AppState;
use axum::Router;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes::routes())
        .with_state(state)
        .layer(recovery::layer())
        .layer(request_id::propagate_layer())
        .layer(tracing::layer())
        .layer(request_id::set_layer())
}
