//! Route configuration.

use crate::api::handlers::{health_handler, share_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All public routes.
///
/// # Endpoints
///
/// - `GET /`        - Share `code` and redirect to the playground
/// - `GET /health`  - Liveness check
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(share_handler))
        .route("/health", get(health_handler))
}
