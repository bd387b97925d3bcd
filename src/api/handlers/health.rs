//! Handler for health check endpoint.

/// Liveness check.
///
/// # Endpoint
///
/// `GET /health`
///
/// Always answers `200 OK` with body `OK`; the upstream is not contacted.
pub async fn health_handler() -> &'static str {
    "OK"
}
