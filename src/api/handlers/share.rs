//! Handler for sharing code and redirecting to the playground.

use axum::{
    extract::{RawQuery, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::api::dto::share::ShareQuery;
use crate::error::AppError;
use crate::state::AppState;

/// Shares the `code` query parameter and redirects to the viewer URL.
///
/// # Endpoint
///
/// `GET /?code=<percent-encoded source>`
///
/// # Request Flow
///
/// 1. Take the first `code` value, then validate and percent-decode it
/// 2. POST the decoded code to the upstream share service
/// 3. Return 302 Found to `<base-url><share-id>`
///
/// # Errors
///
/// - 400 Bad Request if `code` is missing, empty or badly encoded
/// - 413 Payload Too Large if the decoded code is over the configured limit
/// - 500 Internal Server Error if the upstream share fails for any reason
pub async fn share_handler(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Response, AppError> {
    let query = ShareQuery::from_raw(raw_query.as_deref());
    let url = state.share_service.share(query.code.as_deref()).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, url)]).into_response())
}
