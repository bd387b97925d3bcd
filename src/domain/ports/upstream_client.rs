//! Port for the upstream share service.

use crate::domain::entities::ShareResult;
use crate::domain::error::ShareError;
use async_trait::async_trait;

/// Client that hands decoded code to a share service and returns its identifier.
///
/// Implementations make exactly one attempt per call: no retries, no backoff.
///
/// # Implementations
///
/// - [`crate::infrastructure::playground::PlaygroundClient`] - HTTP client for the Go Playground
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/upstream_client.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    /// Shares `code` and returns the trimmed identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ShareError::UpstreamUnreachable`] on transport failure,
    /// [`ShareError::UpstreamRejected`] on a non-200 status,
    /// [`ShareError::UpstreamReadError`] if the body cannot be read and
    /// [`ShareError::UpstreamEmptyResult`] if the body is blank.
    async fn share(&self, code: &str) -> Result<ShareResult, ShareError>;
}
