//! HTTP client for the Go Playground share endpoint.

use crate::domain::entities::ShareResult;
use crate::domain::error::ShareError;
use crate::domain::ports::UpstreamClient;
use async_trait::async_trait;
use reqwest::{StatusCode, header::CONTENT_TYPE};
use tracing::{debug, error};

/// Content type the playground expects on share requests.
pub const SHARE_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Posts code to a playground-compatible share endpoint.
///
/// The decoded code is sent as the raw request body under a form-urlencoded
/// content type; the playground reads the body verbatim. Uses the client's
/// default timeouts and makes a single attempt per call. Every exit path
/// drops the response, which returns or closes its connection; a rejected
/// response's body is never read.
pub struct PlaygroundClient {
    http: reqwest::Client,
    share_url: String,
}

impl PlaygroundClient {
    /// Creates a client posting to `share_url` through a shared connection pool.
    pub fn new(http: reqwest::Client, share_url: impl Into<String>) -> Self {
        Self {
            http,
            share_url: share_url.into(),
        }
    }
}

#[async_trait]
impl UpstreamClient for PlaygroundClient {
    async fn share(&self, code: &str) -> Result<ShareResult, ShareError> {
        debug!(share_url = %self.share_url, bytes = code.len(), "Posting code to playground");

        let response = self
            .http
            .post(&self.share_url)
            .header(CONTENT_TYPE, SHARE_CONTENT_TYPE)
            .body(code.to_owned())
            .send()
            .await
            .map_err(|e| {
                error!(share_url = %self.share_url, error = %e, "Failed to reach playground");
                ShareError::UpstreamUnreachable(e.to_string())
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            error!(share_url = %self.share_url, status = status.as_u16(), "Playground rejected share request");
            return Err(ShareError::UpstreamRejected {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| {
            error!(share_url = %self.share_url, error = %e, "Failed to read playground response");
            ShareError::UpstreamReadError(e.to_string())
        })?;

        ShareResult::from_body(&String::from_utf8_lossy(&body)).ok_or_else(|| {
            error!(share_url = %self.share_url, "Empty share ID received");
            ShareError::UpstreamEmptyResult
        })
    }
}
