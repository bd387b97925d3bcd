//! Share orchestration: decode, forward, compose.

use std::sync::Arc;

use crate::domain::decoder::decode_code;
use crate::domain::error::ShareError;
use crate::domain::ports::UpstreamClient;
use crate::domain::redirect::compose_redirect_url;
use tracing::{debug, info, warn};

/// Metric counting share requests by outcome.
pub const SHARE_REQUESTS_METRIC: &str = "share_requests_total";

/// Service turning a raw `code` query value into a viewer URL.
///
/// Stateless and reentrant: any number of requests may run through one
/// instance concurrently. Input is validated before the upstream is contacted.
pub struct ShareService {
    upstream: Arc<dyn UpstreamClient>,
    base_url: String,
    max_code_bytes: usize,
}

impl ShareService {
    /// Creates a new share service.
    ///
    /// # Arguments
    ///
    /// - `upstream` - Client for the share service
    /// - `base_url` - Viewer URL prefix the identifier is appended to
    /// - `max_code_bytes` - Largest decoded code accepted for forwarding
    pub fn new(
        upstream: Arc<dyn UpstreamClient>,
        base_url: impl Into<String>,
        max_code_bytes: usize,
    ) -> Self {
        Self {
            upstream,
            base_url: base_url.into(),
            max_code_bytes,
        }
    }

    /// Shares the code and returns the URL to redirect the caller to.
    ///
    /// # Errors
    ///
    /// Returns the [`ShareError`] of the first failing step. Input failures
    /// never reach the upstream. Failures are logged here or in the upstream
    /// client, where they are detected.
    pub async fn share(&self, raw_code: Option<&str>) -> Result<String, ShareError> {
        let request = decode_code(raw_code, self.max_code_bytes).inspect_err(|e| {
            warn!(kind = e.kind(), error = %e, "Rejected share request");
            record_outcome(e.kind());
        })?;
        debug!(
            raw_bytes = request.raw().len(),
            decoded_bytes = request.decoded().len(),
            "Decoded share request"
        );

        let result = self
            .upstream
            .share(request.decoded())
            .await
            .inspect_err(|e| record_outcome(e.kind()))?;

        let url = compose_redirect_url(&self.base_url, &result);
        info!(url = %url, share_id = result.share_id(), "Redirecting to playground");
        record_outcome("shared");

        Ok(url)
    }
}

fn record_outcome(outcome: &'static str) {
    metrics::counter!(SHARE_REQUESTS_METRIC, "outcome" => outcome).increment(1);
}
