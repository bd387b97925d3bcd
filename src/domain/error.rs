//! Error taxonomy for the share round-trip.
//!
//! Every variant is request-scoped. Client-input failures are detected before
//! any network call is made; upstream failures come from the single POST to
//! the share service.

/// Reasons percent-decoding of the `code` parameter can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("malformed escape sequence {escape:?} at byte {position}")]
    MalformedEscape { position: usize, escape: String },

    #[error("decoded code is not valid UTF-8")]
    InvalidUtf8,
}

/// Failures of a single share attempt.
#[derive(Debug, thiserror::Error)]
pub enum ShareError {
    #[error("missing 'code' parameter")]
    MissingParameter,

    #[error("invalid code parameter: {0}")]
    InvalidParameter(#[from] DecodeError),

    #[error("code is {size} bytes, limit is {limit} bytes")]
    PayloadTooLarge { size: usize, limit: usize },

    #[error("failed to post to playground: {0}")]
    UpstreamUnreachable(String),

    #[error("playground returned status {status}")]
    UpstreamRejected { status: u16 },

    #[error("failed to read playground response: {0}")]
    UpstreamReadError(String),

    #[error("empty share ID received")]
    UpstreamEmptyResult,
}

impl ShareError {
    /// Stable identifier of the variant, used in logs and metric labels.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingParameter => "missing_parameter",
            Self::InvalidParameter(_) => "invalid_parameter",
            Self::PayloadTooLarge { .. } => "payload_too_large",
            Self::UpstreamUnreachable(_) => "upstream_unreachable",
            Self::UpstreamRejected { .. } => "upstream_rejected",
            Self::UpstreamReadError(_) => "upstream_read_error",
            Self::UpstreamEmptyResult => "upstream_empty_result",
        }
    }
}
