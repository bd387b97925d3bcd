//! Request-scoped entities for a single share round-trip.

/// Source code supplied by the caller, before and after percent-decoding.
///
/// Built by [`crate::domain::decoder::decode_code`]; never outlives the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    raw: String,
    decoded: String,
}

impl ShareRequest {
    /// Creates a new ShareRequest instance.
    pub fn new(raw: String, decoded: String) -> Self {
        Self { raw, decoded }
    }

    /// The query value as received, before decoding.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The text forwarded to the upstream share service.
    pub fn decoded(&self) -> &str {
        &self.decoded
    }
}

/// Identifier returned by the upstream share service.
///
/// Always non-empty and free of surrounding whitespace. The identifier is
/// otherwise opaque: its character set is not checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareResult {
    share_id: String,
}

impl ShareResult {
    /// Builds a result from a raw upstream body.
    ///
    /// Returns `None` if the body is empty or only whitespace.
    pub fn from_body(body: &str) -> Option<Self> {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return None;
        }

        Some(Self {
            share_id: trimmed.to_string(),
        })
    }

    pub fn share_id(&self) -> &str {
        &self.share_id
    }
}
