//! DTOs for the share endpoint.

use url::form_urlencoded;

/// Query string of `GET /`.
///
/// `code` arrives form-decoded; it is decoded once more by
/// [`crate::domain::decoder::decode_code`].
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ShareQuery {
    pub code: Option<String>,
}

impl ShareQuery {
    /// Parses a raw query string, keeping the first `code` value.
    ///
    /// Repeated keys and unrelated parameters never fail the request.
    pub fn from_raw(query: Option<&str>) -> Self {
        let code = query.and_then(|q| {
            form_urlencoded::parse(q.as_bytes())
                .find(|(key, _)| key == "code")
                .map(|(_, value)| value.into_owned())
        });

        Self { code }
    }
}
