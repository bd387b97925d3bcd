//! Extraction and percent-decoding of the inbound `code` parameter.
//!
//! Decoding follows query-unescape rules: `+` becomes a space and `%XX`
//! becomes the byte `0xXX`. A `%` that is not followed by two hex digits is
//! rejected, as is a result that is not valid UTF-8.

use crate::domain::entities::ShareRequest;
use crate::domain::error::{DecodeError, ShareError};

/// Validates and decodes the raw `code` query value.
///
/// The decoded form may be empty (e.g. `code=%20` trims to nothing upstream);
/// the upstream service decides what counts as valid code.
///
/// # Errors
///
/// - [`ShareError::MissingParameter`] if `raw` is absent or empty
/// - [`ShareError::InvalidParameter`] if decoding fails
/// - [`ShareError::PayloadTooLarge`] if the decoded code exceeds `max_code_bytes`
pub fn decode_code(raw: Option<&str>, max_code_bytes: usize) -> Result<ShareRequest, ShareError> {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Err(ShareError::MissingParameter),
    };

    let decoded = query_unescape(raw)?;

    if decoded.len() > max_code_bytes {
        return Err(ShareError::PayloadTooLarge {
            size: decoded.len(),
            limit: max_code_bytes,
        });
    }

    Ok(ShareRequest::new(raw.to_string(), decoded))
}

/// Percent-decodes a query component.
///
/// # Errors
///
/// Returns [`DecodeError::MalformedEscape`] for a truncated or non-hex escape
/// and [`DecodeError::InvalidUtf8`] if the decoded bytes are not UTF-8.
pub fn query_unescape(input: &str) -> Result<String, DecodeError> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let hi = bytes.get(i + 1).copied().and_then(hex_value);
                let lo = bytes.get(i + 2).copied().and_then(hex_value);
                match (hi, lo) {
                    (Some(hi), Some(lo)) => {
                        out.push((hi << 4) | lo);
                        i += 3;
                    }
                    _ => {
                        let end = (i + 3).min(bytes.len());
                        return Err(DecodeError::MalformedEscape {
                            position: i,
                            escape: String::from_utf8_lossy(&bytes[i..end]).into_owned(),
                        });
                    }
                }
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8(out).map_err(|_| DecodeError::InvalidUtf8)
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
