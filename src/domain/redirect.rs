//! Viewer URL composition.

use crate::domain::entities::ShareResult;

/// Builds the viewer URL for a shared snippet.
///
/// Plain concatenation: the identifier is not escaped, so `base_url` must
/// carry its own trailing separator (e.g. `https://play.golang.org/p/`).
pub fn compose_redirect_url(base_url: &str, result: &ShareResult) -> String {
    format!("{}{}", base_url, result.share_id())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_redirect_url() {
        let result = ShareResult::from_body("abc123\n").unwrap();
        assert_eq!(
            compose_redirect_url("https://play.golang.org/p/", &result),
            "https://play.golang.org/p/abc123"
        );
    }

    #[test]
    fn test_compose_does_not_add_separator() {
        let result = ShareResult::from_body("xyz").unwrap();
        assert_eq!(
            compose_redirect_url("https://go.dev/play/p", &result),
            "https://go.dev/play/pxyz"
        );
    }
}
