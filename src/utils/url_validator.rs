//! Original-URL validation.
//!
//! URLs are validated, never rewritten: the string the caller submits is
//! the string the redirect later returns.

use crate::error::AppError;
use url::Url;

/// Checks that `input` parses as an absolute HTTP or HTTPS URL.
///
/// # Errors
///
/// Returns [`AppError::InvalidUrl`] for malformed or relative URLs and for
/// any scheme other than `http`/`https` (`javascript:`, `data:`, `file:`
/// and friends are all rejected here).
pub fn validate_url(input: &str) -> Result<(), AppError> {
    let parsed = Url::parse(input).map_err(|e| AppError::invalid_url(e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(AppError::invalid_url(format!(
            "unsupported scheme '{other}', only http and https are allowed"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http() {
        assert!(validate_url("http://example.com").is_ok());
    }

    #[test]
    fn test_accepts_https() {
        assert!(validate_url("https://example.com/path?q=rust#frag").is_ok());
    }

    #[test]
    fn test_accepts_custom_port_and_ip() {
        assert!(validate_url("http://192.168.1.1:8080/api").is_ok());
        assert!(validate_url("http://localhost:3000/test").is_ok());
    }

    #[test]
    fn test_rejects_ftp() {
        let err = validate_url("ftp://x.com").unwrap_err();
        assert!(matches!(err, AppError::InvalidUrl { .. }));
    }

    #[test]
    fn test_rejects_javascript() {
        assert!(validate_url("javascript:alert('xss')").is_err());
    }

    #[test]
    fn test_rejects_data_and_mailto() {
        assert!(validate_url("data:text/plain,Hello").is_err());
        assert!(validate_url("mailto:test@example.com").is_err());
    }

    #[test]
    fn test_rejects_relative() {
        assert!(validate_url("example.com").is_err());
        assert!(validate_url("/just/a/path").is_err());
    }

    #[test]
    fn test_rejects_empty() {
        assert!(validate_url("").is_err());
    }
}
