//! Validation of URLs submitted for shortening.
//!
//! Only absolute `http`/`https` URLs with a host are accepted. The submitted
//! string is stored as given (after trimming), so two spellings of the same
//! address produce two links.

use url::Url;

/// Longest URL accepted for shortening, in bytes.
pub const MAX_URL_LENGTH: usize = 2048;

/// Errors that can occur during URL validation.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL is required")]
    Missing,

    #[error("Invalid URL format")]
    InvalidFormat,

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL exceeds {MAX_URL_LENGTH} characters")]
    TooLong,
}

/// Validates a URL and returns the trimmed string to store.
///
/// # Errors
///
/// - [`UrlValidationError::Missing`] for empty or whitespace-only input
/// - [`UrlValidationError::TooLong`] above [`MAX_URL_LENGTH`]
/// - [`UrlValidationError::InvalidFormat`] for unparseable or host-less URLs
///   and for input containing control characters
/// - [`UrlValidationError::UnsupportedProtocol`] for schemes other than http(s)
///
/// # Examples
///
/// ```ignore
/// assert_eq!(validate_url("  https://example.com/a ").unwrap(), "https://example.com/a");
/// assert!(validate_url("javascript:alert(1)").is_err());
/// ```
pub fn validate_url(input: &str) -> Result<&str, UrlValidationError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(UrlValidationError::Missing);
    }

    if trimmed.len() > MAX_URL_LENGTH {
        return Err(UrlValidationError::TooLong);
    }

    // The parser drops embedded tabs and newlines, which would leave a
    // stored URL that cannot be sent as a Location header.
    if trimmed.chars().any(char::is_control) {
        return Err(UrlValidationError::InvalidFormat);
    }

    let url = Url::parse(trimmed).map_err(|_| UrlValidationError::InvalidFormat)?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::InvalidFormat);
    }

    Ok(trimmed)
}

/// Returns the `Location` value for a stored URL.
///
/// Non-ASCII hosts and paths are serialized in their ASCII form (punycode
/// and percent-encoding). Input that does not parse is returned unchanged.
pub fn redirect_location(stored: &str) -> String {
    Url::parse(stored)
        .map(String::from)
        .unwrap_or_else(|_| stored.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert_eq!(validate_url("http://example.com"), Ok("http://example.com"));
        assert_eq!(
            validate_url("https://example.com/path?q=1#frag"),
            Ok("https://example.com/path?q=1#frag")
        );
    }

    #[test]
    fn test_trims_whitespace_without_normalizing() {
        assert_eq!(
            validate_url("  HTTPS://Example.COM:443/Path \n"),
            Ok("HTTPS://Example.COM:443/Path")
        );
    }

    #[test]
    fn test_empty_input_is_missing() {
        assert_eq!(validate_url(""), Err(UrlValidationError::Missing));
        assert_eq!(validate_url("   "), Err(UrlValidationError::Missing));
    }

    #[test]
    fn test_relative_url_is_invalid() {
        assert_eq!(
            validate_url("example.com"),
            Err(UrlValidationError::InvalidFormat)
        );
        assert_eq!(
            validate_url("not a valid url"),
            Err(UrlValidationError::InvalidFormat)
        );
    }

    #[test]
    fn test_other_schemes_are_rejected() {
        for input in [
            "ftp://example.com/file.txt",
            "file:///etc/passwd",
            "javascript:alert('xss')",
            "mailto:test@example.com",
            "data:text/plain,Hello",
        ] {
            assert_eq!(
                validate_url(input),
                Err(UrlValidationError::UnsupportedProtocol),
                "{input}"
            );
        }
    }

    #[test]
    fn test_length_limit() {
        let base = "https://example.com/";
        let at_limit = format!("{base}{}", "a".repeat(MAX_URL_LENGTH - base.len()));
        let over_limit = format!("{at_limit}a");

        assert!(validate_url(&at_limit).is_ok());
        assert_eq!(validate_url(&over_limit), Err(UrlValidationError::TooLong));
    }

    #[test]
    fn test_control_characters_are_rejected() {
        for input in [
            "https://example.com/a\nb",
            "https://example.com/a\rb",
            "https://example.com/a\tb",
            "https://exam\u{7f}ple.com",
        ] {
            assert_eq!(
                validate_url(input),
                Err(UrlValidationError::InvalidFormat),
                "{input:?}"
            );
        }
    }

    #[test]
    fn test_redirect_location_is_ascii() {
        assert_eq!(
            redirect_location("https://example.com/café"),
            "https://example.com/caf%C3%A9"
        );
        assert_eq!(
            redirect_location("https://bücher.example/"),
            "https://xn--bcher-kva.example/"
        );
        assert_eq!(
            redirect_location("https://example.com/a?q=1"),
            "https://example.com/a?q=1"
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(UrlValidationError::Missing.to_string(), "URL is required");
        assert_eq!(
            UrlValidationError::InvalidFormat.to_string(),
            "Invalid URL format"
        );
    }
}
