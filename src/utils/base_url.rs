//! Building absolute short URLs.

use axum::http::{HeaderMap, header};

/// Host used when a request carries no usable `Host` header.
const FALLBACK_HOST: &str = "localhost";

/// Returns the prefix short codes are appended to, always ending in `/`.
///
/// A configured public base URL wins. Otherwise the prefix is derived from
/// the request's `Host` header (port included), e.g. `http://sho.rt:3000/`.
pub fn base_url(public_base_url: Option<&str>, headers: &HeaderMap) -> String {
    let base = match public_base_url {
        Some(configured) => configured.to_string(),
        None => {
            let host = headers
                .get(header::HOST)
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
                .filter(|h| !h.is_empty())
                .unwrap_or(FALLBACK_HOST);
            format!("http://{}", host)
        }
    };

    if base.ends_with('/') {
        base
    } else {
        format!("{}/", base)
    }
}

/// Joins a base URL produced by [`base_url`] with a short code.
pub fn short_url(base: &str, code: &str) -> String {
    format!("{}{}", base, code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_host(host: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static(host));
        headers
    }

    #[test]
    fn test_configured_base_url_wins() {
        let headers = headers_with_host("ignored.example.com");

        assert_eq!(
            base_url(Some("https://s.example.com"), &headers),
            "https://s.example.com/"
        );
        assert_eq!(
            base_url(Some("https://s.example.com/go/"), &headers),
            "https://s.example.com/go/"
        );
    }

    #[test]
    fn test_base_url_from_host_header_keeps_port() {
        let headers = headers_with_host("localhost:3000");

        assert_eq!(base_url(None, &headers), "http://localhost:3000/");
    }

    #[test]
    fn test_base_url_ipv6_host() {
        let headers = headers_with_host("[::1]:8080");

        assert_eq!(base_url(None, &headers), "http://[::1]:8080/");
    }

    #[test]
    fn test_missing_host_falls_back_to_localhost() {
        assert_eq!(base_url(None, &HeaderMap::new()), "http://localhost/");
    }

    #[test]
    fn test_invalid_utf8_host_falls_back_to_localhost() {
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_bytes(&[0xFF, 0xFE]) {
            headers.insert(header::HOST, value);
            assert_eq!(base_url(None, &headers), "http://localhost/");
        }
    }

    #[test]
    fn test_short_url() {
        assert_eq!(
            short_url("http://localhost:3000/", "abc234"),
            "http://localhost:3000/abc234"
        );
    }
}
