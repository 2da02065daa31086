//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Link;

/// Request to shorten a URL.
///
/// `url` is optional at the serde level so that a missing field yields the
/// same `URL is required` error as an empty one.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    #[serde(default)]
    pub url: Option<String>,
}

/// Shortened link as returned by `POST /api/shorten`.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
    pub original_url: String,
    pub short_code: String,
    pub clicks: i64,
}

impl ShortenResponse {
    pub fn from_link(link: Link, short_url: String) -> Self {
        Self {
            short_url,
            original_url: link.original_url,
            short_code: link.short_code,
            clicks: link.clicks,
        }
    }
}
