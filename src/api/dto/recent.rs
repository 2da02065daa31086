//! DTOs for the recent links listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

use crate::domain::entities::Link;

/// Number of links listed when no limit is given.
pub const DEFAULT_RECENT_LIMIT: u32 = 10;

/// Largest accepted `limit`.
pub const MAX_RECENT_LIMIT: u32 = 100;

/// Query parameters for `GET /api/recent`.
///
/// Uses `serde_with` to parse the limit from the query string as an integer.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
pub struct RecentParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<u32>,
}

impl RecentParams {
    /// Returns the requested limit, or the default.
    pub fn limit(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_RECENT_LIMIT)
    }
}

/// One entry of the recent links listing.
#[derive(Debug, Serialize)]
pub struct RecentLinkItem {
    pub short_url: String,
    pub original_url: String,
    pub short_code: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl RecentLinkItem {
    pub fn from_link(link: Link, short_url: String) -> Self {
        Self {
            short_url,
            original_url: link.original_url,
            short_code: link.short_code,
            clicks: link.clicks,
            created_at: link.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(limit: Option<u32>) -> RecentParams {
        RecentParams { limit }
    }

    #[test]
    fn test_default_limit() {
        assert_eq!(params(None).limit(), DEFAULT_RECENT_LIMIT);
        assert!(params(None).validate().is_ok());
    }

    #[test]
    fn test_limit_bounds() {
        assert!(params(Some(1)).validate().is_ok());
        assert!(params(Some(MAX_RECENT_LIMIT)).validate().is_ok());
        assert!(params(Some(0)).validate().is_err());
        assert!(params(Some(MAX_RECENT_LIMIT + 1)).validate().is_err());
    }

    #[test]
    fn test_limit_parsed_from_string() {
        let p: RecentParams = serde_json::from_str(r#"{"limit": "25"}"#).unwrap();
        assert_eq!(p.limit(), 25);
    }

    #[test]
    fn test_non_numeric_limit_is_error() {
        assert!(serde_json::from_str::<RecentParams>(r#"{"limit": "many"}"#).is_err());
    }
}
