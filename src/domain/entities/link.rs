//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, SubsecRound, Utc};
use serde::Serialize;

/// A stored association between a short code and its original URL.
///
/// Records are created once by the shorten operation and afterwards only
/// `clicks` changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Link {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub clicks: i64,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        original_url: String,
        short_code: String,
        created_at: DateTime<Utc>,
        clicks: i64,
    ) -> Self {
        Self {
            id,
            original_url,
            short_code,
            created_at,
            clicks,
        }
    }
}

/// Input data for creating a new link.
///
/// `created_at` is stamped by the application and truncated to microseconds,
/// the finest precision PostgreSQL stores, so both backends hold the same value.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
}

impl NewLink {
    pub fn new(original_url: impl Into<String>, short_code: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            short_code: short_code.into(),
            created_at: Utc::now().trunc_subsecs(6),
        }
    }
}
