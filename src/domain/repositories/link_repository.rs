//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Result of an atomic insert attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// A new row was written.
    Created(Link),
    /// A row with the same `original_url` already existed and was returned untouched.
    Existing(Link),
    /// The proposed short code is already in use; nothing was written.
    CodeTaken,
}

/// Repository interface for managing short links.
///
/// Implementations must enforce uniqueness of `short_code` and `original_url`
/// in storage and must increment click counters with a single atomic update.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_sqlite.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a link unless its URL is already stored.
    ///
    /// A conflict on `original_url` returns the stored row as
    /// [`InsertOutcome::Existing`]. A conflict on `short_code` returns
    /// [`InsertOutcome::CodeTaken`] so the caller can retry with a new code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on any other database error.
    async fn insert_or_get(&self, new_link: NewLink) -> Result<InsertOutcome, AppError>;

    /// Finds a link by its exact original URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors.
    async fn find_by_original_url(&self, original_url: &str) -> Result<Option<Link>, AppError>;

    /// Finds a link by its short code without touching the click counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Atomically increments `clicks` and returns the updated row.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` with the incremented counter
    /// - `Ok(None)` if no link has this code
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors.
    async fn increment_clicks(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Lists up to `limit` links, newest first.
    ///
    /// Links sharing a `created_at` value are ordered by descending id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors.
    async fn recent(&self, limit: u32) -> Result<Vec<Link>, AppError>;

    /// Counts all stored links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Checks that the database answers queries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if the database is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}
