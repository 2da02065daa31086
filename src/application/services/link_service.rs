//! Link creation, redirect resolution and statistics service.

use std::sync::Arc;

use crate::domain::code_generator::{CodeGenerator, RandomCodeGenerator, is_reserved};
use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{InsertOutcome, LinkRepository};
use crate::error::AppError;
use serde_json::json;
use tracing::{debug, info, warn};

/// Number of candidate codes tried before shortening fails.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Result of a shorten call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortened {
    pub link: Link,
    /// False when the URL was already stored and the existing record is returned.
    pub created: bool,
}

/// Service for creating and resolving short links.
///
/// Uniqueness of codes and URLs is enforced by the repository; this service
/// only drives the bounded retry loop around code generation.
pub struct LinkService<L: LinkRepository + ?Sized> {
    link_repository: Arc<L>,
    code_generator: Arc<dyn CodeGenerator>,
    max_attempts: usize,
}

impl<L: LinkRepository + ?Sized> LinkService<L> {
    /// Creates a service with the random code generator and default retry budget.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self {
            link_repository,
            code_generator: Arc::new(RandomCodeGenerator),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Replaces the code generator.
    pub fn with_code_generator(mut self, code_generator: Arc<dyn CodeGenerator>) -> Self {
        self.code_generator = code_generator;
        self
    }

    /// Sets how many candidate codes are tried before giving up.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Shortens a URL, returning the existing record if the URL is already stored.
    ///
    /// The caller must have validated `original_url`. The stored value is the
    /// exact string passed in, so idempotence is by string equality.
    ///
    /// # Code Generation
    ///
    /// Each attempt draws a fresh code and hands it to
    /// [`LinkRepository::insert_or_get`]. A taken or reserved code costs one
    /// attempt.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CapacityExhausted`] once all attempts collided.
    /// Returns [`AppError::Persistence`] on database errors.
    pub async fn shorten(&self, original_url: &str) -> Result<Shortened, AppError> {
        if let Some(link) = self
            .link_repository
            .find_by_original_url(original_url)
            .await?
        {
            debug!(code = %link.short_code, "URL already shortened");
            return Ok(Shortened {
                link,
                created: false,
            });
        }

        for attempt in 1..=self.max_attempts {
            let code = self.code_generator.generate();

            if is_reserved(&code) {
                debug!(attempt, code = %code, "Generated reserved code, retrying");
                continue;
            }

            let new_link = NewLink::new(original_url, code);

            match self.link_repository.insert_or_get(new_link).await? {
                InsertOutcome::Created(link) => {
                    info!(code = %link.short_code, id = link.id, "Short link created");
                    return Ok(Shortened {
                        link,
                        created: true,
                    });
                }
                InsertOutcome::Existing(link) => {
                    debug!(code = %link.short_code, "URL stored concurrently, returning existing link");
                    return Ok(Shortened {
                        link,
                        created: false,
                    });
                }
                InsertOutcome::CodeTaken => {
                    debug!(attempt, "Short code collision, retrying");
                }
            }
        }

        warn!(
            attempts = self.max_attempts,
            "Gave up generating a unique short code"
        );

        Err(AppError::capacity_exhausted(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions", "attempts": self.max_attempts }),
        ))
    }

    /// Resolves a short code for a redirect and counts the click.
    ///
    /// The increment is committed before this returns, and concurrent calls
    /// never lose an increment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    /// Returns [`AppError::Persistence`] on database errors.
    pub async fn resolve_and_count(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .increment_clicks(code)
            .await?
            .ok_or_else(|| not_found(code))
    }

    /// Retrieves a link without counting a click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    /// Returns [`AppError::Persistence`] on database errors.
    pub async fn stats(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| not_found(code))
    }

    /// Lists up to `limit` links, most recently created first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors.
    pub async fn recent(&self, limit: u32) -> Result<Vec<Link>, AppError> {
        self.link_repository.recent(limit).await
    }

    /// Counts all stored links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.link_repository.count().await
    }

    /// Checks database connectivity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if the database is unreachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.link_repository.ping().await
    }
}

fn not_found(code: &str) -> AppError {
    AppError::not_found("Short link not found", json!({ "code": code }))
}
