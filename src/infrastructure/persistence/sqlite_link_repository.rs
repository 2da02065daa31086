//! SQLite implementation of link repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{InsertOutcome, LinkRepository};
use crate::error::AppError;
use crate::infrastructure::persistence::is_unique_violation;

/// Embedded SQLite schema migrations.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations/sqlite");

/// Column named by SQLite in unique violation messages for `short_code`.
const SHORT_CODE_CONSTRAINT: &str = "links.short_code";

/// SQLite repository for link storage and retrieval.
///
/// Same statements as the PostgreSQL backend. SQLite serializes writers, and
/// the pool's busy timeout makes concurrent writers wait instead of failing.
pub struct SqliteLinkRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    /// Applies pending schema migrations.
    ///
    /// # Errors
    ///
    /// Returns an error if a migration fails to apply.
    pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
        MIGRATOR.run(pool).await
    }
}

#[async_trait]
impl LinkRepository for SqliteLinkRepository {
    async fn insert_or_get(&self, new_link: NewLink) -> Result<InsertOutcome, AppError> {
        let inserted = sqlx::query_as::<_, Link>(
            r#"
            INSERT INTO links (original_url, short_code, created_at, clicks)
            VALUES (?, ?, ?, 0)
            ON CONFLICT (original_url) DO NOTHING
            RETURNING id, original_url, short_code, created_at, clicks
            "#,
        )
        .bind(&new_link.original_url)
        .bind(&new_link.short_code)
        .bind(new_link.created_at)
        .fetch_optional(self.pool.as_ref())
        .await;

        match inserted {
            Ok(Some(link)) => Ok(InsertOutcome::Created(link)),
            Ok(None) => self
                .find_by_original_url(&new_link.original_url)
                .await?
                .map(InsertOutcome::Existing)
                .ok_or_else(|| {
                    AppError::persistence(
                        "Conflicting link disappeared",
                        serde_json::json!({ "original_url": new_link.original_url }),
                    )
                }),
            Err(e) if is_unique_violation(&e, SHORT_CODE_CONSTRAINT) => {
                Ok(InsertOutcome::CodeTaken)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_original_url(&self, original_url: &str) -> Result<Option<Link>, AppError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            SELECT id, original_url, short_code, created_at, clicks
            FROM links
            WHERE original_url = ?
            "#,
        )
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            SELECT id, original_url, short_code, created_at, clicks
            FROM links
            WHERE short_code = ?
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn increment_clicks(&self, code: &str) -> Result<Option<Link>, AppError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            UPDATE links
            SET clicks = clicks + 1
            WHERE short_code = ?
            RETURNING id, original_url, short_code, created_at, clicks
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn recent(&self, limit: u32) -> Result<Vec<Link>, AppError> {
        let links = sqlx::query_as::<_, Link>(
            r#"
            SELECT id, original_url, short_code, created_at, clicks
            FROM links
            ORDER BY created_at DESC, id DESC
            LIMIT ?
            "#,
        )
        .bind(i64::from(limit))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(links)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
