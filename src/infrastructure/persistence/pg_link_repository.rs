//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::StoreError;

/// Database row for the `short_links` table.
#[derive(sqlx::FromRow)]
struct ShortLinkRow {
    id: i64,
    code: String,
    original_url: String,
    created_at: DateTime<Utc>,
    click_count: i64,
}

impl From<ShortLinkRow> for ShortLink {
    fn from(row: ShortLinkRow) -> Self {
        ShortLink::new(
            row.id,
            row.code,
            row.original_url,
            row.created_at,
            row.click_count,
        )
    }
}

/// PostgreSQL repository for short link storage and retrieval.
///
/// `created_at` and the initial zero `click_count` are assigned by column
/// defaults, and code uniqueness is enforced by the table's unique
/// constraint, so an insert is a single conditional write.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn insert(&self, new_link: NewShortLink) -> Result<ShortLink, StoreError> {
        let row = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            INSERT INTO short_links (code, original_url)
            VALUES ($1, $2)
            RETURNING id, code, original_url, created_at, click_count
            "#,
        )
        .bind(&new_link.code)
        .bind(&new_link.original_url)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| map_insert_error(e, &new_link.code))?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, StoreError> {
        let row = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            SELECT id, code, original_url, created_at, click_count
            FROM short_links
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ShortLink::from))
    }

    async fn increment_click_count(&self, id: i64, delta: i64) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            UPDATE short_links
            SET click_count = click_count + $2
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(delta)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn health_check(&self) -> bool {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await
            .is_ok()
    }
}

/// Distinguishes a unique-constraint violation from other database errors.
fn map_insert_error(e: sqlx::Error, code: &str) -> StoreError {
    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
    {
        return StoreError::DuplicateCode {
            code: code.to_string(),
        };
    }

    StoreError::Database(e)
}
