//! PostgreSQL implementation of the URL mapping repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{MappingKey, NewUrlMapping, UrlMapping};
use crate::domain::repositories::UrlMappingRepository;
use crate::error::AppError;

/// PostgreSQL repository backed by the `url_mappings` table.
///
/// The `url_mappings_short_name_key` unique constraint is what finally
/// guarantees short name uniqueness.
pub struct PgUrlMappingRepository {
    pool: Arc<PgPool>,
}

impl PgUrlMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlMappingRepository for PgUrlMappingRepository {
    async fn create(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError> {
        let mapping = sqlx::query_as::<_, UrlMapping>(
            r#"
            INSERT INTO url_mappings (short_name, short_url, long_url)
            VALUES ($1, $2, $3)
            RETURNING id, short_name, short_url, long_url, created_at
            "#,
        )
        .bind(&new_mapping.short_name)
        .bind(&new_mapping.short_url)
        .bind(&new_mapping.long_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }

    async fn find_by_short_name(&self, short_name: &str) -> Result<Option<UrlMapping>, AppError> {
        let mapping = sqlx::query_as::<_, UrlMapping>(
            r#"
            SELECT id, short_name, short_url, long_url, created_at
            FROM url_mappings
            WHERE short_name = $1
            "#,
        )
        .bind(short_name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<UrlMapping>, AppError> {
        let mapping = sqlx::query_as::<_, UrlMapping>(
            r#"
            SELECT id, short_name, short_url, long_url, created_at
            FROM url_mappings
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }

    async fn update_long_url(&self, short_name: &str, long_url: &str) -> Result<u64, AppError> {
        // Unchanged rows are excluded so the count means "modified", not "matched".
        let result = sqlx::query(
            r#"
            UPDATE url_mappings
            SET long_url = $2
            WHERE short_name = $1 AND long_url IS DISTINCT FROM $2
            "#,
        )
        .bind(short_name)
        .bind(long_url)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, key: &MappingKey) -> Result<u64, AppError> {
        let result = match key {
            MappingKey::Id(id) => {
                sqlx::query("DELETE FROM url_mappings WHERE id = $1")
                    .bind(id)
                    .execute(self.pool.as_ref())
                    .await?
            }
            MappingKey::ShortName(name) => {
                sqlx::query("DELETE FROM url_mappings WHERE short_name = $1")
                    .bind(name)
                    .execute(self.pool.as_ref())
                    .await?
            }
        };

        Ok(result.rows_affected())
    }

    async fn list_all(&self) -> Result<Vec<UrlMapping>, AppError> {
        let mappings = sqlx::query_as::<_, UrlMapping>(
            r#"
            SELECT id, short_name, short_url, long_url, created_at
            FROM url_mappings
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(mappings)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;
        Ok(())
    }
}
