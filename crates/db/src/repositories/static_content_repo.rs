//! Repository for the `static_content` table.

use sqlx::types::Json;
use sqlx::PgPool;

use lapcare_core::types::DbId;

use crate::models::static_content::{CreateStaticContent, StaticContent, UpdateStaticContent};

const COLUMNS: &str = "id, key, translations, is_active, created_at, updated_at";

/// Provides CRUD operations for static content blocks.
pub struct StaticContentRepo;

impl StaticContentRepo {
    /// Insert a new content block, returning the created row.
    ///
    /// The key is unique (`uq_static_content_key`); a duplicate surfaces as
    /// a conflict.
    pub async fn create(
        pool: &PgPool,
        input: &CreateStaticContent,
    ) -> Result<StaticContent, sqlx::Error> {
        let query = format!(
            "INSERT INTO static_content (key, translations, is_active)
             VALUES ($1, $2, COALESCE($3, TRUE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StaticContent>(&query)
            .bind(&input.key)
            .bind(Json(&input.translations))
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find a content block by internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<StaticContent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM static_content WHERE id = $1");
        sqlx::query_as::<_, StaticContent>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an active content block by its machine key (public read path).
    pub async fn find_active_by_key(
        pool: &PgPool,
        key: &str,
    ) -> Result<Option<StaticContent>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM static_content WHERE key = $1 AND is_active = TRUE");
        sqlx::query_as::<_, StaticContent>(&query)
            .bind(key)
            .fetch_optional(pool)
            .await
    }

    /// Admin listing, keyed order for stable display.
    pub async fn list(pool: &PgPool) -> Result<Vec<StaticContent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM static_content ORDER BY key ASC");
        sqlx::query_as::<_, StaticContent>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a content block. Submitted locales are upserted; the key is
    /// immutable.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStaticContent,
    ) -> Result<Option<StaticContent>, sqlx::Error> {
        let query = format!(
            "UPDATE static_content SET
                translations = CASE
                    WHEN $2::jsonb IS NULL THEN translations
                    ELSE translations || $2::jsonb
                END,
                is_active = COALESCE($3, is_active),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StaticContent>(&query)
            .bind(id)
            .bind(input.translations.as_ref().map(Json))
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a content block with every locale at once.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM static_content WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
