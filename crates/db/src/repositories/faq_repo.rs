//! Repository for the `faqs` table.

use sqlx::types::Json;
use sqlx::PgPool;

use lapcare_core::types::DbId;

use crate::models::faq::{CreateFaq, Faq, UpdateFaq};

const COLUMNS: &str = "id, translations, sort_order, is_active, created_at, updated_at";

/// Provides CRUD operations for FAQ entries.
pub struct FaqRepo;

impl FaqRepo {
    /// Insert a new FAQ entry, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateFaq) -> Result<Faq, sqlx::Error> {
        let query = format!(
            "INSERT INTO faqs (translations, sort_order, is_active)
             VALUES ($1, COALESCE($2, 0), COALESCE($3, TRUE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Faq>(&query)
            .bind(Json(&input.translations))
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find an FAQ entry by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Faq>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM faqs WHERE id = $1");
        sqlx::query_as::<_, Faq>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List FAQ entries ordered by `sort_order`, then newest first.
    pub async fn list(pool: &PgPool, include_inactive: bool) -> Result<Vec<Faq>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM faqs
             WHERE ($1 OR is_active = TRUE)
             ORDER BY sort_order ASC, created_at DESC"
        );
        sqlx::query_as::<_, Faq>(&query)
            .bind(include_inactive)
            .fetch_all(pool)
            .await
    }

    /// Update an FAQ entry. Submitted locales are upserted into `translations`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFaq,
    ) -> Result<Option<Faq>, sqlx::Error> {
        let query = format!(
            "UPDATE faqs SET
                translations = CASE
                    WHEN $2::jsonb IS NULL THEN translations
                    ELSE translations || $2::jsonb
                END,
                sort_order = COALESCE($3, sort_order),
                is_active = COALESCE($4, is_active),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Faq>(&query)
            .bind(id)
            .bind(input.translations.as_ref().map(Json))
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete an FAQ entry with every locale at once.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM faqs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
