//! Repository for the `categories` table.

use sqlx::types::Json;
use sqlx::PgPool;

use lapcare_core::locale::Locale;
use lapcare_core::types::DbId;

use crate::models::category::{Category, CreateCategory, UpdateCategory};

const COLUMNS: &str = "id, translations, sort_order, is_active, created_at, updated_at";

/// Provides CRUD operations for service categories.
///
/// Translations are merged per locale on update: `translations || $patch`
/// replaces only the locales present in the patch, which is how a missing
/// locale gets added to an existing category.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCategory) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (translations, sort_order, is_active)
             VALUES ($1, COALESCE($2, 0), COALESCE($3, TRUE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(Json(&input.translations))
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find a category by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an active category by its per-locale slug.
    pub async fn find_by_slug(
        pool: &PgPool,
        locale: Locale,
        slug: &str,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM categories
             WHERE translations -> $1::text ->> 'slug' = $2 AND is_active = TRUE"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(locale.as_str())
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List categories ordered by `sort_order`, then newest first.
    pub async fn list(pool: &PgPool, include_inactive: bool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM categories
             WHERE ($1 OR is_active = TRUE)
             ORDER BY sort_order ASC, created_at DESC"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(include_inactive)
            .fetch_all(pool)
            .await
    }

    /// Update a category. Submitted locales are upserted into `translations`;
    /// other fields follow the usual COALESCE pattern.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCategory,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "UPDATE categories SET
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
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(input.translations.as_ref().map(Json))
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a category with every locale at once.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
