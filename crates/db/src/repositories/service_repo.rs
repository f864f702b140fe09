//! Repository for the `services` table.

use sqlx::types::Json;
use sqlx::PgPool;

use lapcare_core::locale::Locale;
use lapcare_core::types::DbId;

use crate::models::service::{CreateService, Service, UpdateService};

const COLUMNS: &str = "id, translations, category_id, price, sort_order, is_active, is_featured, \
                        created_at, updated_at";

/// Provides CRUD operations for repair services.
pub struct ServiceRepo;

impl ServiceRepo {
    /// Insert a new service, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateService) -> Result<Service, sqlx::Error> {
        let query = format!(
            "INSERT INTO services
                (translations, category_id, price, sort_order, is_active, is_featured)
             VALUES ($1, $2, $3, COALESCE($4, 0), COALESCE($5, TRUE), COALESCE($6, FALSE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(Json(&input.translations))
            .bind(input.category_id)
            .bind(input.price)
            .bind(input.sort_order)
            .bind(input.is_active)
            .bind(input.is_featured)
            .fetch_one(pool)
            .await
    }

    /// Find a service by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Service>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM services WHERE id = $1");
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an active service by its per-locale slug.
    pub async fn find_by_slug(
        pool: &PgPool,
        locale: Locale,
        slug: &str,
    ) -> Result<Option<Service>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM services
             WHERE translations -> $1::text ->> 'slug' = $2 AND is_active = TRUE"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(locale.as_str())
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List services ordered by `sort_order`, then newest first, with an
    /// optional category filter.
    pub async fn list(
        pool: &PgPool,
        include_inactive: bool,
        category_id: Option<DbId>,
        featured_only: bool,
    ) -> Result<Vec<Service>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM services
             WHERE ($1 OR is_active = TRUE)
               AND ($2::bigint IS NULL OR category_id = $2)
               AND (NOT $3 OR is_featured = TRUE)
             ORDER BY sort_order ASC, created_at DESC"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(include_inactive)
            .bind(category_id)
            .bind(featured_only)
            .fetch_all(pool)
            .await
    }

    /// Update a service. Submitted locales are upserted into `translations`;
    /// shared fields apply to the entity as a whole.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateService,
    ) -> Result<Option<Service>, sqlx::Error> {
        let query = format!(
            "UPDATE services SET
                translations = CASE
                    WHEN $2::jsonb IS NULL THEN translations
                    ELSE translations || $2::jsonb
                END,
                category_id = COALESCE($3, category_id),
                price = COALESCE($4, price),
                sort_order = COALESCE($5, sort_order),
                is_active = COALESCE($6, is_active),
                is_featured = COALESCE($7, is_featured),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .bind(input.translations.as_ref().map(Json))
            .bind(input.category_id)
            .bind(input.price)
            .bind(input.sort_order)
            .bind(input.is_active)
            .bind(input.is_featured)
            .fetch_optional(pool)
            .await
    }

    /// Delete a service with every locale at once.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
