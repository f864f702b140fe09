//! Repository for the `testimonials` table.

use sqlx::types::Json;
use sqlx::PgPool;

use lapcare_core::types::DbId;

use crate::models::testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial};

const COLUMNS: &str = "id, translations, author_name, rating, sort_order, is_active, is_featured, \
                        created_at, updated_at";

/// Provides CRUD operations for customer testimonials.
pub struct TestimonialRepo;

impl TestimonialRepo {
    /// Insert a new testimonial, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTestimonial,
    ) -> Result<Testimonial, sqlx::Error> {
        let query = format!(
            "INSERT INTO testimonials
                (translations, author_name, rating, sort_order, is_active, is_featured)
             VALUES ($1, $2, $3, COALESCE($4, 0), COALESCE($5, TRUE), COALESCE($6, FALSE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(Json(&input.translations))
            .bind(&input.author_name)
            .bind(input.rating)
            .bind(input.sort_order)
            .bind(input.is_active)
            .bind(input.is_featured)
            .fetch_one(pool)
            .await
    }

    /// Find a testimonial by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM testimonials WHERE id = $1");
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List testimonials ordered by `sort_order`, then newest first.
    pub async fn list(
        pool: &PgPool,
        include_inactive: bool,
        featured_only: bool,
    ) -> Result<Vec<Testimonial>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM testimonials
             WHERE ($1 OR is_active = TRUE)
               AND (NOT $2 OR is_featured = TRUE)
             ORDER BY sort_order ASC, created_at DESC"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(include_inactive)
            .bind(featured_only)
            .fetch_all(pool)
            .await
    }

    /// Update a testimonial. Submitted locales are upserted into `translations`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTestimonial,
    ) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!(
            "UPDATE testimonials SET
                translations = CASE
                    WHEN $2::jsonb IS NULL THEN translations
                    ELSE translations || $2::jsonb
                END,
                author_name = COALESCE($3, author_name),
                rating = COALESCE($4, rating),
                sort_order = COALESCE($5, sort_order),
                is_active = COALESCE($6, is_active),
                is_featured = COALESCE($7, is_featured),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .bind(input.translations.as_ref().map(Json))
            .bind(&input.author_name)
            .bind(input.rating)
            .bind(input.sort_order)
            .bind(input.is_active)
            .bind(input.is_featured)
            .fetch_optional(pool)
            .await
    }

    /// Delete a testimonial with every locale at once.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
