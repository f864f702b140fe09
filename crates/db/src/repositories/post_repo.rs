//! Repository for the `posts` table.

use sqlx::types::Json;
use sqlx::PgPool;

use lapcare_core::locale::Locale;
use lapcare_core::types::DbId;

use crate::models::post::{CreatePost, Post, UpdatePost};

const COLUMNS: &str = "id, translations, is_published, published_at, created_at, updated_at";

/// Provides CRUD operations for blog posts.
pub struct PostRepo;

impl PostRepo {
    /// Insert a new post, returning the created row.
    ///
    /// Publishing at create time without an explicit `published_at` stamps
    /// the current time.
    pub async fn create(pool: &PgPool, input: &CreatePost) -> Result<Post, sqlx::Error> {
        let query = format!(
            "INSERT INTO posts (translations, is_published, published_at)
             VALUES ($1, COALESCE($2, FALSE),
                     CASE WHEN COALESCE($2, FALSE) THEN COALESCE($3, NOW()) ELSE $3 END)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(Json(&input.translations))
            .bind(input.is_published)
            .bind(input.published_at)
            .fetch_one(pool)
            .await
    }

    /// Find a post by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts WHERE id = $1");
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a published post by its per-locale slug.
    pub async fn find_published_by_slug(
        pool: &PgPool,
        locale: Locale,
        slug: &str,
    ) -> Result<Option<Post>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM posts
             WHERE translations -> $1::text ->> 'slug' = $2 AND is_published = TRUE"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(locale.as_str())
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List published posts, most recently published first.
    pub async fn list_published(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Post>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM posts
             WHERE is_published = TRUE
             ORDER BY published_at DESC NULLS LAST, created_at DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Admin listing of all posts, newest first.
    pub async fn list_all(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Post>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM posts
             ORDER BY created_at DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a post. Submitted locales are upserted into `translations`.
    /// Publishing for the first time without an explicit `published_at`
    /// stamps the current time.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePost,
    ) -> Result<Option<Post>, sqlx::Error> {
        let query = format!(
            "UPDATE posts SET
                translations = CASE
                    WHEN $2::jsonb IS NULL THEN translations
                    ELSE translations || $2::jsonb
                END,
                is_published = COALESCE($3, is_published),
                published_at = CASE
                    WHEN $4::timestamptz IS NOT NULL THEN $4
                    WHEN COALESCE($3, is_published) AND published_at IS NULL THEN NOW()
                    ELSE published_at
                END,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .bind(input.translations.as_ref().map(Json))
            .bind(input.is_published)
            .bind(input.published_at)
            .fetch_optional(pool)
            .await
    }

    /// Delete a post with every locale at once.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
