//! Blog post model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

use lapcare_core::locale::Locale;
use lapcare_core::translations::TranslationSet;
use lapcare_core::types::{DbId, Timestamp};

/// Localized fields of a blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PostTranslation {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: String,
    pub excerpt: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub body: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub slug: String,
}

/// Blog post row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Post {
    pub id: DbId,
    pub translations: Json<TranslationSet<PostTranslation>>,
    pub is_published: bool,
    pub published_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Localized public view of a blog post.
#[derive(Debug, Serialize)]
pub struct PostView {
    pub id: DbId,
    pub locale: Locale,
    pub title: String,
    pub excerpt: Option<String>,
    pub body: String,
    pub slug: String,
    pub published_at: Option<Timestamp>,
}

impl Post {
    /// Render in the requested locale, falling back to Vietnamese.
    pub fn localize(&self, locale: Locale) -> Option<PostView> {
        let (locale, t) = self.translations.resolve(locale)?;
        Some(PostView {
            id: self.id,
            locale,
            title: t.title.clone(),
            excerpt: t.excerpt.clone(),
            body: t.body.clone(),
            slug: t.slug.clone(),
            published_at: self.published_at,
        })
    }
}

/// DTO for creating a blog post.
#[derive(Debug, Deserialize)]
pub struct CreatePost {
    pub translations: TranslationSet<PostTranslation>,
    pub is_published: Option<bool>,
    pub published_at: Option<Timestamp>,
}

/// DTO for updating a blog post.
#[derive(Debug, Deserialize)]
pub struct UpdatePost {
    pub translations: Option<TranslationSet<PostTranslation>>,
    pub is_published: Option<bool>,
    pub published_at: Option<Timestamp>,
}
