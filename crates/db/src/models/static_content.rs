//! Static content block model and DTOs.
//!
//! Static content blocks hold translatable page fragments (hero copy, about
//! text, opening hours) addressed by a stable machine key.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

use lapcare_core::locale::Locale;
use lapcare_core::translations::TranslationSet;
use lapcare_core::types::{DbId, Timestamp};

/// Localized fields of a static content block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct StaticContentTranslation {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub body: String,
}

/// Static content row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StaticContent {
    pub id: DbId,
    /// Stable machine key, e.g. `home.hero`. Unique (`uq_static_content_key`).
    pub key: String,
    pub translations: Json<TranslationSet<StaticContentTranslation>>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Localized public view of a static content block.
#[derive(Debug, Serialize)]
pub struct StaticContentView {
    pub key: String,
    pub locale: Locale,
    pub title: String,
    pub body: String,
}

impl StaticContent {
    /// Render in the requested locale, falling back to Vietnamese.
    pub fn localize(&self, locale: Locale) -> Option<StaticContentView> {
        let (locale, t) = self.translations.resolve(locale)?;
        Some(StaticContentView {
            key: self.key.clone(),
            locale,
            title: t.title.clone(),
            body: t.body.clone(),
        })
    }
}

/// DTO for creating a static content block.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateStaticContent {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub key: String,
    pub translations: TranslationSet<StaticContentTranslation>,
    pub is_active: Option<bool>,
}

/// DTO for updating a static content block. The key is immutable.
#[derive(Debug, Deserialize)]
pub struct UpdateStaticContent {
    pub translations: Option<TranslationSet<StaticContentTranslation>>,
    pub is_active: Option<bool>,
}
