//! Service category model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

use lapcare_core::locale::Locale;
use lapcare_core::translations::TranslationSet;
use lapcare_core::types::{DbId, Timestamp};

/// Localized fields of a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CategoryTranslation {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    pub description: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub slug: String,
}

/// Category row: one row per category, all locales inline.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub translations: Json<TranslationSet<CategoryTranslation>>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Localized public view of a category.
#[derive(Debug, Serialize)]
pub struct CategoryView {
    pub id: DbId,
    /// The locale that actually rendered (may be `vi` after fallback).
    pub locale: Locale,
    pub name: String,
    pub description: Option<String>,
    pub slug: String,
    pub sort_order: i32,
}

impl Category {
    /// Render in the requested locale, falling back to Vietnamese.
    /// `None` only when the translation set is empty.
    pub fn localize(&self, locale: Locale) -> Option<CategoryView> {
        let (locale, t) = self.translations.resolve(locale)?;
        Some(CategoryView {
            id: self.id,
            locale,
            name: t.name.clone(),
            description: t.description.clone(),
            slug: t.slug.clone(),
            sort_order: self.sort_order,
        })
    }
}

/// DTO for creating a category. At least one locale is required.
#[derive(Debug, Deserialize)]
pub struct CreateCategory {
    pub translations: TranslationSet<CategoryTranslation>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

/// DTO for updating a category. Submitted locales are upserted; locales
/// absent from `translations` are left untouched.
#[derive(Debug, Deserialize)]
pub struct UpdateCategory {
    pub translations: Option<TranslationSet<CategoryTranslation>>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}
