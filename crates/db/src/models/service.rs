//! Repair service model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

use lapcare_core::locale::Locale;
use lapcare_core::translations::TranslationSet;
use lapcare_core::types::{DbId, Timestamp};

/// Localized fields of a service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ServiceTranslation {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub description: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub slug: String,
}

/// Service row: one row per service, all locales inline.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Service {
    pub id: DbId,
    pub translations: Json<TranslationSet<ServiceTranslation>>,
    pub category_id: Option<DbId>,
    /// Listed price in whole VND; `None` means "contact for quote".
    pub price: Option<i64>,
    pub sort_order: i32,
    pub is_active: bool,
    pub is_featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Localized public view of a service.
#[derive(Debug, Serialize)]
pub struct ServiceView {
    pub id: DbId,
    pub locale: Locale,
    pub name: String,
    pub description: String,
    pub slug: String,
    pub category_id: Option<DbId>,
    pub price: Option<i64>,
    pub is_featured: bool,
}

impl Service {
    /// Render in the requested locale, falling back to Vietnamese.
    pub fn localize(&self, locale: Locale) -> Option<ServiceView> {
        let (locale, t) = self.translations.resolve(locale)?;
        Some(ServiceView {
            id: self.id,
            locale,
            name: t.name.clone(),
            description: t.description.clone(),
            slug: t.slug.clone(),
            category_id: self.category_id,
            price: self.price,
            is_featured: self.is_featured,
        })
    }
}

/// DTO for creating a service. At least one locale is required.
#[derive(Debug, Deserialize)]
pub struct CreateService {
    pub translations: TranslationSet<ServiceTranslation>,
    pub category_id: Option<DbId>,
    pub price: Option<i64>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
    pub is_featured: Option<bool>,
}

/// DTO for updating a service. Submitted locales are upserted; shared fields
/// apply to the whole entity, never to a single locale.
#[derive(Debug, Deserialize)]
pub struct UpdateService {
    pub translations: Option<TranslationSet<ServiceTranslation>>,
    pub category_id: Option<DbId>,
    pub price: Option<i64>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
    pub is_featured: Option<bool>,
}
