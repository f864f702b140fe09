//! FAQ entry model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

use lapcare_core::locale::Locale;
use lapcare_core::translations::TranslationSet;
use lapcare_core::types::{DbId, Timestamp};

/// Localized fields of an FAQ entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct FaqTranslation {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub question: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub answer: String,
}

/// FAQ row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Faq {
    pub id: DbId,
    pub translations: Json<TranslationSet<FaqTranslation>>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Localized public view of an FAQ entry.
#[derive(Debug, Serialize)]
pub struct FaqView {
    pub id: DbId,
    pub locale: Locale,
    pub question: String,
    pub answer: String,
    pub sort_order: i32,
}

impl Faq {
    /// Render in the requested locale, falling back to Vietnamese.
    pub fn localize(&self, locale: Locale) -> Option<FaqView> {
        let (locale, t) = self.translations.resolve(locale)?;
        Some(FaqView {
            id: self.id,
            locale,
            question: t.question.clone(),
            answer: t.answer.clone(),
            sort_order: self.sort_order,
        })
    }
}

/// DTO for creating an FAQ entry.
#[derive(Debug, Deserialize)]
pub struct CreateFaq {
    pub translations: TranslationSet<FaqTranslation>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

/// DTO for updating an FAQ entry.
#[derive(Debug, Deserialize)]
pub struct UpdateFaq {
    pub translations: Option<TranslationSet<FaqTranslation>>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}
