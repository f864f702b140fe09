//! Customer testimonial model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

use lapcare_core::locale::Locale;
use lapcare_core::translations::TranslationSet;
use lapcare_core::types::{DbId, Timestamp};

/// Localized fields of a testimonial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct TestimonialTranslation {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub content: String,
}

/// Testimonial row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Testimonial {
    pub id: DbId,
    pub translations: Json<TranslationSet<TestimonialTranslation>>,
    /// The customer's name is shown verbatim in both languages.
    pub author_name: String,
    /// Star rating 1-5.
    pub rating: Option<i16>,
    pub sort_order: i32,
    pub is_active: bool,
    pub is_featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Localized public view of a testimonial.
#[derive(Debug, Serialize)]
pub struct TestimonialView {
    pub id: DbId,
    pub locale: Locale,
    pub content: String,
    pub author_name: String,
    pub rating: Option<i16>,
    pub is_featured: bool,
}

impl Testimonial {
    /// Render in the requested locale, falling back to Vietnamese.
    pub fn localize(&self, locale: Locale) -> Option<TestimonialView> {
        let (locale, t) = self.translations.resolve(locale)?;
        Some(TestimonialView {
            id: self.id,
            locale,
            content: t.content.clone(),
            author_name: self.author_name.clone(),
            rating: self.rating,
            is_featured: self.is_featured,
        })
    }
}

/// DTO for creating a testimonial.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTestimonial {
    pub translations: TranslationSet<TestimonialTranslation>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub author_name: String,
    #[validate(range(min = 1, max = 5, message = "must be between 1 and 5"))]
    pub rating: Option<i16>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
    pub is_featured: Option<bool>,
}

/// DTO for updating a testimonial.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTestimonial {
    pub translations: Option<TranslationSet<TestimonialTranslation>>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub author_name: Option<String>,
    #[validate(range(min = 1, max = 5, message = "must be between 1 and 5"))]
    pub rating: Option<i16>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
    pub is_featured: Option<bool>,
}
