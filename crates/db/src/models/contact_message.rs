//! Contact form message model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use lapcare_core::types::{DbId, Timestamp};

/// Contact message row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactMessage {
    pub id: DbId,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub is_handled: bool,
    pub created_at: Timestamp,
}

/// DTO for the public contact form.
///
/// At least one of phone/email must be present; that cross-field rule is
/// checked in the handler since it spans two fields.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateContactMessage {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[validate(length(min = 6, message = "must be at least 6 characters"))]
    pub phone: Option<String>,
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    pub subject: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub message: String,
}
