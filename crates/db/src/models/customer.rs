//! Customer entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use lapcare_core::types::{DbId, Timestamp};

/// Customer row from the `customers` table.
///
/// The phone number is the natural key the shop uses to look customers up;
/// it is unique (`uq_customers_phone`), so creating a second customer with
/// the same phone surfaces as a conflict.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Customer {
    pub id: DbId,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub note: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a customer.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCustomer {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[validate(length(min = 6, message = "must be at least 6 characters"))]
    pub phone: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    pub address: Option<String>,
    pub note: Option<String>,
}

/// DTO for updating a customer. All fields are optional.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCustomer {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 6, message = "must be at least 6 characters"))]
    pub phone: Option<String>,
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    pub address: Option<String>,
    pub note: Option<String>,
}
