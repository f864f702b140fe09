//! Repair order model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use lapcare_core::types::{DbId, Timestamp};

/// Full repair order row from the `repair_orders` table.
///
/// Contains internal notes and staff assignment -- staff-facing only.
/// Use [`TrackedOrder`] for the public tracking endpoint.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RepairOrder {
    pub id: DbId,
    /// `LPS-YYYYMMDD-NNNN`, immutable after creation.
    pub tracking_code: String,
    pub status: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: Option<String>,
    pub device_type: String,
    pub device_brand: Option<String>,
    pub device_model: Option<String>,
    pub serial_number: Option<String>,
    pub issue_description: String,
    /// Costs in whole VND.
    pub estimated_cost: Option<i64>,
    pub final_cost: Option<i64>,
    pub estimated_completion_date: Option<NaiveDate>,
    pub completed_at: Option<Timestamp>,
    pub assigned_to: Option<DbId>,
    pub service_id: Option<DbId>,
    /// Append-only; each entry is prefixed with author and timestamp at
    /// append time.
    pub internal_notes: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Customer-safe view returned by the public tracking endpoint.
///
/// No internal notes, no staff assignment, no row id.
#[derive(Debug, Clone, Serialize)]
pub struct TrackedOrder {
    pub tracking_code: String,
    pub status: String,
    pub customer_name: String,
    pub device_type: String,
    pub device_brand: Option<String>,
    pub device_model: Option<String>,
    pub estimated_cost: Option<i64>,
    pub final_cost: Option<i64>,
    pub estimated_completion_date: Option<NaiveDate>,
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl From<RepairOrder> for TrackedOrder {
    fn from(order: RepairOrder) -> Self {
        TrackedOrder {
            tracking_code: order.tracking_code,
            status: order.status,
            customer_name: order.customer_name,
            device_type: order.device_type,
            device_brand: order.device_brand,
            device_model: order.device_model,
            estimated_cost: order.estimated_cost,
            final_cost: order.final_cost,
            estimated_completion_date: order.estimated_completion_date,
            completed_at: order.completed_at,
            created_at: order.created_at,
        }
    }
}

/// DTO for creating a repair order.
///
/// `tracking_code` is normally `None` and generated from the per-day
/// counter; an explicit code (e.g. re-entering a paper ticket) must be
/// unique or the insert fails with a conflict.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateOrder {
    pub tracking_code: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub customer_name: String,
    #[validate(length(min = 6, message = "must be at least 6 characters"))]
    pub customer_phone: String,
    #[validate(email(message = "must be a valid email address"))]
    pub customer_email: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub device_type: String,
    pub device_brand: Option<String>,
    pub device_model: Option<String>,
    pub serial_number: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub issue_description: String,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub estimated_cost: Option<i64>,
    pub estimated_completion_date: Option<NaiveDate>,
    pub assigned_to: Option<DbId>,
    pub service_id: Option<DbId>,
}

/// DTO for staff updates to an order. The tracking code never changes.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateOrder {
    /// Validated against the status enum in the handler.
    pub status: Option<String>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub estimated_cost: Option<i64>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub final_cost: Option<i64>,
    pub estimated_completion_date: Option<NaiveDate>,
    pub assigned_to: Option<DbId>,
    pub service_id: Option<DbId>,
}

/// Filters for the staff order list.
#[derive(Debug, Default)]
pub struct OrderFilter {
    pub status: Option<String>,
    pub assigned_to: Option<DbId>,
    pub limit: i64,
    pub offset: i64,
}
