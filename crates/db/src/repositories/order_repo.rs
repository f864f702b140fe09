//! Repository for the `repair_orders` table.

use sqlx::PgPool;

use lapcare_core::types::DbId;

use crate::models::order::{CreateOrder, OrderFilter, RepairOrder, UpdateOrder};

const COLUMNS: &str = "id, tracking_code, status, customer_name, customer_phone, customer_email, \
                        device_type, device_brand, device_model, serial_number, issue_description, \
                        estimated_cost, final_cost, estimated_completion_date, completed_at, \
                        assigned_to, service_id, internal_notes, created_at, updated_at";

/// Provides CRUD operations for repair orders.
///
/// The tracking code is supplied by the caller (generated from the per-day
/// counter or entered explicitly); its unique constraint
/// (`uq_repair_orders_tracking_code`) surfaces duplicates as a conflict.
pub struct OrderRepo;

impl OrderRepo {
    /// Insert a new order with the given tracking code, returning the row.
    pub async fn create(
        pool: &PgPool,
        tracking_code: &str,
        input: &CreateOrder,
    ) -> Result<RepairOrder, sqlx::Error> {
        let query = format!(
            "INSERT INTO repair_orders
                (tracking_code, customer_name, customer_phone, customer_email,
                 device_type, device_brand, device_model, serial_number,
                 issue_description, estimated_cost, estimated_completion_date,
                 assigned_to, service_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RepairOrder>(&query)
            .bind(tracking_code)
            .bind(&input.customer_name)
            .bind(&input.customer_phone)
            .bind(&input.customer_email)
            .bind(&input.device_type)
            .bind(&input.device_brand)
            .bind(&input.device_model)
            .bind(&input.serial_number)
            .bind(&input.issue_description)
            .bind(input.estimated_cost)
            .bind(input.estimated_completion_date)
            .bind(input.assigned_to)
            .bind(input.service_id)
            .fetch_one(pool)
            .await
    }

    /// Find an order by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<RepairOrder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM repair_orders WHERE id = $1");
        sqlx::query_as::<_, RepairOrder>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Public tracking lookup: both the code and the customer's phone number
    /// must match. Anything else is indistinguishable from "no such order".
    pub async fn find_by_tracking_code_and_phone(
        pool: &PgPool,
        tracking_code: &str,
        phone: &str,
    ) -> Result<Option<RepairOrder>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM repair_orders
             WHERE tracking_code = $1 AND customer_phone = $2"
        );
        sqlx::query_as::<_, RepairOrder>(&query)
            .bind(tracking_code)
            .bind(phone)
            .fetch_optional(pool)
            .await
    }

    /// Staff listing with optional status / assignment filters, newest first.
    pub async fn list(
        pool: &PgPool,
        filter: &OrderFilter,
    ) -> Result<Vec<RepairOrder>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM repair_orders
             WHERE ($1::text IS NULL OR status = $1)
               AND ($2::bigint IS NULL OR assigned_to = $2)
             ORDER BY created_at DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, RepairOrder>(&query)
            .bind(&filter.status)
            .bind(filter.assigned_to)
            .bind(filter.limit)
            .bind(filter.offset)
            .fetch_all(pool)
            .await
    }

    /// Staff update. Only non-`None` fields are applied; the tracking code
    /// is never touched. Setting status to `completed` stamps `completed_at`
    /// once, on the first transition.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateOrder,
    ) -> Result<Option<RepairOrder>, sqlx::Error> {
        let query = format!(
            "UPDATE repair_orders SET
                status = COALESCE($2, status),
                estimated_cost = COALESCE($3, estimated_cost),
                final_cost = COALESCE($4, final_cost),
                estimated_completion_date = COALESCE($5, estimated_completion_date),
                assigned_to = COALESCE($6, assigned_to),
                service_id = COALESCE($7, service_id),
                completed_at = CASE
                    WHEN COALESCE($2, status) = 'completed' AND completed_at IS NULL THEN NOW()
                    ELSE completed_at
                END,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RepairOrder>(&query)
            .bind(id)
            .bind(&input.status)
            .bind(input.estimated_cost)
            .bind(input.final_cost)
            .bind(input.estimated_completion_date)
            .bind(input.assigned_to)
            .bind(input.service_id)
            .fetch_optional(pool)
            .await
    }

    /// Append one annotation to the order's internal notes.
    ///
    /// Notes are append-only; there is no edit or remove. Returns `None`
    /// if no row with the given `id` exists.
    pub async fn append_note(
        pool: &PgPool,
        id: DbId,
        note: &str,
    ) -> Result<Option<RepairOrder>, sqlx::Error> {
        let query = format!(
            "UPDATE repair_orders SET
                internal_notes = array_append(internal_notes, $2),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RepairOrder>(&query)
            .bind(id)
            .bind(note)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete an order (admin only). Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM repair_orders WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
