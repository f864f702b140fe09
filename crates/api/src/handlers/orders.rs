//! Handlers for staff repair-order management (`/admin/orders`).
//!
//! Order creation assigns a tracking code: explicit codes are validated
//! against the `LPS-YYYYMMDD-NNNN` shape, generated codes come from the
//! per-day counter table so concurrent check-ins never collide.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use std::str::FromStr;

use lapcare_core::error::CoreError;
use lapcare_core::order_status::OrderStatus;
use lapcare_core::tracking::{format_tracking_code, parse_tracking_code};
use lapcare_core::types::DbId;
use lapcare_db::models::order::{CreateOrder, OrderFilter, RepairOrder, UpdateOrder};
use lapcare_db::repositories::{OrderRepo, TrackingCounterRepo, UserRepo};
use lapcare_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{RequireAdmin, RequireAuth, RequireStaff};
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::validate::validate_body;

/// Query parameters for the staff order list.
#[derive(Debug, Deserialize)]
pub struct OrderListParams {
    pub status: Option<String>,
    pub assigned_to: Option<DbId>,
    #[serde(flatten)]
    pub page: PaginationParams,
}

/// Request body for `POST /admin/orders/{id}/notes`.
#[derive(Debug, Deserialize)]
pub struct AppendNoteRequest {
    pub note: String,
}

/// GET /api/v1/admin/orders
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Query(params): Query<OrderListParams>,
) -> AppResult<Json<DataResponse<Vec<RepairOrder>>>> {
    if let Some(status) = &params.status {
        OrderStatus::from_str(status)?;
    }

    let filter = OrderFilter {
        status: params.status,
        assigned_to: params.assigned_to,
        limit: params.page.limit(),
        offset: params.page.offset(),
    };
    let orders = OrderRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: orders }))
}

/// POST /api/v1/admin/orders
///
/// Check in a device at the counter. Returns the created order including
/// its tracking code.
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    Json(input): Json<CreateOrder>,
) -> AppResult<(StatusCode, Json<DataResponse<RepairOrder>>)> {
    validate_body(&input)?;
    let order = create_with_tracking_code(&state.pool, &input).await?;
    tracing::info!(
        order_id = order.id,
        tracking_code = %order.tracking_code,
        "Repair order created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: order })))
}

/// GET /api/v1/admin/orders/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<RepairOrder>>> {
    let order = OrderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| order_not_found(id))?;
    Ok(Json(DataResponse { data: order }))
}

/// PUT /api/v1/admin/orders/{id}
///
/// Staff update of status, costs, dates, and assignment. The tracking code
/// is immutable; the first transition to `completed` stamps `completed_at`.
pub async fn update(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateOrder>,
) -> AppResult<Json<DataResponse<RepairOrder>>> {
    validate_body(&input)?;
    if let Some(status) = &input.status {
        OrderStatus::from_str(status)?;
    }
    if let Some(assigned_to) = input.assigned_to {
        // Reject assignment to a missing or deactivated account.
        let assignee = UserRepo::find_by_id(&state.pool, assigned_to).await?;
        if !assignee.is_some_and(|u| u.is_active) {
            return Err(AppError::Core(CoreError::Validation(
                "assigned_to: no active staff account with this id".into(),
            )));
        }
    }

    let order = OrderRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| order_not_found(id))?;
    Ok(Json(DataResponse { data: order }))
}

/// POST /api/v1/admin/orders/{id}/notes
///
/// Append one internal note. Any authenticated staff member (including
/// technicians) can annotate an order; notes are append-only and stamped
/// with the author and time.
pub async fn append_note(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
    Json(input): Json<AppendNoteRequest>,
) -> AppResult<Json<DataResponse<RepairOrder>>> {
    let note = input.note.trim();
    if note.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "note: must not be empty".into(),
        )));
    }

    let author = UserRepo::find_by_id(&state.pool, user.user_id)
        .await?
        .map(|u| u.username)
        .unwrap_or_else(|| format!("user#{}", user.user_id));
    let stamped = format!("[{} @ {}] {}", author, Utc::now().format("%Y-%m-%d %H:%M"), note);

    let order = OrderRepo::append_note(&state.pool, id, &stamped)
        .await?
        .ok_or_else(|| order_not_found(id))?;
    Ok(Json(DataResponse { data: order }))
}

/// DELETE /api/v1/admin/orders/{id}
///
/// Hard delete, admin only. Day-to-day workflow uses the `cancelled` status
/// instead; this exists for data-entry mistakes.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = OrderRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(order_not_found(id));
    }
    tracing::info!(order_id = id, "Repair order deleted");
    Ok(StatusCode::NO_CONTENT)
}

fn order_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Order",
        id,
    })
}

/// Insert an order, resolving its tracking code first.
///
/// An explicit code must parse as `LPS-YYYYMMDD-NNNN`; duplicates surface as
/// a 409 via the unique constraint. Without one, the per-day counter yields
/// the next sequence for today (UTC) and the code is formatted from it.
///
/// Shared with the public booking handler.
pub(crate) async fn create_with_tracking_code(
    pool: &DbPool,
    input: &CreateOrder,
) -> Result<RepairOrder, AppError> {
    let code = match &input.tracking_code {
        Some(explicit) => {
            if parse_tracking_code(explicit).is_none() {
                return Err(AppError::Core(CoreError::Validation(
                    "tracking_code: must match LPS-YYYYMMDD-NNNN".into(),
                )));
            }
            explicit.clone()
        }
        None => {
            let today = Utc::now().date_naive();
            let sequence = TrackingCounterRepo::next_sequence(pool, today).await?;
            format_tracking_code(today, sequence)
        }
    };

    Ok(OrderRepo::create(pool, &code, input).await?)
}
