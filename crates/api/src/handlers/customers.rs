//! Handlers for the staff customer registry (`/admin/customers`).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use lapcare_core::error::CoreError;
use lapcare_core::types::DbId;
use lapcare_db::models::customer::{CreateCustomer, Customer, UpdateCustomer};
use lapcare_db::repositories::CustomerRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireStaff};
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::validate::validate_body;

/// Query parameters for the customer list (`?q=` searches name and phone).
#[derive(Debug, Deserialize)]
pub struct CustomerListParams {
    pub q: Option<String>,
    #[serde(flatten)]
    pub page: PaginationParams,
}

/// GET /api/v1/admin/customers
pub async fn list(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    Query(params): Query<CustomerListParams>,
) -> AppResult<Json<DataResponse<Vec<Customer>>>> {
    let customers = CustomerRepo::list(
        &state.pool,
        params.q.as_deref(),
        params.page.limit(),
        params.page.offset(),
    )
    .await?;
    Ok(Json(DataResponse { data: customers }))
}

/// POST /api/v1/admin/customers
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    Json(input): Json<CreateCustomer>,
) -> AppResult<(StatusCode, Json<DataResponse<Customer>>)> {
    validate_body(&input)?;
    let customer = CustomerRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: customer })))
}

/// GET /api/v1/admin/customers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Customer>>> {
    let customer = CustomerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Customer",
                id,
            })
        })?;
    Ok(Json(DataResponse { data: customer }))
}

/// PUT /api/v1/admin/customers/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCustomer>,
) -> AppResult<Json<DataResponse<Customer>>> {
    validate_body(&input)?;
    let customer = CustomerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Customer",
                id,
            })
        })?;
    Ok(Json(DataResponse { data: customer }))
}

/// DELETE /api/v1/admin/customers/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CustomerRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Customer",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
