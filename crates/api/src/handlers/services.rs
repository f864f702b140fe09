//! Handlers for repair services: public localized reads + staff CRUD.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use lapcare_core::error::CoreError;
use lapcare_core::locale::{Locale, DEFAULT_LOCALE};
use lapcare_core::types::DbId;
use lapcare_db::models::service::{CreateService, Service, ServiceView, UpdateService};
use lapcare_db::repositories::{CategoryRepo, ServiceRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireStaff};
use crate::response::DataResponse;
use crate::state::AppState;
use crate::validate::validate_translations;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Service",
        id,
    })
}

/// Query parameters for the public service list.
#[derive(Debug, Default, Deserialize)]
pub struct ServiceListParams {
    pub locale: Option<Locale>,
    pub category_id: Option<DbId>,
    #[serde(default)]
    pub featured: bool,
}

/// Query parameters for the admin service list.
#[derive(Debug, Default, Deserialize)]
pub struct AdminServiceListParams {
    #[serde(default)]
    pub include_inactive: bool,
    pub category_id: Option<DbId>,
}

// ---------------------------------------------------------------------------
// Public reads
// ---------------------------------------------------------------------------

/// GET /api/v1/services?locale=&category_id=&featured=
pub async fn list_public(
    State(state): State<AppState>,
    Query(params): Query<ServiceListParams>,
) -> AppResult<Json<DataResponse<Vec<ServiceView>>>> {
    let locale = params.locale.unwrap_or(DEFAULT_LOCALE);
    let services =
        ServiceRepo::list(&state.pool, false, params.category_id, params.featured).await?;
    let data = services.iter().filter_map(|s| s.localize(locale)).collect();
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/services/{id}?locale=
pub async fn get_public(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<ServiceListParams>,
) -> AppResult<Json<DataResponse<ServiceView>>> {
    let service = ServiceRepo::find_by_id(&state.pool, id)
        .await?
        .filter(|s| s.is_active)
        .ok_or_else(|| not_found(id))?;
    let view = service
        .localize(params.locale.unwrap_or(DEFAULT_LOCALE))
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: view }))
}

/// GET /api/v1/services/slug/{slug}?locale=
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<ServiceListParams>,
) -> AppResult<Json<DataResponse<ServiceView>>> {
    let locale = params.locale.unwrap_or(DEFAULT_LOCALE);
    let service = ServiceRepo::find_by_slug(&state.pool, locale, &slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No service with slug '{slug}'")))?;
    let view = service
        .localize(locale)
        .ok_or_else(|| AppError::NotFound(format!("No service with slug '{slug}'")))?;
    Ok(Json(DataResponse { data: view }))
}

// ---------------------------------------------------------------------------
// Staff CRUD
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/services
pub async fn list_admin(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    Query(params): Query<AdminServiceListParams>,
) -> AppResult<Json<DataResponse<Vec<Service>>>> {
    let services = ServiceRepo::list(
        &state.pool,
        params.include_inactive,
        params.category_id,
        false,
    )
    .await?;
    Ok(Json(DataResponse { data: services }))
}

/// POST /api/v1/admin/services
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    Json(input): Json<CreateService>,
) -> AppResult<(StatusCode, Json<DataResponse<Service>>)> {
    validate_translations(&input.translations, true)?;
    validate_price(input.price)?;
    ensure_category_exists(&state, input.category_id).await?;
    let service = ServiceRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: service })))
}

/// GET /api/v1/admin/services/{id}
pub async fn get_admin(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Service>>> {
    let service = ServiceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: service }))
}

/// PUT /api/v1/admin/services/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateService>,
) -> AppResult<Json<DataResponse<Service>>> {
    if let Some(translations) = &input.translations {
        validate_translations(translations, false)?;
    }
    validate_price(input.price)?;
    ensure_category_exists(&state, input.category_id).await?;
    let service = ServiceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: service }))
}

/// DELETE /api/v1/admin/services/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ServiceRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(not_found(id));
    }
    Ok(StatusCode::NO_CONTENT)
}

fn validate_price(price: Option<i64>) -> Result<(), AppError> {
    if price.is_some_and(|p| p < 0) {
        return Err(AppError::Core(CoreError::Validation(
            "price: must not be negative".into(),
        )));
    }
    Ok(())
}

async fn ensure_category_exists(
    state: &AppState,
    category_id: Option<DbId>,
) -> Result<(), AppError> {
    if let Some(category_id) = category_id {
        if CategoryRepo::find_by_id(&state.pool, category_id)
            .await?
            .is_none()
        {
            return Err(AppError::Core(CoreError::Validation(
                "category_id: no category with this id".into(),
            )));
        }
    }
    Ok(())
}
