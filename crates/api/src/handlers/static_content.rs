//! Handlers for static content blocks: public reads by key + staff CRUD.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use lapcare_core::error::CoreError;
use lapcare_core::types::DbId;
use lapcare_db::models::static_content::{
    CreateStaticContent, StaticContent, StaticContentView, UpdateStaticContent,
};
use lapcare_db::repositories::StaticContentRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireStaff};
use crate::query::LocaleParams;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::validate::{validate_body, validate_translations};

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "StaticContent",
        id,
    })
}

/// GET /api/v1/content/{key}?locale=
///
/// Public lookup by stable machine key (e.g. `home.hero`).
pub async fn get_by_key(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(params): Query<LocaleParams>,
) -> AppResult<Json<DataResponse<StaticContentView>>> {
    let block = StaticContentRepo::find_active_by_key(&state.pool, &key)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No content block with key '{key}'")))?;
    let view = block
        .localize(params.locale())
        .ok_or_else(|| AppError::NotFound(format!("No content block with key '{key}'")))?;
    Ok(Json(DataResponse { data: view }))
}

/// GET /api/v1/admin/content
pub async fn list_admin(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
) -> AppResult<Json<DataResponse<Vec<StaticContent>>>> {
    let blocks = StaticContentRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: blocks }))
}

/// POST /api/v1/admin/content
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    Json(input): Json<CreateStaticContent>,
) -> AppResult<(StatusCode, Json<DataResponse<StaticContent>>)> {
    validate_body(&input)?;
    validate_translations(&input.translations, true)?;
    let block = StaticContentRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: block })))
}

/// GET /api/v1/admin/content/{id}
pub async fn get_admin(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<StaticContent>>> {
    let block = StaticContentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: block }))
}

/// PUT /api/v1/admin/content/{id}
///
/// The key is immutable; only translations and `is_active` change.
pub async fn update(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStaticContent>,
) -> AppResult<Json<DataResponse<StaticContent>>> {
    if let Some(translations) = &input.translations {
        validate_translations(translations, false)?;
    }
    let block = StaticContentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: block }))
}

/// DELETE /api/v1/admin/content/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = StaticContentRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(not_found(id));
    }
    Ok(StatusCode::NO_CONTENT)
}
