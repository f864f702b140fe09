//! Handlers for service categories: public localized reads + staff CRUD.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use lapcare_core::error::CoreError;
use lapcare_core::types::DbId;
use lapcare_db::models::category::{Category, CategoryView, CreateCategory, UpdateCategory};
use lapcare_db::repositories::CategoryRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireStaff};
use crate::query::{IncludeInactiveParams, LocaleParams};
use crate::response::DataResponse;
use crate::state::AppState;
use crate::validate::{validate_body, validate_translations};

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Category",
        id,
    })
}

// ---------------------------------------------------------------------------
// Public reads
// ---------------------------------------------------------------------------

/// GET /api/v1/categories?locale=
///
/// Active categories rendered in the requested locale (Vietnamese fallback).
/// Entities with no translation at all are skipped rather than erroring.
pub async fn list_public(
    State(state): State<AppState>,
    Query(params): Query<LocaleParams>,
) -> AppResult<Json<DataResponse<Vec<CategoryView>>>> {
    let locale = params.locale();
    let categories = CategoryRepo::list(&state.pool, false).await?;
    let data = categories.iter().filter_map(|c| c.localize(locale)).collect();
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/categories/{id}?locale=
pub async fn get_public(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<LocaleParams>,
) -> AppResult<Json<DataResponse<CategoryView>>> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .filter(|c| c.is_active)
        .ok_or_else(|| not_found(id))?;
    let view = category.localize(params.locale()).ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: view }))
}

/// GET /api/v1/categories/slug/{slug}?locale=
///
/// Slug lookup is per-locale: the slug must exist in the requested locale.
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<LocaleParams>,
) -> AppResult<Json<DataResponse<CategoryView>>> {
    let locale = params.locale();
    let category = CategoryRepo::find_by_slug(&state.pool, locale, &slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No category with slug '{slug}'")))?;
    let view = category
        .localize(locale)
        .ok_or_else(|| AppError::NotFound(format!("No category with slug '{slug}'")))?;
    Ok(Json(DataResponse { data: view }))
}

// ---------------------------------------------------------------------------
// Staff CRUD (full rows, all locales)
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/categories
pub async fn list_admin(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    Query(params): Query<IncludeInactiveParams>,
) -> AppResult<Json<DataResponse<Vec<Category>>>> {
    let categories = CategoryRepo::list(&state.pool, params.include_inactive).await?;
    Ok(Json(DataResponse { data: categories }))
}

/// POST /api/v1/admin/categories
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    Json(input): Json<CreateCategory>,
) -> AppResult<(StatusCode, Json<DataResponse<Category>>)> {
    validate_translations(&input.translations, true)?;
    let category = CategoryRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}

/// GET /api/v1/admin/categories/{id}
pub async fn get_admin(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Category>>> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: category }))
}

/// PUT /api/v1/admin/categories/{id}
///
/// Submitted locales are upserted; absent locales stay untouched. Adding
/// the missing English translation to a Vietnamese-only category is just an
/// update with `translations.en` set.
pub async fn update(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCategory>,
) -> AppResult<Json<DataResponse<Category>>> {
    if let Some(translations) = &input.translations {
        validate_translations(translations, false)?;
    }
    let category = CategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: category }))
}

/// DELETE /api/v1/admin/categories/{id}
///
/// Removes the category with every locale at once.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CategoryRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(not_found(id));
    }
    Ok(StatusCode::NO_CONTENT)
}
