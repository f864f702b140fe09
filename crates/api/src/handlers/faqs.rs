//! Handlers for FAQ entries: public localized reads + staff CRUD.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use lapcare_core::error::CoreError;
use lapcare_core::types::DbId;
use lapcare_db::models::faq::{CreateFaq, Faq, FaqView, UpdateFaq};
use lapcare_db::repositories::FaqRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireStaff};
use crate::query::{IncludeInactiveParams, LocaleParams};
use crate::response::DataResponse;
use crate::state::AppState;
use crate::validate::validate_translations;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Faq", id })
}

/// GET /api/v1/faqs?locale=
pub async fn list_public(
    State(state): State<AppState>,
    Query(params): Query<LocaleParams>,
) -> AppResult<Json<DataResponse<Vec<FaqView>>>> {
    let locale = params.locale();
    let faqs = FaqRepo::list(&state.pool, false).await?;
    let data = faqs.iter().filter_map(|f| f.localize(locale)).collect();
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/admin/faqs
pub async fn list_admin(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    Query(params): Query<IncludeInactiveParams>,
) -> AppResult<Json<DataResponse<Vec<Faq>>>> {
    let faqs = FaqRepo::list(&state.pool, params.include_inactive).await?;
    Ok(Json(DataResponse { data: faqs }))
}

/// POST /api/v1/admin/faqs
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    Json(input): Json<CreateFaq>,
) -> AppResult<(StatusCode, Json<DataResponse<Faq>>)> {
    validate_translations(&input.translations, true)?;
    let faq = FaqRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: faq })))
}

/// GET /api/v1/admin/faqs/{id}
pub async fn get_admin(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Faq>>> {
    let faq = FaqRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: faq }))
}

/// PUT /api/v1/admin/faqs/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFaq>,
) -> AppResult<Json<DataResponse<Faq>>> {
    if let Some(translations) = &input.translations {
        validate_translations(translations, false)?;
    }
    let faq = FaqRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: faq }))
}

/// DELETE /api/v1/admin/faqs/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = FaqRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(not_found(id));
    }
    Ok(StatusCode::NO_CONTENT)
}
