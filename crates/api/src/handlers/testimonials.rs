//! Handlers for customer testimonials: public localized reads + staff CRUD.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use lapcare_core::error::CoreError;
use lapcare_core::locale::{Locale, DEFAULT_LOCALE};
use lapcare_core::types::DbId;
use lapcare_db::models::testimonial::{
    CreateTestimonial, Testimonial, TestimonialView, UpdateTestimonial,
};
use lapcare_db::repositories::TestimonialRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireStaff};
use crate::query::IncludeInactiveParams;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::validate::{validate_body, validate_translations};

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Testimonial",
        id,
    })
}

/// Query parameters for the public testimonial list.
#[derive(Debug, Default, Deserialize)]
pub struct TestimonialListParams {
    pub locale: Option<Locale>,
    #[serde(default)]
    pub featured: bool,
}

/// GET /api/v1/testimonials?locale=&featured=
pub async fn list_public(
    State(state): State<AppState>,
    Query(params): Query<TestimonialListParams>,
) -> AppResult<Json<DataResponse<Vec<TestimonialView>>>> {
    let locale = params.locale.unwrap_or(DEFAULT_LOCALE);
    let testimonials = TestimonialRepo::list(&state.pool, false, params.featured).await?;
    let data = testimonials
        .iter()
        .filter_map(|t| t.localize(locale))
        .collect();
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/admin/testimonials
pub async fn list_admin(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    Query(params): Query<IncludeInactiveParams>,
) -> AppResult<Json<DataResponse<Vec<Testimonial>>>> {
    let testimonials =
        TestimonialRepo::list(&state.pool, params.include_inactive, false).await?;
    Ok(Json(DataResponse { data: testimonials }))
}

/// POST /api/v1/admin/testimonials
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    Json(input): Json<CreateTestimonial>,
) -> AppResult<(StatusCode, Json<DataResponse<Testimonial>>)> {
    validate_body(&input)?;
    validate_translations(&input.translations, true)?;
    let testimonial = TestimonialRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse { data: testimonial }),
    ))
}

/// GET /api/v1/admin/testimonials/{id}
pub async fn get_admin(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Testimonial>>> {
    let testimonial = TestimonialRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: testimonial }))
}

/// PUT /api/v1/admin/testimonials/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTestimonial>,
) -> AppResult<Json<DataResponse<Testimonial>>> {
    validate_body(&input)?;
    if let Some(translations) = &input.translations {
        validate_translations(translations, false)?;
    }
    let testimonial = TestimonialRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: testimonial }))
}

/// DELETE /api/v1/admin/testimonials/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TestimonialRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(not_found(id));
    }
    Ok(StatusCode::NO_CONTENT)
}
