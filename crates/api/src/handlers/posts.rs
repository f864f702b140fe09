//! Handlers for blog posts: public localized reads + staff CRUD.
//!
//! Public endpoints only ever see published posts; the admin listing shows
//! drafts too.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use lapcare_core::error::CoreError;
use lapcare_core::locale::{Locale, DEFAULT_LOCALE};
use lapcare_core::types::DbId;
use lapcare_db::models::post::{CreatePost, Post, PostView, UpdatePost};
use lapcare_db::repositories::PostRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireStaff};
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::validate::validate_translations;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Post", id })
}

/// Query parameters for post lists.
#[derive(Debug, Default, Deserialize)]
pub struct PostListParams {
    pub locale: Option<Locale>,
    #[serde(flatten)]
    pub page: PaginationParams,
}

// ---------------------------------------------------------------------------
// Public reads (published posts only)
// ---------------------------------------------------------------------------

/// GET /api/v1/posts?locale=
pub async fn list_public(
    State(state): State<AppState>,
    Query(params): Query<PostListParams>,
) -> AppResult<Json<DataResponse<Vec<PostView>>>> {
    let locale = params.locale.unwrap_or(DEFAULT_LOCALE);
    let posts =
        PostRepo::list_published(&state.pool, params.page.limit(), params.page.offset()).await?;
    let data = posts.iter().filter_map(|p| p.localize(locale)).collect();
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/posts/{id}?locale=
pub async fn get_public(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<PostListParams>,
) -> AppResult<Json<DataResponse<PostView>>> {
    let post = PostRepo::find_by_id(&state.pool, id)
        .await?
        .filter(|p| p.is_published)
        .ok_or_else(|| not_found(id))?;
    let view = post
        .localize(params.locale.unwrap_or(DEFAULT_LOCALE))
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: view }))
}

/// GET /api/v1/posts/slug/{slug}?locale=
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<PostListParams>,
) -> AppResult<Json<DataResponse<PostView>>> {
    let locale = params.locale.unwrap_or(DEFAULT_LOCALE);
    let post = PostRepo::find_published_by_slug(&state.pool, locale, &slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No post with slug '{slug}'")))?;
    let view = post
        .localize(locale)
        .ok_or_else(|| AppError::NotFound(format!("No post with slug '{slug}'")))?;
    Ok(Json(DataResponse { data: view }))
}

// ---------------------------------------------------------------------------
// Staff CRUD (drafts included)
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/posts
pub async fn list_admin(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<Post>>>> {
    let posts = PostRepo::list_all(&state.pool, params.limit(), params.offset()).await?;
    Ok(Json(DataResponse { data: posts }))
}

/// POST /api/v1/admin/posts
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    Json(input): Json<CreatePost>,
) -> AppResult<(StatusCode, Json<DataResponse<Post>>)> {
    validate_translations(&input.translations, true)?;
    let post = PostRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: post })))
}

/// GET /api/v1/admin/posts/{id}
pub async fn get_admin(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Post>>> {
    let post = PostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: post }))
}

/// PUT /api/v1/admin/posts/{id}
///
/// Publishing (`is_published: true`) stamps `published_at` on the first
/// transition unless an explicit timestamp is supplied.
pub async fn update(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePost>,
) -> AppResult<Json<DataResponse<Post>>> {
    if let Some(translations) = &input.translations {
        validate_translations(translations, false)?;
    }
    let post = PostRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: post }))
}

/// DELETE /api/v1/admin/posts/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = PostRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(not_found(id));
    }
    Ok(StatusCode::NO_CONTENT)
}
