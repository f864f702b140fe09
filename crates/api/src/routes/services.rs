//! Route definitions for repair services.

use axum::routing::get;
use axum::Router;

use crate::handlers::services;
use crate::state::AppState;

/// Public routes mounted at `/services`.
///
/// ```text
/// GET /              -> list_public (?locale=&category_id=&featured=)
/// GET /{id}          -> get_public
/// GET /slug/{slug}   -> get_by_slug (per-locale)
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/", get(services::list_public))
        .route("/{id}", get(services::get_public))
        .route("/slug/{slug}", get(services::get_by_slug))
}

/// Staff routes mounted at `/admin/services`.
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(services::list_admin).post(services::create))
        .route(
            "/{id}",
            get(services::get_admin)
                .put(services::update)
                .delete(services::delete),
        )
}
