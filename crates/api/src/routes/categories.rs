//! Route definitions for service categories.

use axum::routing::get;
use axum::Router;

use crate::handlers::categories;
use crate::state::AppState;

/// Public routes mounted at `/categories`.
///
/// ```text
/// GET /              -> list_public (?locale=)
/// GET /{id}          -> get_public
/// GET /slug/{slug}   -> get_by_slug (per-locale)
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/", get(categories::list_public))
        .route("/{id}", get(categories::get_public))
        .route("/slug/{slug}", get(categories::get_by_slug))
}

/// Staff routes mounted at `/admin/categories`.
///
/// ```text
/// GET    /       -> list_admin (?include_inactive=)
/// POST   /       -> create
/// GET    /{id}   -> get_admin
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete (admin)
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(categories::list_admin).post(categories::create))
        .route(
            "/{id}",
            get(categories::get_admin)
                .put(categories::update)
                .delete(categories::delete),
        )
}
