//! Route definitions for static content blocks.

use axum::routing::get;
use axum::Router;

use crate::handlers::static_content;
use crate::state::AppState;

/// Public routes mounted at `/content`.
///
/// ```text
/// GET /{key}   -> get_by_key (?locale=)
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route("/{key}", get(static_content::get_by_key))
}

/// Staff routes mounted at `/admin/content`.
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(static_content::list_admin).post(static_content::create),
        )
        .route(
            "/{id}",
            get(static_content::get_admin)
                .put(static_content::update)
                .delete(static_content::delete),
        )
}
