//! Route definitions for blog posts.

use axum::routing::get;
use axum::Router;

use crate::handlers::posts;
use crate::state::AppState;

/// Public routes mounted at `/posts` (published posts only).
///
/// ```text
/// GET /              -> list_public (?locale=&limit=&offset=)
/// GET /{id}          -> get_public
/// GET /slug/{slug}   -> get_by_slug (per-locale)
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/", get(posts::list_public))
        .route("/{id}", get(posts::get_public))
        .route("/slug/{slug}", get(posts::get_by_slug))
}

/// Staff routes mounted at `/admin/posts` (drafts included).
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(posts::list_admin).post(posts::create))
        .route(
            "/{id}",
            get(posts::get_admin)
                .put(posts::update)
                .delete(posts::delete),
        )
}
