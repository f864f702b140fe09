//! Route definitions for FAQ entries.

use axum::routing::get;
use axum::Router;

use crate::handlers::faqs;
use crate::state::AppState;

/// Public routes mounted at `/faqs`.
pub fn public_router() -> Router<AppState> {
    Router::new().route("/", get(faqs::list_public))
}

/// Staff routes mounted at `/admin/faqs`.
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(faqs::list_admin).post(faqs::create))
        .route(
            "/{id}",
            get(faqs::get_admin).put(faqs::update).delete(faqs::delete),
        )
}
