//! Route definitions for customer testimonials.

use axum::routing::get;
use axum::Router;

use crate::handlers::testimonials;
use crate::state::AppState;

/// Public routes mounted at `/testimonials`.
pub fn public_router() -> Router<AppState> {
    Router::new().route("/", get(testimonials::list_public))
}

/// Staff routes mounted at `/admin/testimonials`.
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(testimonials::list_admin).post(testimonials::create))
        .route(
            "/{id}",
            get(testimonials::get_admin)
                .put(testimonials::update)
                .delete(testimonials::delete),
        )
}
