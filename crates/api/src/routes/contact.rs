//! Route definitions for the staff contact inbox.
//!
//! The public `POST /contact` endpoint lives in [`super::public`]; this
//! module only mounts the admin side.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Routes mounted at `/admin/contact-messages`.
///
/// ```text
/// GET  /                 -> list (?unhandled_only=)
/// POST /{id}/handled     -> mark_handled
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(contact::list))
        .route("/{id}/handled", post(contact::mark_handled))
}
