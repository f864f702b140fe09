//! Route definitions for `/admin/orders`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::orders;
use crate::state::AppState;

/// Routes mounted at `/admin/orders`.
///
/// Reads and note appends are open to any authenticated staff member
/// (technicians included); create/update need admin or receptionist;
/// delete is admin-only. Enforced by handler extractors.
///
/// ```text
/// GET    /              -> list (?status=&assigned_to=)
/// POST   /              -> create
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete (admin)
/// POST   /{id}/notes    -> append_note
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::list).post(orders::create))
        .route(
            "/{id}",
            get(orders::get_by_id)
                .put(orders::update)
                .delete(orders::delete),
        )
        .route("/{id}/notes", post(orders::append_note))
}
