//! Public top-level endpoints: tracking, booking, and contact.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{booking, contact, tracking};
use crate::state::AppState;

/// Routes merged at the `/api/v1` root.
///
/// ```text
/// GET  /track      -> tracking::track (code + phone)
/// POST /bookings   -> booking::create
/// POST /contact    -> contact::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/track", get(tracking::track))
        .route("/bookings", post(booking::create))
        .route("/contact", post(contact::create))
}
