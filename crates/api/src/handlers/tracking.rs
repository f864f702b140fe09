//! Public order tracking (`GET /track`).

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use lapcare_core::error::CoreError;
use lapcare_db::models::order::TrackedOrder;
use lapcare_db::repositories::OrderRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the tracking lookup.
#[derive(Debug, Deserialize)]
pub struct TrackParams {
    pub code: String,
    pub phone: String,
}

/// GET /api/v1/track?code=&phone=
///
/// Anonymous lookup gated on knowing both the tracking code and the phone
/// number given at check-in. A wrong code and a wrong phone are deliberately
/// indistinguishable, and the response never includes internal notes or
/// staff assignment.
pub async fn track(
    State(state): State<AppState>,
    Query(params): Query<TrackParams>,
) -> AppResult<Json<DataResponse<TrackedOrder>>> {
    let code = params.code.trim();
    let phone = params.phone.trim();
    if code.is_empty() || phone.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "code and phone are both required".into(),
        )));
    }

    let order = OrderRepo::find_by_tracking_code_and_phone(&state.pool, code, phone)
        .await?
        .ok_or_else(|| {
            AppError::NotFound("No order matches this code and phone number".into())
        })?;

    Ok(Json(DataResponse {
        data: TrackedOrder::from(order),
    }))
}
