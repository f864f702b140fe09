//! Public booking form (`POST /bookings`).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use lapcare_core::types::DbId;
use lapcare_db::models::order::CreateOrder;

use crate::error::AppResult;
use crate::handlers::orders::create_with_tracking_code;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::validate::validate_body;

/// Request body for the public booking form.
///
/// A trimmed-down [`CreateOrder`]: the public form never sets costs,
/// assignment, dates, or an explicit tracking code. The completion
/// estimate is a staff judgement made at check-in, not a customer input.
#[derive(Debug, Deserialize, Validate)]
pub struct BookingRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub customer_name: String,
    #[validate(length(min = 6, message = "must be at least 6 characters"))]
    pub customer_phone: String,
    #[validate(email(message = "must be a valid email address"))]
    pub customer_email: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub device_type: String,
    pub device_brand: Option<String>,
    pub device_model: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub issue_description: String,
    pub service_id: Option<DbId>,
}

/// Response returned to the customer: just the tracking code and status.
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub tracking_code: String,
    pub status: String,
}

/// POST /api/v1/bookings
///
/// Creates a pending repair order from the public booking form and returns
/// the tracking code. When SMTP is configured and the customer left an
/// email, a confirmation is sent in the background; a failed send never
/// fails the booking.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<BookingRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<BookingResponse>>)> {
    validate_body(&input)?;

    let create = CreateOrder {
        tracking_code: None,
        customer_name: input.customer_name,
        customer_phone: input.customer_phone,
        customer_email: input.customer_email,
        device_type: input.device_type,
        device_brand: input.device_brand,
        device_model: input.device_model,
        serial_number: None,
        issue_description: input.issue_description,
        estimated_cost: None,
        estimated_completion_date: None,
        assigned_to: None,
        service_id: input.service_id,
    };
    let order = create_with_tracking_code(&state.pool, &create).await?;

    tracing::info!(
        order_id = order.id,
        tracking_code = %order.tracking_code,
        "Booking received"
    );

    if let (Some(mailer), Some(email)) = (&state.mailer, &order.customer_email) {
        let mailer = mailer.clone();
        let email = email.clone();
        let name = order.customer_name.clone();
        let code = order.tracking_code.clone();
        tokio::spawn(async move {
            if let Err(e) = mailer.send_booking_confirmation(&email, &name, &code).await {
                tracing::warn!(error = %e, "Failed to send booking confirmation");
            }
        });
    }

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: BookingResponse {
                tracking_code: order.tracking_code,
                status: order.status,
            },
        }),
    ))
}
