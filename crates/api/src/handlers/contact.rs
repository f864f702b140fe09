//! Public contact form and the staff contact inbox.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use lapcare_core::error::CoreError;
use lapcare_core::types::DbId;
use lapcare_db::models::contact_message::{ContactMessage, CreateContactMessage};
use lapcare_db::repositories::ContactMessageRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::validate::validate_body;

/// Query parameters for the staff inbox list.
#[derive(Debug, Deserialize)]
pub struct ContactListParams {
    #[serde(default)]
    pub unhandled_only: bool,
    #[serde(flatten)]
    pub page: PaginationParams,
}

/// POST /api/v1/contact
///
/// Public contact form. At least one of phone/email is required so the shop
/// has a way to reply; that cross-field rule lives here because `validator`
/// checks fields in isolation.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateContactMessage>,
) -> AppResult<StatusCode> {
    validate_body(&input)?;
    if input.phone.is_none() && input.email.is_none() {
        return Err(AppError::Core(CoreError::Validation(
            "phone or email: at least one is required".into(),
        )));
    }

    let message = ContactMessageRepo::create(&state.pool, &input).await?;
    tracing::info!(message_id = message.id, "Contact message received");

    if let Some(mailer) = &state.mailer {
        let mailer = mailer.clone();
        let contact = message
            .phone
            .clone()
            .or_else(|| message.email.clone())
            .unwrap_or_default();
        tokio::spawn(async move {
            if let Err(e) = mailer
                .send_contact_alert(&message.name, &contact, &message.message)
                .await
            {
                tracing::warn!(error = %e, "Failed to send contact alert");
            }
        });
    }

    Ok(StatusCode::CREATED)
}

/// GET /api/v1/admin/contact-messages
pub async fn list(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    Query(params): Query<ContactListParams>,
) -> AppResult<Json<DataResponse<Vec<ContactMessage>>>> {
    let messages = ContactMessageRepo::list(
        &state.pool,
        params.unhandled_only,
        params.page.limit(),
        params.page.offset(),
    )
    .await?;
    Ok(Json(DataResponse { data: messages }))
}

/// POST /api/v1/admin/contact-messages/{id}/handled
///
/// Idempotence is deliberate in the negative: marking an already-handled
/// message again is a 404 so two staff members do not silently double-work.
pub async fn mark_handled(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let updated = ContactMessageRepo::mark_handled(&state.pool, id).await?;
    if !updated {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "ContactMessage",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
