//! Contact form endpoint.

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use folio_client::net::types::ContactResponse;

use crate::services::contact::{self, ContactError, ContactPayload};
use crate::state::AppState;

/// `POST /api/contact`: deliver a visitor message to the site owner.
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(body): Json<ContactPayload>,
) -> Result<Json<ContactResponse>, StatusCode> {
    match contact::submit(&state, &body).await {
        Ok(id) => Ok(Json(ContactResponse { ok: true, id: Some(id.to_string()) })),
        Err(e) => {
            tracing::error!(error = %e, mailer = state.mailer.name(), "contact delivery failed");
            Err(contact_error_to_status(e))
        }
    }
}

pub(crate) fn contact_error_to_status(err: ContactError) -> StatusCode {
    match err {
        ContactError::Delivery(_) => StatusCode::BAD_GATEWAY,
    }
}
