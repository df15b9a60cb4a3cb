//! Inquiry route handlers.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::instrument;

use riverstone_core::inquiry::NewInquiry;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Submit an export or contact inquiry.
///
/// POST /api/inquiries
#[instrument(skip(state, new_inquiry), fields(email = %new_inquiry.email))]
pub async fn create(
    State(state): State<AppState>,
    Json(new_inquiry): Json<NewInquiry>,
) -> Result<impl IntoResponse> {
    new_inquiry.validate().map_err(AppError::Validation)?;

    let inquiry = state.inquiries().create(new_inquiry);
    tracing::info!(inquiry_id = %inquiry.id, "Inquiry recorded");

    Ok((StatusCode::CREATED, Json(inquiry)))
}
