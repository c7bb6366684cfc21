//! Contact-form inquiry submission.

use axum::extract::State;
use axum::{routing::post, Json, Router};
use serde::Serialize;
use validator::Validate;

use impact_core::inquiry::{Inquiry, INQUIRY_COLLECTION};
use impact_db::DocumentRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Serialize)]
pub struct CreateInquiryResponse {
    pub success: bool,
    /// Id generated by the document store for the new record.
    pub id: String,
}

/// POST /inquiries -- persist a contact-form submission.
///
/// One store call per request, no retry and no deduplication: repeated
/// identical submissions each produce their own stored record.
async fn create_inquiry(
    State(state): State<AppState>,
    Json(inquiry): Json<Inquiry>,
) -> AppResult<Json<CreateInquiryResponse>> {
    inquiry.validate()?;

    let pool = state.pool.as_ref().ok_or(AppError::NotConfigured)?;

    let record = serde_json::to_value(&inquiry)
        .map_err(|e| AppError::Validation(format!("Could not serialize inquiry: {e}")))?;

    let id = DocumentRepo::create_document(pool, INQUIRY_COLLECTION, &record).await?;

    tracing::info!(inquiry_id = %id, "Inquiry stored");

    Ok(Json(CreateInquiryResponse {
        success: true,
        id: id.to_string(),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/inquiries", post(create_inquiry))
}
