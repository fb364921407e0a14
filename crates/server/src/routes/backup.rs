//! Backup route handler.

use axum::{Json, extract::State};
use tracing::instrument;

use crate::error::{AppError, MessageResponse};
use crate::state::AppState;

/// Mail the catalog document to the configured recipient.
#[instrument(skip(state))]
pub async fn send_backup(State(state): State<AppState>) -> Result<Json<MessageResponse>, AppError> {
    state
        .mailer()
        .send_backup(&state.config().catalog.path)
        .await?;

    Ok(Json(MessageResponse::new("Backup email sent")))
}
