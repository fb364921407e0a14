//! Upload relay route handler.

use axum::extract::{Multipart, State};
use tracing::instrument;

use crate::error::AppError;
use crate::state::AppState;

/// Relay a multipart `file` field to object storage.
///
/// Responds with the object's public URL as plain text. Requests without a
/// `file` part, with an empty filename, or with an empty body are rejected
/// before any network call is attempted.
#[instrument(skip(state, multipart))]
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<String, AppError> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or_default().to_string();
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            upload = Some((filename, content_type, data));
            break;
        }
    }

    let Some((filename, content_type, data)) = upload else {
        return Err(AppError::BadRequest("No file part".to_string()));
    };
    if filename.is_empty() || data.is_empty() {
        return Err(AppError::BadRequest("No selected file".to_string()));
    }

    let url = state.storage().upload(data.to_vec(), &content_type).await?;
    Ok(url)
}
