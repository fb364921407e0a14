//! Unified error handling at the HTTP boundary.
//!
//! Every failure is caught at the handler boundary and converted directly
//! to a status code plus a JSON `{"message": ...}` body. The underlying
//! message is surfaced to the caller unchanged; server-side failures are
//! additionally logged.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::pagbank::PagBankError;
use crate::services::email::BackupError;
use crate::services::storage::StorageError;

/// Application-level error type for the catalog backend.
#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog store or service operation failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Object storage upload failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Backup email could not be composed or sent.
    #[error(transparent)]
    Backup(#[from] BackupError),

    /// Payment gateway call failed.
    #[error(transparent)]
    Gateway(#[from] PagBankError),

    /// Bad request from client.
    #[error("{0}")]
    BadRequest(String),
}

/// JSON body returned for both error responses and simple acknowledgements.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Catalog(CatalogError::NotFound | CatalogError::UnknownCategory(_)) => {
                StatusCode::NOT_FOUND
            }
            Self::Catalog(CatalogError::InvalidCategory(_)) | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Catalog(_) | Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Backup(BackupError::FileNotFound(_)) => StatusCode::BAD_REQUEST,
            Self::Backup(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Gateway(PagBankError::NoPaymentLink) => StatusCode::BAD_REQUEST,
            Self::Gateway(_) => StatusCode::BAD_GATEWAY,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, status = %status, "request failed");
        }

        (status, Json(MessageResponse::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_missing_document_maps_to_not_found() {
        assert_eq!(
            get_status(AppError::Catalog(CatalogError::NotFound)),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_unknown_category_maps_to_not_found() {
        assert_eq!(
            get_status(AppError::Catalog(CatalogError::UnknownCategory(
                "Pinguins".to_string()
            ))),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_invalid_category_maps_to_bad_request() {
        assert_eq!(
            get_status(AppError::Catalog(CatalogError::InvalidCategory(
                "Pinguins".to_string()
            ))),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_missing_backup_file_maps_to_bad_request() {
        assert_eq!(
            get_status(AppError::Backup(BackupError::FileNotFound(
                "products.json".to_string()
            ))),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_missing_pay_link_maps_to_bad_request() {
        assert_eq!(
            get_status(AppError::Gateway(PagBankError::NoPaymentLink)),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_gateway_api_failure_maps_to_bad_gateway() {
        assert_eq!(
            get_status(AppError::Gateway(PagBankError::Api {
                status: 500,
                message: "boom".to_string()
            })),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_bad_request_message_is_surfaced() {
        let err = AppError::BadRequest("No file part".to_string());
        assert_eq!(err.to_string(), "No file part");
        assert_eq!(get_status(err), StatusCode::BAD_REQUEST);
    }
}
