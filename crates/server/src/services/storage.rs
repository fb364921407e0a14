//! Object storage client for upload relaying.
//!
//! Relays uploaded blobs to a Google Cloud Storage bucket through the JSON
//! API and returns the object's public URL. Objects are keyed by a fresh
//! UUID, and public visibility is granted only after the upload itself has
//! succeeded, so a failed upload never leaves a public half-object.

use reqwest::header::CONTENT_TYPE;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use tracing::instrument;
use uuid::Uuid;

use crate::config::StorageConfig;

/// Media upload endpoint prefix.
const UPLOAD_BASE_URL: &str = "https://storage.googleapis.com/upload/storage/v1/b";

/// Object/ACL management endpoint prefix.
const API_BASE_URL: &str = "https://storage.googleapis.com/storage/v1/b";

/// Prefix public object URLs are built from.
const PUBLIC_BASE_URL: &str = "https://storage.googleapis.com";

/// Errors that can occur when relaying an upload to object storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// HTTP transport failed.
    #[error("upload failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The storage API rejected the request.
    #[error("upload failed: storage API returned {status}: {message}")]
    Api { status: u16, message: String },
}

/// Client for the object storage bucket receiving uploads.
#[derive(Clone)]
pub struct StorageClient {
    client: reqwest::Client,
    bucket: String,
    access_token: SecretString,
}

impl std::fmt::Debug for StorageClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageClient")
            .field("bucket", &self.bucket)
            .field("access_token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl StorageClient {
    /// Create a new storage client.
    #[must_use]
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            bucket: config.bucket.clone(),
            access_token: config.access_token.clone(),
        }
    }

    /// Upload `data` under a fresh opaque key, make the object publicly
    /// readable, and return its public URL.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the transport fails or the storage API
    /// rejects either the upload or the visibility change.
    #[instrument(skip(self, data), fields(bucket = %self.bucket, bytes = data.len()))]
    pub async fn upload(&self, data: Vec<u8>, content_type: &str) -> Result<String, StorageError> {
        let key = Uuid::new_v4().to_string();

        let upload_url = format!(
            "{UPLOAD_BASE_URL}/{}/o?uploadType=media&name={key}",
            self.bucket
        );
        let response = self
            .client
            .post(&upload_url)
            .bearer_auth(self.access_token.expose_secret())
            .header(CONTENT_TYPE, content_type)
            .body(data)
            .send()
            .await?;
        Self::check(response).await?;

        // Visibility flips only after the object has fully landed.
        let acl_url = format!("{API_BASE_URL}/{}/o/{key}/acl", self.bucket);
        let response = self
            .client
            .post(&acl_url)
            .bearer_auth(self.access_token.expose_secret())
            .json(&serde_json::json!({ "entity": "allUsers", "role": "READER" }))
            .send()
            .await?;
        Self::check(response).await?;

        let url = public_url(&self.bucket, &key);
        tracing::info!(url = %url, "upload published");
        Ok(url)
    }

    async fn check(response: reqwest::Response) -> Result<(), StorageError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let message = response.text().await.unwrap_or_default();
        Err(StorageError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

/// Public URL of an object in `bucket` under `key`.
fn public_url(bucket: &str, key: &str) -> String {
    format!("{PUBLIC_BASE_URL}/{bucket}/{key}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_url_shape() {
        assert_eq!(
            public_url("geekco-image-storage.appspot.com", "abc-123"),
            "https://storage.googleapis.com/geekco-image-storage.appspot.com/abc-123"
        );
    }

    #[test]
    fn test_debug_redacts_access_token() {
        let client = StorageClient::new(&StorageConfig {
            bucket: "bucket".to_string(),
            access_token: SecretString::from("ya29.very-secret"),
        });

        let debug_output = format!("{client:?}");
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("ya29.very-secret"));
    }
}
