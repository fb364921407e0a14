//! On-disk catalog store.
//!
//! The catalog is a single JSON document that is read in full and rewritten
//! in full on every mutation. The load-modify-save cycle is **not**
//! transactional: two concurrent appends can both load the same snapshot,
//! and whichever `save` lands last silently discards the other's addition.
//! That lost-update anomaly is an accepted limitation of the design and is
//! pinned by `concurrent_appends_last_write_wins` below rather than fixed.
//!
//! [`CatalogStore`] is the seam for swapping the JSON file for a real
//! embedded or networked document store without touching the service layer.

use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;
use tokio::io::AsyncWriteExt;

use geekco_core::ProductCatalog;

/// Errors that can occur in the catalog store and service.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog document does not exist on disk.
    #[error("Products file not found")]
    NotFound,

    /// The requested category is absent from the document (read path).
    #[error("Category not found")]
    UnknownCategory(String),

    /// The category is not one of the document's bucket names (write path).
    #[error("Invalid category")]
    InvalidCategory(String),

    /// Filesystem failure while reading or writing the document.
    #[error("catalog I/O error: {0}")]
    Io(#[from] io::Error),

    /// The document on disk is not valid catalog JSON.
    #[error("malformed catalog document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Persistence contract for the catalog document.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Create the document with the fixed category set if it does not exist.
    ///
    /// Idempotent: a pre-existing document is left untouched.
    async fn initialize(&self) -> Result<(), CatalogError>;

    /// Read the full document.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if the document does not exist.
    async fn load(&self) -> Result<ProductCatalog, CatalogError>;

    /// Replace the document contents in full.
    async fn save(&self, catalog: &ProductCatalog) -> Result<(), CatalogError>;
}

/// Catalog store backed by a JSON file on local or mounted storage.
#[derive(Debug, Clone)]
pub struct FileCatalogStore {
    path: PathBuf,
}

impl FileCatalogStore {
    /// Create a store over the document at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Sibling path the document is staged at before the rename.
    fn temp_path(&self) -> PathBuf {
        let mut staged = self.path.clone().into_os_string();
        staged.push(".tmp");
        PathBuf::from(staged)
    }
}

#[async_trait]
impl CatalogStore for FileCatalogStore {
    async fn initialize(&self) -> Result<(), CatalogError> {
        // Exclusive create: losing the creation race means another writer
        // already initialized the document, which is the idempotent outcome.
        match tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
            .await
        {
            Ok(mut file) => {
                let bytes = serde_json::to_vec_pretty(&ProductCatalog::with_default_categories())?;
                file.write_all(&bytes).await?;
                file.flush().await?;
                tracing::info!(path = %self.path.display(), "catalog document initialized");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn load(&self) -> Result<ProductCatalog, CatalogError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(CatalogError::NotFound),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn save(&self, catalog: &ProductCatalog) -> Result<(), CatalogError> {
        // Stage-then-rename so a crash mid-write cannot truncate the document.
        let bytes = serde_json::to_vec_pretty(catalog)?;
        let staged = self.temp_path();
        tokio::fs::write(&staged, &bytes).await?;
        tokio::fs::rename(&staged, &self.path).await?;
        Ok(())
    }
}
