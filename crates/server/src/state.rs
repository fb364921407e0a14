//! Application state shared across handlers.

use std::sync::Arc;

use lettre::transport::smtp::Error as SmtpError;

use crate::catalog::{CatalogService, FileCatalogStore};
use crate::config::ServerConfig;
use crate::pagbank::PagBankClient;
use crate::services::{BackupMailer, StorageClient};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// catalog service and the external collaborator clients.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    catalog: CatalogService,
    storage: StorageClient,
    mailer: BackupMailer,
    pagbank: PagBankClient,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the SMTP relay cannot be configured.
    pub fn new(config: ServerConfig) -> Result<Self, SmtpError> {
        let catalog = CatalogService::new(Arc::new(FileCatalogStore::new(
            config.catalog.path.clone(),
        )));
        let storage = StorageClient::new(&config.storage);
        let mailer = BackupMailer::new(&config.email)?;
        let pagbank = PagBankClient::new(&config.pagbank);

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                storage,
                mailer,
                pagbank,
            }),
        })
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog service.
    #[must_use]
    pub fn catalog(&self) -> &CatalogService {
        &self.inner.catalog
    }

    /// Get a reference to the object storage client.
    #[must_use]
    pub fn storage(&self) -> &StorageClient {
        &self.inner.storage
    }

    /// Get a reference to the backup mailer.
    #[must_use]
    pub fn mailer(&self) -> &BackupMailer {
        &self.inner.mailer
    }

    /// Get a reference to the PagBank client.
    #[must_use]
    pub fn pagbank(&self) -> &PagBankClient {
        &self.inner.pagbank
    }
}
