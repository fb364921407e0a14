//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `STORAGE_BUCKET` - Cloud storage bucket receiving uploads
//! - `STORAGE_TOKEN` - OAuth bearer token for the storage API
//! - `SMTP_HOST` - SMTP server hostname
//! - `SMTP_USERNAME` - SMTP authentication username
//! - `SMTP_PASSWORD` - SMTP authentication password
//! - `SMTP_FROM` - Email sender address
//! - `BACKUP_RECIPIENT` - Address the catalog backup is mailed to
//! - `PAGBANK_TOKEN` - PagBank API bearer token
//!
//! ## Optional
//! - `SERVER_HOST` - Bind address (default: 127.0.0.1)
//! - `SERVER_PORT` - Listen port (default: 3000)
//! - `CATALOG_PATH` - Catalog document path (default: products.json)
//! - `SMTP_PORT` - SMTP port (default: 587)
//! - `PAGBANK_BASE_URL` - Gateway base URL (default: sandbox)
//! - `PAGBANK_CUSTOMER_NAME` / `PAGBANK_CUSTOMER_EMAIL` /
//!   `PAGBANK_CUSTOMER_TAX_ID` - Placeholder buyer identity sent on every
//!   checkout (the real buyer is never captured; known limitation)
//! - `PAGBANK_SHIPPING_AMOUNT` - Flat shipping in decimal units (default: 9.90)
//! - `PAGBANK_SOFT_DESCRIPTOR` - Card statement descriptor
//! - `PAGBANK_REDIRECT_URL` - Post-payment redirect target

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_CATALOG_PATH: &str = "products.json";
const DEFAULT_PAGBANK_BASE_URL: &str = "https://sandbox.api.pagseguro.com";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Catalog document configuration
    pub catalog: CatalogConfig,
    /// Object storage configuration
    pub storage: StorageConfig,
    /// Email (SMTP) configuration
    pub email: EmailConfig,
    /// PagBank checkout configuration
    pub pagbank: PagBankConfig,
}

/// Location of the catalog document.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Path to the JSON document holding the full catalog.
    pub path: PathBuf,
}

/// Cloud object storage configuration.
///
/// Implements `Debug` manually to redact the bearer token. The token is
/// held in memory only - it is never written to disk.
#[derive(Clone)]
pub struct StorageConfig {
    /// Bucket uploads land in.
    pub bucket: String,
    /// OAuth bearer token for the storage JSON API.
    pub access_token: SecretString,
}

impl std::fmt::Debug for StorageConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageConfig")
            .field("bucket", &self.bucket)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

/// Email (SMTP) configuration.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct EmailConfig {
    /// SMTP server hostname
    pub smtp_host: String,
    /// SMTP server port
    pub smtp_port: u16,
    /// SMTP authentication username
    pub smtp_username: String,
    /// SMTP authentication password
    pub smtp_password: SecretString,
    /// Email sender address (From header)
    pub from_address: String,
    /// Fixed recipient of catalog backups
    pub backup_recipient: String,
}

impl std::fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailConfig")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("smtp_username", &self.smtp_username)
            .field("smtp_password", &"[REDACTED]")
            .field("from_address", &self.from_address)
            .field("backup_recipient", &self.backup_recipient)
            .finish()
    }
}

/// PagBank checkout configuration.
///
/// The buyer identity block is a configured placeholder - the gateway
/// requires customer fields but this system never captures the real buyer.
/// Keeping them here (instead of literals in the client) lets tests
/// override them.
///
/// Implements `Debug` manually to redact the API token.
#[derive(Clone)]
pub struct PagBankConfig {
    /// API bearer token.
    pub token: SecretString,
    /// Gateway base URL (sandbox by default).
    pub base_url: String,
    /// Placeholder customer identity sent with every checkout.
    pub customer: CheckoutCustomer,
    /// Flat shipping amount in decimal currency units.
    pub shipping_amount: f64,
    /// Card statement descriptor.
    pub soft_descriptor: String,
    /// Where the gateway sends the buyer after payment.
    pub redirect_url: String,
}

impl std::fmt::Debug for PagBankConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PagBankConfig")
            .field("token", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("customer", &self.customer)
            .field("shipping_amount", &self.shipping_amount)
            .field("soft_descriptor", &self.soft_descriptor)
            .field("redirect_url", &self.redirect_url)
            .finish()
    }
}

/// Placeholder buyer identity for checkout payloads.
#[derive(Debug, Clone)]
pub struct CheckoutCustomer {
    pub name: String,
    pub email: String,
    pub tax_id: String,
    pub phone_country: String,
    pub phone_area: String,
    pub phone_number: String,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("SERVER_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("SERVER_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("SERVER_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("SERVER_PORT".to_string(), e.to_string()))?;

        Ok(Self {
            host,
            port,
            catalog: CatalogConfig::from_env(),
            storage: StorageConfig::from_env()?,
            email: EmailConfig::from_env()?,
            pagbank: PagBankConfig::from_env()?,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl CatalogConfig {
    fn from_env() -> Self {
        Self {
            path: PathBuf::from(get_env_or_default("CATALOG_PATH", DEFAULT_CATALOG_PATH)),
        }
    }
}

impl StorageConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            bucket: get_required_env("STORAGE_BUCKET")?,
            access_token: get_required_secret("STORAGE_TOKEN")?,
        })
    }
}

impl EmailConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let smtp_port = get_env_or_default("SMTP_PORT", "587")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("SMTP_PORT".to_string(), e.to_string()))?;

        Ok(Self {
            smtp_host: get_required_env("SMTP_HOST")?,
            smtp_port,
            smtp_username: get_required_env("SMTP_USERNAME")?,
            smtp_password: get_required_secret("SMTP_PASSWORD")?,
            from_address: get_required_env("SMTP_FROM")?,
            backup_recipient: get_required_env("BACKUP_RECIPIENT")?,
        })
    }
}

impl PagBankConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let shipping_amount = get_env_or_default("PAGBANK_SHIPPING_AMOUNT", "9.90")
            .parse::<f64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("PAGBANK_SHIPPING_AMOUNT".to_string(), e.to_string())
            })?;

        Ok(Self {
            token: get_required_secret("PAGBANK_TOKEN")?,
            base_url: get_env_or_default("PAGBANK_BASE_URL", DEFAULT_PAGBANK_BASE_URL),
            customer: CheckoutCustomer::from_env(),
            shipping_amount,
            soft_descriptor: get_env_or_default("PAGBANK_SOFT_DESCRIPTOR", "xxxx"),
            redirect_url: get_env_or_default("PAGBANK_REDIRECT_URL", "https://pagseguro.uol.com.br"),
        })
    }
}

impl CheckoutCustomer {
    fn from_env() -> Self {
        Self {
            name: get_env_or_default("PAGBANK_CUSTOMER_NAME", "Seu Nome"),
            email: get_env_or_default("PAGBANK_CUSTOMER_EMAIL", "seu_email@gmail.com"),
            tax_id: get_env_or_default("PAGBANK_CUSTOMER_TAX_ID", "18055610576"),
            phone_country: "+55".to_string(),
            phone_area: "11".to_string(),
            phone_number: "978327459".to_string(),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get a required environment variable as a secret.
fn get_required_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    Ok(SecretString::from(value))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_config() -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            catalog: CatalogConfig {
                path: PathBuf::from("products.json"),
            },
            storage: StorageConfig {
                bucket: "geekco-image-storage.appspot.com".to_string(),
                access_token: SecretString::from("ya29.super-secret-token"),
            },
            email: EmailConfig {
                smtp_host: "smtp.gmail.com".to_string(),
                smtp_port: 587,
                smtp_username: "backups@example.com".to_string(),
                smtp_password: SecretString::from("super_secret_smtp_password"),
                from_address: "backups@example.com".to_string(),
                backup_recipient: "owner@example.com".to_string(),
            },
            pagbank: PagBankConfig {
                token: SecretString::from("super-secret-gateway-token"),
                base_url: DEFAULT_PAGBANK_BASE_URL.to_string(),
                customer: CheckoutCustomer {
                    name: "Seu Nome".to_string(),
                    email: "seu_email@gmail.com".to_string(),
                    tax_id: "18055610576".to_string(),
                    phone_country: "+55".to_string(),
                    phone_area: "11".to_string(),
                    phone_number: "978327459".to_string(),
                },
                shipping_amount: 9.90,
                soft_descriptor: "xxxx".to_string(),
                redirect_url: "https://pagseguro.uol.com.br".to_string(),
            },
        }
    }

    #[test]
    fn test_socket_addr() {
        let config = test_config();
        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_storage_config_debug_redacts_token() {
        let config = test_config();
        let debug_output = format!("{:?}", config.storage);

        assert!(debug_output.contains("geekco-image-storage.appspot.com"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("ya29.super-secret-token"));
    }

    #[test]
    fn test_email_config_debug_redacts_password() {
        let config = test_config();
        let debug_output = format!("{:?}", config.email);

        assert!(debug_output.contains("smtp.gmail.com"));
        assert!(debug_output.contains("587"));
        assert!(debug_output.contains("owner@example.com"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_smtp_password"));
    }

    #[test]
    fn test_pagbank_config_debug_redacts_token() {
        let config = test_config();
        let debug_output = format!("{:?}", config.pagbank);

        assert!(debug_output.contains("sandbox.api.pagseguro.com"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super-secret-gateway-token"));
    }
}
