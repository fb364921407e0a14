//! Backup mailer for the catalog document.
//!
//! Uses SMTP via lettre for delivery. The catalog document is attached as a
//! binary part (base64 transfer encoding is handled by lettre) and the
//! subject carries the backup date.

use std::path::Path;

use chrono::{Local, NaiveDate};
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Attachment, MultiPart, SinglePart, header::ContentType},
    transport::smtp::{Error as SmtpError, authentication::Credentials},
};
use secrecy::ExposeSecret;
use thiserror::Error;

use crate::config::EmailConfig;

/// Fixed plain-text body of every backup email.
const BACKUP_BODY: &str = "Attached is the current product catalog backup.";

/// Errors that can occur when sending the backup email.
#[derive(Debug, Error)]
pub enum BackupError {
    /// The catalog document does not exist on disk.
    #[error("Products file not found")]
    FileNotFound(String),

    /// SMTP transport error.
    #[error("SMTP error: {0}")]
    Smtp(#[from] SmtpError),

    /// Failed to build email message.
    #[error("Failed to build message: {0}")]
    MessageBuild(#[from] lettre::error::Error),

    /// Invalid email address.
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),

    /// Invalid attachment content type.
    #[error("Invalid attachment content type: {0}")]
    ContentType(String),

    /// Failed to read the catalog document.
    #[error("Failed to read catalog document: {0}")]
    Io(#[from] std::io::Error),
}

/// Mailer that ships the catalog document to a fixed recipient.
#[derive(Clone)]
pub struct BackupMailer {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
    recipient: String,
}

impl BackupMailer {
    /// Create a new backup mailer from configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the SMTP relay cannot be configured.
    pub fn new(config: &EmailConfig) -> Result<Self, SmtpError> {
        let credentials = Credentials::new(
            config.smtp_username.clone(),
            config.smtp_password.expose_secret().to_string(),
        );

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port)
            .credentials(credentials)
            .build();

        Ok(Self {
            mailer,
            from_address: config.from_address.clone(),
            recipient: config.backup_recipient.clone(),
        })
    }

    /// Email the catalog document at `catalog_path` as a dated backup.
    ///
    /// # Errors
    ///
    /// Returns [`BackupError::FileNotFound`] if the document is missing,
    /// or a transport/build error if sending fails.
    pub async fn send_backup(&self, catalog_path: &Path) -> Result<(), BackupError> {
        if !tokio::fs::try_exists(catalog_path).await? {
            return Err(BackupError::FileNotFound(
                catalog_path.display().to_string(),
            ));
        }
        let document = tokio::fs::read(catalog_path).await?;
        let filename = catalog_path.file_name().map_or_else(
            || "products.json".to_string(),
            |name| name.to_string_lossy().into_owned(),
        );

        let subject = backup_subject(Local::now().date_naive());
        let attachment_type = ContentType::parse("application/octet-stream")
            .map_err(|e| BackupError::ContentType(e.to_string()))?;

        let email = Message::builder()
            .from(
                self.from_address
                    .parse()
                    .map_err(|_| BackupError::InvalidAddress(self.from_address.clone()))?,
            )
            .to(self
                .recipient
                .parse()
                .map_err(|_| BackupError::InvalidAddress(self.recipient.clone()))?)
            .subject(subject.clone())
            .multipart(
                MultiPart::mixed()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(BACKUP_BODY.to_string()),
                    )
                    .singlepart(Attachment::new(filename).body(document, attachment_type)),
            )?;

        self.mailer.send(email).await?;

        tracing::info!(to = %self.recipient, subject = %subject, "backup email sent");
        Ok(())
    }
}

/// Subject line carrying the backup date as day/month/year.
fn backup_subject(date: NaiveDate) -> String {
    format!("Catalog backup {}", date.format("%d/%m/%Y"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn test_mailer() -> BackupMailer {
        BackupMailer::new(&EmailConfig {
            smtp_host: "smtp.example.com".to_string(),
            smtp_port: 587,
            smtp_username: "backups@example.com".to_string(),
            smtp_password: SecretString::from("password"),
            from_address: "backups@example.com".to_string(),
            backup_recipient: "owner@example.com".to_string(),
        })
        .expect("relay configured")
    }

    #[test]
    fn test_backup_subject_uses_day_month_year() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 5).expect("valid date");
        assert_eq!(backup_subject(date), "Catalog backup 05/08/2026");
    }

    #[tokio::test]
    async fn test_send_backup_missing_document() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("products.json");

        let err = test_mailer()
            .send_backup(&missing)
            .await
            .expect_err("missing document");

        assert!(matches!(err, BackupError::FileNotFound(_)));
        assert_eq!(err.to_string(), "Products file not found");
    }
}
