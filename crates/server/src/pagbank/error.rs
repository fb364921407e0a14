//! PagBank API error types.

use thiserror::Error;

/// Errors that can occur when creating a checkout session.
#[derive(Debug, Error)]
pub enum PagBankError {
    /// HTTP transport failed.
    #[error("gateway request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The gateway rejected the request.
    #[error("gateway returned {status}: {message}")]
    Api { status: u16, message: String },

    /// The gateway response body could not be parsed.
    #[error("malformed gateway response: {0}")]
    Malformed(String),

    /// The response carried no hyperlink with relation tag `PAY`.
    #[error("Payment link not found")]
    NoPaymentLink,
}
