//! PagBank checkout API client.
//!
//! Converts a cart into one checkout session, submits it to the gateway's
//! checkout-creation endpoint, and extracts the payment redirect URL from
//! the response's hyperlink list. A single failed attempt surfaces directly
//! to the caller; nothing is retried.

pub mod client;
pub mod error;
pub mod types;

pub use client::PagBankClient;
pub use error::PagBankError;
pub use types::{CheckoutRequest, CheckoutResponse, Link};
