//! PagBank checkout client.

use chrono::{DateTime, Duration, FixedOffset, Utc};
use reqwest::header::ACCEPT;
use secrecy::{ExposeSecret, SecretString};
use tracing::instrument;
use uuid::Uuid;

use geekco_core::{CartLineItem, to_minor_units};

use crate::config::{CheckoutCustomer, PagBankConfig};

use super::error::PagBankError;
use super::types::{
    CheckoutItem, CheckoutRequest, CheckoutResponse, Customer, PaymentMethod, Phone, Shipping,
};

/// Checkout sessions expire this many days after creation.
const EXPIRATION_DAYS: i64 = 7;

/// Fixed UTC offset the gateway expects expiration timestamps in.
const GATEWAY_UTC_OFFSET_SECS: i32 = -3 * 3600;

/// Payment method types every checkout accepts.
const PAYMENT_METHOD_TYPES: [&str; 3] = ["DEBIT_CARD", "PIX", "CREDIT_CARD"];

/// Client for the PagBank checkout-creation API.
#[derive(Clone)]
pub struct PagBankClient {
    client: reqwest::Client,
    token: SecretString,
    base_url: String,
    customer: CheckoutCustomer,
    shipping_amount: f64,
    soft_descriptor: String,
    redirect_url: String,
}

impl std::fmt::Debug for PagBankClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PagBankClient")
            .field("token", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl PagBankClient {
    /// Create a new PagBank client.
    #[must_use]
    pub fn new(config: &PagBankConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            token: config.token.clone(),
            base_url: config.base_url.clone(),
            customer: config.customer.clone(),
            shipping_amount: config.shipping_amount,
            soft_descriptor: config.soft_descriptor.clone(),
            redirect_url: config.redirect_url.clone(),
        }
    }

    /// Create one checkout session covering all `line_items` and return the
    /// gateway's payment URL.
    ///
    /// # Errors
    ///
    /// Returns [`PagBankError::NoPaymentLink`] if the response carries no
    /// `PAY` link, or a transport/API error if the call itself fails.
    #[instrument(skip(self, line_items), fields(items = line_items.len()))]
    pub async fn create_checkout(&self, line_items: &[CartLineItem]) -> Result<String, PagBankError> {
        let reference_id = Uuid::new_v4().to_string();
        let expiration = expiration_timestamp(Utc::now());
        let request = self.build_request(&reference_id, &expiration, line_items);

        let url = format!("{}/checkouts", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(self.token.expose_secret())
            .header(ACCEPT, "*/*")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(PagBankError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: CheckoutResponse = response
            .json()
            .await
            .map_err(|e| PagBankError::Malformed(e.to_string()))?;
        let pay_link = find_pay_link(&body).ok_or(PagBankError::NoPaymentLink)?;

        tracing::info!(reference_id = %reference_id, "checkout session created");
        Ok(pay_link.to_string())
    }

    /// Gateway payload for one checkout session.
    fn build_request(
        &self,
        reference_id: &str,
        expiration_date: &str,
        line_items: &[CartLineItem],
    ) -> CheckoutRequest {
        let items = line_items
            .iter()
            .map(|item| CheckoutItem {
                reference_id: reference_id.to_string(),
                name: item.product_name.clone(),
                quantity: 1,
                unit_amount: to_minor_units(item.product_price),
                image_url: item.product_image.clone(),
            })
            .collect();

        CheckoutRequest {
            customer: Customer {
                name: self.customer.name.clone(),
                phone: Phone {
                    country: self.customer.phone_country.clone(),
                    area: self.customer.phone_area.clone(),
                    number: self.customer.phone_number.clone(),
                },
                email: self.customer.email.clone(),
                tax_id: self.customer.tax_id.clone(),
            },
            shipping: Shipping {
                kind: "FIXED".to_string(),
                address_modifiable: true,
                amount: to_minor_units(self.shipping_amount),
            },
            reference_id: reference_id.to_string(),
            expiration_date: expiration_date.to_string(),
            customer_modifiable: true,
            items,
            payment_methods: PAYMENT_METHOD_TYPES
                .iter()
                .map(|kind| PaymentMethod {
                    kind: (*kind).to_string(),
                })
                .collect(),
            soft_descriptor: self.soft_descriptor.clone(),
            redirect_url: self.redirect_url.clone(),
        }
    }
}

/// Expiration instant: `now` plus seven days, rendered in the gateway's
/// fixed offset.
///
/// # Panics
///
/// Never panics in practice; the offset constant is within chrono's range.
fn expiration_timestamp(now: DateTime<Utc>) -> String {
    let offset = FixedOffset::east_opt(GATEWAY_UTC_OFFSET_SECS).expect("valid fixed offset");
    (now + Duration::days(EXPIRATION_DAYS))
        .with_timezone(&offset)
        .format("%Y-%m-%dT%H:%M:%S%:z")
        .to_string()
}

/// First response link whose relation tag is `PAY`.
fn find_pay_link(response: &CheckoutResponse) -> Option<&str> {
    response
        .links
        .iter()
        .find(|link| link.rel == "PAY")
        .map(|link| link.href.as_str())
}
