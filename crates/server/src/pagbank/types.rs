//! Request and response types for the checkout-creation endpoint.
//!
//! The serialized field names mirror the gateway's wire format, casing
//! quirks included: the customer name key is capitalized, and both the
//! shipping kind and payment method kind serialize as `type`.

use serde::{Deserialize, Serialize};

/// Checkout-creation payload.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutRequest {
    pub customer: Customer,
    pub shipping: Shipping,
    /// One id for the whole cart; every item carries the same value.
    pub reference_id: String,
    /// Expiration instant rendered in the gateway's fixed UTC offset.
    pub expiration_date: String,
    pub customer_modifiable: bool,
    pub items: Vec<CheckoutItem>,
    pub payment_methods: Vec<PaymentMethod>,
    pub soft_descriptor: String,
    pub redirect_url: String,
}

/// Buyer identity block.
#[derive(Debug, Clone, Serialize)]
pub struct Customer {
    #[serde(rename = "Name")]
    pub name: String,
    pub phone: Phone,
    pub email: String,
    pub tax_id: String,
}

/// Buyer phone number, split the way the gateway expects.
#[derive(Debug, Clone, Serialize)]
pub struct Phone {
    pub country: String,
    pub area: String,
    pub number: String,
}

/// Flat shipping block.
#[derive(Debug, Clone, Serialize)]
pub struct Shipping {
    #[serde(rename = "type")]
    pub kind: String,
    pub address_modifiable: bool,
    /// Shipping cost in minor units (cents).
    pub amount: i64,
}

/// One cart line item in gateway shape.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutItem {
    pub reference_id: String,
    pub name: String,
    pub quantity: u32,
    /// Unit price in minor units (cents).
    pub unit_amount: i64,
    pub image_url: String,
}

/// An accepted payment method.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentMethod {
    #[serde(rename = "type")]
    pub kind: String,
}

/// Subset of the checkout-creation response this system consumes.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutResponse {
    #[serde(default)]
    pub links: Vec<Link>,
}

/// Hyperlink object from the gateway response.
#[derive(Debug, Clone, Deserialize)]
pub struct Link {
    pub rel: String,
    pub href: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_name_serializes_capitalized() {
        let customer = Customer {
            name: "Seu Nome".to_string(),
            phone: Phone {
                country: "+55".to_string(),
                area: "11".to_string(),
                number: "978327459".to_string(),
            },
            email: "seu_email@gmail.com".to_string(),
            tax_id: "18055610576".to_string(),
        };

        let json = serde_json::to_value(&customer).expect("serializes");
        assert_eq!(json.get("Name").and_then(|v| v.as_str()), Some("Seu Nome"));
        assert!(json.get("name").is_none());
    }

    #[test]
    fn test_shipping_kind_serializes_as_type() {
        let shipping = Shipping {
            kind: "FIXED".to_string(),
            address_modifiable: true,
            amount: 990,
        };

        let json = serde_json::to_value(&shipping).expect("serializes");
        assert_eq!(json.get("type").and_then(|v| v.as_str()), Some("FIXED"));
    }

    #[test]
    fn test_response_without_links_field_deserializes_empty() {
        let response: CheckoutResponse =
            serde_json::from_str(r#"{"id": "CHEC_123"}"#).expect("deserializes");
        assert!(response.links.is_empty());
    }
}
