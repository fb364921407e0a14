//! Product and cart line item types.

use serde::{Deserialize, Serialize};

/// A catalog product.
///
/// Products carry no identifier; duplicates are permitted and entries are
/// never updated or deleted once stored. Prices are kept as `f64` because
/// the checkout minor-unit conversion is defined over floating-point
/// arithmetic (see [`crate::types::money`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Display name.
    pub product_name: String,
    /// Price in decimal currency units (e.g., 19.99).
    pub product_price: f64,
    /// Public URL of the product image.
    pub product_image: String,
}

/// One item of a checkout cart.
///
/// Request-scoped: consumed during checkout creation and never persisted.
/// Shares the wire shape of [`Product`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub product_name: String,
    pub product_price: f64,
    pub product_image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_wire_field_names() {
        let product = Product {
            product_name: "Capivara de pelucia".to_string(),
            product_price: 49.9,
            product_image: "https://storage.googleapis.com/bucket/abc".to_string(),
        };

        let json = serde_json::to_value(&product).expect("serializes");
        assert!(json.get("product_name").is_some());
        assert!(json.get("product_price").is_some());
        assert!(json.get("product_image").is_some());
    }

    #[test]
    fn test_cart_line_item_deserializes_product_shape() {
        let item: CartLineItem = serde_json::from_str(
            r#"{"product_name": "Gato de oculos", "product_price": 10.0, "product_image": "https://example.com/cat.png"}"#,
        )
        .expect("deserializes");

        assert_eq!(item.product_name, "Gato de oculos");
        assert!((item.product_price - 10.0).abs() < f64::EPSILON);
    }
}
