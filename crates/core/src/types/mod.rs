//! Core types for the GeekCo catalog backend.
//!
//! The serialized shape of these types is a compatibility contract with the
//! on-disk `products.json` document and the HTTP API bodies - field names
//! must not change.

pub mod catalog;
pub mod money;
pub mod product;

pub use catalog::{CategoryBucket, DEFAULT_CATEGORIES, ProductCatalog};
pub use money::to_minor_units;
pub use product::{CartLineItem, Product};
