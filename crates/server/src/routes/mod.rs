//! HTTP route handlers for the catalog backend.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health        - Health check
//!
//! # Catalog
//! POST /products      - Products of one category, freshly shuffled
//! GET  /all_products  - Every product, document order
//! POST /add_product   - Append a product to a category (201)
//!
//! # Collaborators
//! POST /upload        - Relay a file to object storage, return public URL
//! POST /send-email    - Mail the catalog document as a dated backup
//! POST /pagbank       - Create a checkout session, return payment URL
//! ```

pub mod backup;
pub mod checkout;
pub mod products;
pub mod upload;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create all routes for the backend.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", post(products::list_by_category))
        .route("/all_products", get(products::list_all))
        .route("/add_product", post(products::add_product))
        .route("/upload", post(upload::upload_file))
        .route("/send-email", post(backup::send_backup))
        .route("/pagbank", post(checkout::create_checkout))
}
