//! Catalog route handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;
use tracing::instrument;

use geekco_core::Product;

use crate::error::{AppError, MessageResponse};
use crate::state::AppState;

/// Body of `POST /products`.
#[derive(Debug, Deserialize)]
pub struct ListByCategoryRequest {
    pub category: String,
}

/// Products of one category, freshly shuffled per request.
#[instrument(skip(state), fields(category = %body.category))]
pub async fn list_by_category(
    State(state): State<AppState>,
    Json(body): Json<ListByCategoryRequest>,
) -> Result<Json<Vec<Product>>, AppError> {
    let products = state.catalog().list_by_category(&body.category).await?;
    Ok(Json(products))
}

/// Every product in the catalog, in document order.
#[instrument(skip(state))]
pub async fn list_all(State(state): State<AppState>) -> Result<Json<Vec<Product>>, AppError> {
    Ok(Json(state.catalog().list_all().await?))
}

/// Body of `POST /add_product`.
#[derive(Debug, Deserialize)]
pub struct AddProductRequest {
    pub product_name: String,
    pub product_price: f64,
    pub product_image: String,
    pub category: String,
}

/// Append a product to a category and persist the catalog.
#[instrument(skip(state, body), fields(category = %body.category))]
pub async fn add_product(
    State(state): State<AppState>,
    Json(body): Json<AddProductRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let product = Product {
        product_name: body.product_name,
        product_price: body.product_price,
        product_image: body.product_image,
    };

    state.catalog().add_product(&body.category, product).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Product created successfully")),
    ))
}
