//! Checkout route handler.

use axum::{Json, extract::State};
use tracing::instrument;

use geekco_core::CartLineItem;

use crate::error::AppError;
use crate::state::AppState;

/// Create a checkout session for the posted cart.
///
/// Responds with the gateway's payment URL as plain text; the front-end
/// redirects the buyer there.
#[instrument(skip(state, items), fields(items = items.len()))]
pub async fn create_checkout(
    State(state): State<AppState>,
    Json(items): Json<Vec<CartLineItem>>,
) -> Result<String, AppError> {
    let url = state.pagbank().create_checkout(&items).await?;
    Ok(url)
}
