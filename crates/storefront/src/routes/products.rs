//! Product route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};
use tracing::instrument;

use riverstone_core::ProductId;
use riverstone_core::catalog::Product;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// List the full catalog.
///
/// GET /api/products
///
/// The catalog changes only on deploy, so responses are marked cacheable for
/// a minute to keep landing-page loads off the server.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> impl IntoResponse {
    let products = state.catalog().list();
    tracing::debug!(count = products.len(), "Catalog listed");

    (
        [(header::CACHE_CONTROL, "public, max-age=60")],
        Json(products),
    )
}

/// Fetch a single product.
///
/// GET /api/products/{id}
#[instrument(skip(state), fields(product_id = %id))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>> {
    let id = ProductId::new(id);
    state
        .catalog()
        .get(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Product not found: {id}")))
}

/// List products in a category.
///
/// GET /api/products/category/{category}
///
/// An unknown category is an empty list, not an error.
#[instrument(skip(state), fields(category = %category))]
pub async fn by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Json<Vec<Product>> {
    Json(state.catalog().by_category(&category))
}
