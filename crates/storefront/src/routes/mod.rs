//! HTTP route handlers for the storefront API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                          - Liveness check
//!
//! # Products
//! GET  /api/products                    - Full catalog
//! GET  /api/products/{id}               - Single product
//! GET  /api/products/category/{category} - Products in a category
//!
//! # Orders
//! POST /api/orders                      - Submit an order
//! GET  /api/orders/{id}                 - Single order
//!
//! # Inquiries
//! POST /api/inquiries                   - Submit an export/contact inquiry
//! ```

pub mod inquiries;
pub mod orders;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the `/api` routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::list))
        .route("/products/{id}", get(products::show))
        .route(
            "/products/category/{category}",
            get(products::by_category),
        )
        .route("/orders", post(orders::create))
        .route("/orders/{id}", get(orders::show))
        .route("/inquiries", post(inquiries::create))
}
