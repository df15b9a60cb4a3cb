//! Integration tests for Riverstone Cashews.
//!
//! The storefront router is exercised in-process with
//! `tower::ServiceExt::oneshot` against the seeded catalog, so the tests need
//! no network, no database, and no environment variables.
//!
//! # Test Categories
//!
//! - `storefront_catalog` - Catalog read boundary
//! - `storefront_orders` - Order submission and retrieval
//! - `storefront_inquiries` - Inquiry submission

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::Router;
use axum::body::to_bytes;
use axum::response::Response;

use riverstone_storefront::config::StorefrontConfig;
use riverstone_storefront::state::AppState;
use riverstone_storefront::store::CatalogStore;

/// Build the storefront app against the built-in seed catalog.
///
/// The returned router is cheap to clone; clones share state, so a test can
/// issue several requests against the same server.
#[must_use]
pub fn test_app() -> Router {
    let config = StorefrontConfig {
        host: std::net::IpAddr::from([127, 0, 0, 1]),
        port: 0,
        catalog_file: None,
        sentry_dsn: None,
        sentry_environment: None,
    };
    let state = AppState::new(config, CatalogStore::seeded());
    riverstone_storefront::app(state)
}

/// Read a response body as JSON.
///
/// # Panics
///
/// Panics if the body cannot be read or is not valid JSON; in a test that is
/// the failure we want to see.
pub async fn read_json(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read response body");
    serde_json::from_slice(&bytes).expect("response body is JSON")
}
