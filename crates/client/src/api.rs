//! Storefront API client.
//!
//! Provides typed access to the catalog read boundary and the order/inquiry
//! submission boundaries. The full product list is cached in memory for five
//! minutes; single-product and category reads re-use the cached list when it
//! is present. Catalog reads retry transient failures a bounded number of
//! times; submissions are never retried automatically - the caller decides
//! whether to resubmit.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, instrument};
use url::Url;

use riverstone_core::ProductId;
use riverstone_core::catalog::Product;
use riverstone_core::inquiry::{Inquiry, NewInquiry};
use riverstone_core::order::{NewOrder, Order};
use riverstone_core::validate::FieldError;

/// Cache TTL for the product list.
const CACHE_TTL: Duration = Duration::from_secs(300);

/// Retries after the initial attempt for catalog reads.
const MAX_RETRIES: u32 = 3;

/// Cache key for the full product list.
const PRODUCTS_KEY: &str = "products";

/// Errors from the storefront API.
///
/// Callers must treat [`ApiError::NotFound`] (the catalog answered, the id
/// does not exist) differently from transient failures (the catalog could
/// not answer): not-found is a stable fact, transient failures are worth a
/// retry or a dismissible notification.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request never produced a response (connect, timeout, body transfer).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Resource does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The server rejected our credentials.
    #[error("Unauthorized")]
    Unauthorized,

    /// Submitted payload failed server-side validation.
    #[error("Validation failed: {}", format_field_errors(.0))]
    Validation(Vec<FieldError>),

    /// Any other non-success HTTP status.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body was not the JSON we expected.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configured base URL is invalid.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl ApiError {
    /// True when the resource is definitively absent.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// True when retrying the same request could plausibly succeed.
    ///
    /// Network failures and 5xx responses are retryable; not-found,
    /// unauthorized, validation, and parse failures are not.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Http(_) => true,
            Self::Status { status, .. } => *status >= 500,
            Self::NotFound(_) | Self::Unauthorized | Self::Validation(_) | Self::Parse(_)
            | Self::Url(_) => false,
        }
    }
}

fn format_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Client for the storefront API.
///
/// Cheaply cloneable; the HTTP client and cache are shared.
#[derive(Clone)]
pub struct StorefrontApi {
    inner: Arc<StorefrontApiInner>,
}

struct StorefrontApiInner {
    http: reqwest::Client,
    base_url: Url,
    cache: Cache<String, Arc<Vec<Product>>>,
}

impl StorefrontApi {
    /// Create a new API client for the given base URL
    /// (e.g. `http://localhost:5001`).
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Url` if the base URL cannot be parsed.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        // Request paths are absolute, so only the origin of the base URL is used
        let base_url = Url::parse(base_url.trim_end_matches('/'))?;
        let cache = Cache::builder().max_capacity(16).time_to_live(CACHE_TTL).build();

        Ok(Self {
            inner: Arc::new(StorefrontApiInner {
                http: reqwest::Client::new(),
                base_url,
                cache,
            }),
        })
    }

    // =========================================================================
    // Catalog reads
    // =========================================================================

    /// Fetch the full product list, caching the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails after retries.
    #[instrument(skip(self))]
    pub async fn products(&self) -> Result<Vec<Product>, ApiError> {
        if let Some(products) = self.inner.cache.get(PRODUCTS_KEY).await {
            debug!("Cache hit for product list");
            return Ok((*products).clone());
        }

        let products: Vec<Product> = self.get_with_retry("/api/products").await?;
        self.inner
            .cache
            .insert(PRODUCTS_KEY.to_string(), Arc::new(products.clone()))
            .await;

        Ok(products)
    }

    /// Fetch a single product by id.
    ///
    /// Re-uses the cached product list when present; an id absent from a
    /// successfully fetched catalog is `NotFound`, never a transient error.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if the product does not exist, or a
    /// transport error if the API request fails after retries.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn product(&self, id: &ProductId) -> Result<Product, ApiError> {
        if let Some(products) = self.inner.cache.get(PRODUCTS_KEY).await {
            debug!("Answering product lookup from cached list");
            return products
                .iter()
                .find(|p| &p.id == id)
                .cloned()
                .ok_or_else(|| ApiError::NotFound(format!("Product not found: {id}")));
        }

        self.get_with_retry(&format!("/api/products/{id}")).await
    }

    /// Fetch the products in a category.
    ///
    /// An unknown category is an empty list, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails after retries.
    #[instrument(skip(self), fields(category = %category))]
    pub async fn products_by_category(&self, category: &str) -> Result<Vec<Product>, ApiError> {
        if let Some(products) = self.inner.cache.get(PRODUCTS_KEY).await {
            debug!("Answering category lookup from cached list");
            return Ok(products
                .iter()
                .filter(|p| p.category == category)
                .cloned()
                .collect());
        }

        self.get_with_retry(&format!("/api/products/category/{category}"))
            .await
    }

    // =========================================================================
    // Submissions (never auto-retried)
    // =========================================================================

    /// Submit an order.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` with per-field details if the server
    /// rejects the payload, or a transport error. Submissions are not
    /// retried; the caller resubmits explicitly.
    #[instrument(skip(self, order), fields(items = order.items.len()))]
    pub async fn create_order(&self, order: &NewOrder) -> Result<Order, ApiError> {
        self.post_json("/api/orders", order).await
    }

    /// Submit an export/contact inquiry.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` with per-field details if the server
    /// rejects the payload, or a transport error.
    #[instrument(skip(self, inquiry))]
    pub async fn create_inquiry(&self, inquiry: &NewInquiry) -> Result<Inquiry, ApiError> {
        self.post_json("/api/inquiries", inquiry).await
    }

    // =========================================================================
    // Transport
    // =========================================================================

    /// GET with bounded retry on transient failures.
    async fn get_with_retry<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path)?;
        let mut attempt = 0;

        loop {
            match self.get_once(&url).await {
                Ok(value) => return Ok(value),
                Err(e) if e.is_retryable() && attempt < MAX_RETRIES => {
                    attempt += 1;
                    debug!(error = %e, attempt, "Retrying catalog read");
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn get_once<T: DeserializeOwned>(&self, url: &Url) -> Result<T, ApiError> {
        let response = self.inner.http.get(url.clone()).send().await?;
        Self::decode(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path)?;
        let response = self.inner.http.post(url).json(body).send().await?;
        Self::decode(response).await
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.inner.base_url.join(path)?)
    }

    /// Map a response to a typed value or a typed error.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            return Ok(serde_json::from_str(&text)?);
        }

        // Error bodies are {"error": "...", "details": [...]} where details
        // is present only on validation failures
        let body: serde_json::Value = serde_json::from_str(&text).unwrap_or_default();
        let message = body
            .get("error")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("request failed")
            .to_string();

        match status.as_u16() {
            404 => Err(ApiError::NotFound(message)),
            401 => Err(ApiError::Unauthorized),
            400 => {
                let details = body
                    .get("details")
                    .cloned()
                    .map(serde_json::from_value::<Vec<FieldError>>);
                match details {
                    Some(Ok(fields)) if !fields.is_empty() => Err(ApiError::Validation(fields)),
                    _ => Err(ApiError::Status {
                        status: 400,
                        message,
                    }),
                }
            }
            code => Err(ApiError::Status {
                status: code,
                message,
            }),
        }
    }

    /// Pre-load the product list cache, bypassing the network.
    #[cfg(test)]
    async fn prime_cache(&self, products: Vec<Product>) {
        self.inner
            .cache
            .insert(PRODUCTS_KEY.to_string(), Arc::new(products))
            .await;
    }
}
