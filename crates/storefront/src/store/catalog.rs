//! Read-only product catalog store.

use std::path::Path;

use thiserror::Error;

use riverstone_core::ProductId;
use riverstone_core::catalog::Product;

use super::seed;

/// Errors loading a catalog from a static JSON export.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// The product catalog, fixed for the lifetime of the process.
///
/// Products keep their load order, so listings are stable across requests.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    products: Vec<Product>,
}

impl CatalogStore {
    /// Create a catalog from the built-in seed products.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            products: seed::products(),
        }
    }

    /// Load a catalog from a static JSON export (an array of products).
    ///
    /// # Errors
    ///
    /// Returns `CatalogLoadError` if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, CatalogLoadError> {
        let display = path.display().to_string();
        let data = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
            path: display.clone(),
            source,
        })?;
        let products: Vec<Product> =
            serde_json::from_str(&data).map_err(|source| CatalogLoadError::Parse {
                path: display,
                source,
            })?;

        Ok(Self { products })
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn list(&self) -> Vec<Product> {
        self.products.clone()
    }

    /// Look up a single product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<Product> {
        self.products.iter().find(|p| &p.id == id).cloned()
    }

    /// All products in a category, in catalog order.
    #[must_use]
    pub fn by_category(&self, category: &str) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect()
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True if the catalog holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
