//! The durable cart store.
//!
//! Wraps the pure cart model from `riverstone-core` with persistence through
//! an injected [`CartStorage`] backend. The store is constructed explicitly
//! and owned by the caller - there is no ambient global cart.
//!
//! Every mutation serializes the whole cart (a JSON array of lines) back to
//! storage under the fixed key. Persistence is synchronous last-write-wins;
//! two stores over the same backend do not see each other's writes until
//! reopened.

use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use thiserror::Error;

use riverstone_core::cart::{Cart, CartLine};
use riverstone_core::catalog::Product;
use riverstone_core::{Price, ProductId};

/// The fixed storage key carts persist under.
pub const CART_STORAGE_KEY: &str = "riverstone.cart";

/// Errors from a cart storage backend.
#[derive(Debug, Error)]
pub enum CartStorageError {
    #[error("cart storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A durable key-value slot the cart serializes into.
///
/// Backends deal in raw strings; the store owns the JSON encoding.
pub trait CartStorage {
    /// Read the stored cart, `None` if nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn load(&self) -> Result<Option<String>, CartStorageError>;

    /// Overwrite the stored cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn save(&self, data: &str) -> Result<(), CartStorageError>;
}

impl<T: CartStorage + ?Sized> CartStorage for &T {
    fn load(&self) -> Result<Option<String>, CartStorageError> {
        (**self).load()
    }

    fn save(&self, data: &str) -> Result<(), CartStorageError> {
        (**self).save(data)
    }
}

impl<T: CartStorage + ?Sized> CartStorage for std::sync::Arc<T> {
    fn load(&self) -> Result<Option<String>, CartStorageError> {
        (**self).load()
    }

    fn save(&self, data: &str) -> Result<(), CartStorageError> {
        (**self).save(data)
    }
}

/// File-backed cart storage: one JSON file named after the storage key.
#[derive(Debug, Clone)]
pub struct FileCartStorage {
    path: PathBuf,
}

impl FileCartStorage {
    /// Store the cart under `dir/riverstone.cart.json`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(format!("{CART_STORAGE_KEY}.json")),
        }
    }

    /// The file the cart persists to.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl CartStorage for FileCartStorage {
    fn load(&self) -> Result<Option<String>, CartStorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, data: &str) -> Result<(), CartStorageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, data)?;
        Ok(())
    }
}

/// In-memory cart storage for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryCartStorage {
    data: Mutex<Option<String>>,
}

impl CartStorage for MemoryCartStorage {
    fn load(&self) -> Result<Option<String>, CartStorageError> {
        Ok(self
            .data
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn save(&self, data: &str) -> Result<(), CartStorageError> {
        *self.data.lock().unwrap_or_else(PoisonError::into_inner) = Some(data.to_string());
        Ok(())
    }
}

/// A cart with durable persistence.
///
/// All quantity rules are enforced by the underlying [`Cart`]; this type adds
/// load-at-open and save-on-mutation.
pub struct CartStore<S: CartStorage> {
    cart: Cart,
    storage: S,
}

impl<S: CartStorage> CartStore<S> {
    /// Open a cart store, loading any persisted cart.
    ///
    /// Malformed or unreadable stored data degrades to an empty cart with a
    /// logged warning; it is never an error.
    pub fn open(storage: S) -> Self {
        let cart = match storage.load() {
            Ok(Some(data)) => match serde_json::from_str::<Vec<CartLine>>(&data) {
                Ok(lines) => Cart::from_lines(lines),
                Err(e) => {
                    tracing::warn!(error = %e, "Discarding malformed persisted cart");
                    Cart::new()
                }
            },
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read persisted cart, starting empty");
                Cart::new()
            }
        };

        Self { cart, storage }
    }

    /// The current cart.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add a quantity of a product and persist. See [`Cart::add_item`].
    pub fn add_item(&mut self, product: &Product, quantity: u32) {
        self.cart.add_item(product, quantity);
        self.persist();
    }

    /// Remove a line and persist. See [`Cart::remove_item`].
    pub fn remove_item(&mut self, product_id: &ProductId) {
        self.cart.remove_item(product_id);
        self.persist();
    }

    /// Update a line's quantity and persist. See [`Cart::update_quantity`].
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: u32) {
        self.cart.update_quantity(product_id, quantity);
        self.persist();
    }

    /// Empty the cart and persist.
    pub fn clear(&mut self) {
        self.cart.clear();
        self.persist();
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.cart.total_items()
    }

    /// Sum of line totals.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.cart.total_price()
    }

    /// Serialize the cart to storage. Save failures are logged, not raised;
    /// the in-memory mutation has already happened.
    fn persist(&self) {
        match serde_json::to_string(self.cart.lines()) {
            Ok(data) => {
                if let Err(e) = self.storage.save(&data) {
                    tracing::error!(error = %e, "Failed to persist cart");
                }
            }
            Err(e) => tracing::error!(error = %e, "Failed to serialize cart"),
        }
    }
}
