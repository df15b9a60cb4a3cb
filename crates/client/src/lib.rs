//! Riverstone Client - Buyer-side library.
//!
//! Everything a storefront front end needs between the page and the API:
//!
//! - [`api`] - Catalog accessor with in-memory caching and bounded retry,
//!   plus order/inquiry submission
//! - [`cart`] - The durable cart store: the core cart model wired to an
//!   injected storage backend
//! - [`checkout`] - Validation gate and order assembly
//!
//! # Example
//!
//! ```rust,ignore
//! use riverstone_client::{CartStore, CheckoutDetails, FileCartStorage, StorefrontApi};
//!
//! let api = StorefrontApi::new("http://localhost:5001")?;
//! let mut cart = CartStore::open(FileCartStorage::new(data_dir));
//!
//! let product = api.product(&"raw-w320".into()).await?;
//! cart.add_item(&product, 25);
//!
//! let order = riverstone_client::place_order(&api, &mut cart, &details).await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod cart;
pub mod checkout;

pub use api::{ApiError, StorefrontApi};
pub use cart::{CART_STORAGE_KEY, CartStorage, CartStore, FileCartStorage, MemoryCartStorage};
pub use checkout::{CheckoutDetails, CheckoutError, assemble_order, place_order};
