//! In-memory stores for catalog, orders, and inquiries.
//!
//! The storefront keeps everything in process memory: the catalog is loaded
//! once at startup (built-in seed or a static JSON export), and orders and
//! inquiries accumulate in `RwLock`-guarded maps. Restarting the server loses
//! submitted records; downstream fulfillment pulls them before deploys.

mod catalog;
mod inquiries;
mod orders;
pub mod seed;

pub use catalog::{CatalogLoadError, CatalogStore};
pub use inquiries::InquiryStore;
pub use orders::OrderStore;
