//! Product records.
//!
//! Products are owned by the catalog and immutable from the cart's
//! perspective; the cart snapshots what it needs at add time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId};

/// A sellable product in the export catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    /// Category slug, e.g. `raw`, `roasted`, `organic`.
    pub category: String,
    /// Display string for the shippable range, e.g. `25kg to 250kg`.
    pub weight: String,
    /// Primary image URI.
    pub image: String,
    /// Ordered gallery image URIs.
    #[serde(default)]
    pub images: Vec<String>,
    /// Units currently available, in kilograms.
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
