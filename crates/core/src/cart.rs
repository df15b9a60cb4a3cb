//! The in-memory cart model.
//!
//! A cart is an ordered collection of lines, unique by product id. All
//! quantity handling goes through [`crate::quantity`], so a cart can never
//! hold a line that would be rejected at checkout. Persistence is the
//! caller's concern; this model is pure and synchronous.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::quantity::{MINIMUM_ORDER_QUANTITY, round_to_nearest_increment};
use crate::types::{Price, ProductId};

/// One product's entry in a cart.
///
/// Name, price, and image are denormalized snapshots taken when the product
/// was added; later catalog changes do not affect lines already in a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: String,
    pub quantity: u32,
}

impl CartLine {
    /// Price for this line (unit price times quantity).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price * self.quantity
    }
}

/// An ordered collection of cart lines, unique by product id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Rebuild a cart from previously persisted lines.
    ///
    /// Lines carrying an invalid quantity (for example persisted by an older
    /// build with different constants) are re-rounded rather than dropped.
    #[must_use]
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        let mut cart = Self::new();
        for mut line in lines {
            if cart.get(&line.product_id).is_some() {
                continue;
            }
            line.quantity = round_to_nearest_increment(i64::from(line.quantity));
            cart.lines.push(line);
        }
        cart
    }

    /// The cart lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Look up a line by product id.
    #[must_use]
    pub fn get(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| &line.product_id == product_id)
    }

    /// True if the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of lines (distinct products).
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Add `quantity` of `product`, snapping to a valid order quantity.
    ///
    /// A request of zero (or anything below the MOQ) becomes the MOQ. If the
    /// product is already in the cart, the raw request is added to the
    /// existing quantity and the sum is rounded once - so topping up a 25kg
    /// line by 10kg lands on 35kg, not on two separately rounded requests.
    pub fn add_item(&mut self, product: &Product, quantity: u32) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product.id)
        {
            line.quantity =
                round_to_nearest_increment(i64::from(line.quantity) + i64::from(quantity));
        } else {
            self.lines.push(CartLine {
                product_id: product.id.clone(),
                name: product.name.clone(),
                price: product.price,
                image: product.image.clone(),
                quantity: round_to_nearest_increment(i64::from(quantity)),
            });
        }
    }

    /// Remove a line. Absent product ids are a no-op.
    pub fn remove_item(&mut self, product_id: &ProductId) {
        self.lines.retain(|line| &line.product_id != product_id);
    }

    /// Set a line's quantity.
    ///
    /// A quantity below the MOQ removes the line entirely; anything else is
    /// rounded to the nearest valid quantity.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: u32) {
        if quantity < MINIMUM_ORDER_QUANTITY {
            self.remove_item(product_id);
            return;
        }

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| &line.product_id == product_id)
        {
            line.quantity = round_to_nearest_increment(i64::from(quantity));
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of quantities across all lines, in kilograms.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Sum of line totals, using the denormalized per-line prices.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }
}
