//! Type-safe price representation using decimal arithmetic.

use std::iter::Sum;
use std::ops::{Add, Mul};

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A price in the business's invoicing currency (Indian rupees).
///
/// Serialized as a decimal string (`"1200.00"`) so amounts survive JSON
/// round-trips without floating-point drift.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Price(Decimal);

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::str::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        rust_decimal::serde::str::deserialize(deserializer).map(Self)
    }
}

impl Price {
    /// A zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from whole rupees.
    #[must_use]
    pub fn from_rupees(rupees: i64) -> Self {
        Self(Decimal::from(rupees))
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Format for display (e.g., `₹1200.00`).
    #[must_use]
    pub fn display(&self) -> String {
        format!("\u{20b9}{:.2}", self.0)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_decimal_string() {
        let price = Price::from_rupees(1200);
        let json = serde_json::to_string(&price).expect("serialize");
        assert_eq!(json, "\"1200\"");

        let back: Price = serde_json::from_str("\"1200.00\"").expect("deserialize");
        assert_eq!(back, price);
    }

    #[test]
    fn test_line_total_arithmetic() {
        let price = Price::from_rupees(1200);
        assert_eq!(price * 25, Price::from_rupees(30000));
    }

    #[test]
    fn test_sum_of_prices() {
        let total: Price = [Price::from_rupees(100), Price::from_rupees(250)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::from_rupees(350));
    }

    #[test]
    fn test_display_includes_currency_symbol() {
        assert_eq!(Price::from_rupees(1200).display(), "₹1200.00");
    }
}
