//! Order records and submission payloads.
//!
//! A [`NewOrder`] is what the checkout assembler produces and the server
//! accepts; an [`Order`] is the immutable record the server creates from it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::quantity::is_valid_quantity;
use crate::types::{Email, OrderId, OrderStatus, PaymentStatus, Price, ProductId};
use crate::validate::{FieldError, require_non_empty};

/// One ordered product at its price snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: ProductId,
    pub quantity: u32,
    pub price: Price,
}

/// Shipping destination for an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

/// An order submission payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub customer_name: String,
    pub customer_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    pub items: Vec<OrderItem>,
    pub total: Price,
    pub shipping_address: ShippingAddress,
    pub payment_method: String,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl NewOrder {
    /// Validate the payload, returning every invalid field.
    ///
    /// # Errors
    ///
    /// Returns the full list of field errors; an empty items list, an
    /// off-policy quantity, a malformed email, and a total that does not
    /// match the items are all validation failures.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        require_non_empty(&mut errors, "customerName", &self.customer_name);
        if let Err(e) = Email::parse(self.customer_email.trim()) {
            errors.push(FieldError::new("customerEmail", e.to_string()));
        }

        if self.items.is_empty() {
            errors.push(FieldError::new("items", "order must contain at least one item"));
        }
        for (index, item) in self.items.iter().enumerate() {
            if !is_valid_quantity(item.quantity) {
                errors.push(FieldError::new(
                    format!("items[{index}].quantity"),
                    format!(
                        "{} is not a valid order quantity for {}",
                        item.quantity, item.product_id
                    ),
                ));
            }
        }

        let computed: Price = self
            .items
            .iter()
            .map(|item| item.price * item.quantity)
            .sum();
        if !self.items.is_empty() && computed != self.total {
            errors.push(FieldError::new("total", "does not match the sum of item totals"));
        }

        require_non_empty(&mut errors, "shippingAddress.street", &self.shipping_address.street);
        require_non_empty(&mut errors, "shippingAddress.city", &self.shipping_address.city);
        require_non_empty(&mut errors, "shippingAddress.state", &self.shipping_address.state);
        require_non_empty(
            &mut errors,
            "shippingAddress.postalCode",
            &self.shipping_address.postal_code,
        );
        require_non_empty(
            &mut errors,
            "shippingAddress.country",
            &self.shipping_address.country,
        );
        require_non_empty(&mut errors, "paymentMethod", &self.payment_method);

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// A created order. Immutable once created; there is no update API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub customer_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    pub items: Vec<OrderItem>,
    pub total: Price,
    pub shipping_address: ShippingAddress,
    pub payment_method: String,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Create an order record from an accepted submission.
    ///
    /// Status and payment status are stamped pending here regardless of what
    /// the payload carried; a submission cannot create a paid order.
    #[must_use]
    pub fn create(id: OrderId, new: NewOrder, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            customer_name: new.customer_name,
            customer_email: new.customer_email,
            customer_phone: new.customer_phone,
            items: new.items,
            total: new.total,
            shipping_address: new.shipping_address,
            payment_method: new.payment_method,
            status: OrderStatus::Pending,
            payment_status: PaymentStatus::Pending,
            notes: new.notes,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> ShippingAddress {
        ShippingAddress {
            street: "12 Harbour Road".to_string(),
            city: "Kochi".to_string(),
            state: "Kerala".to_string(),
            postal_code: "682001".to_string(),
            country: "India".to_string(),
        }
    }

    fn valid_order() -> NewOrder {
        NewOrder {
            customer_name: "Asha Menon".to_string(),
            customer_email: "asha@example.com".to_string(),
            customer_phone: None,
            items: vec![OrderItem {
                product_id: ProductId::new("raw-w320"),
                quantity: 25,
                price: Price::from_rupees(1200),
            }],
            total: Price::from_rupees(30000),
            shipping_address: address(),
            payment_method: "bank".to_string(),
            status: OrderStatus::Pending,
            payment_status: PaymentStatus::Pending,
            notes: None,
        }
    }

    #[test]
    fn test_valid_order_passes() {
        assert!(valid_order().validate().is_ok());
    }

    #[test]
    fn test_empty_items_is_invalid() {
        let mut order = valid_order();
        order.items.clear();
        order.total = Price::ZERO;

        let errors = order.validate().expect_err("must fail");
        assert!(errors.iter().any(|e| e.field == "items"));
    }

    #[test]
    fn test_off_policy_quantity_is_flagged_per_item() {
        let mut order = valid_order();
        if let Some(item) = order.items.first_mut() {
            item.quantity = 10;
        }
        order.total = Price::from_rupees(12000);

        let errors = order.validate().expect_err("must fail");
        assert!(errors.iter().any(|e| e.field == "items[0].quantity"));
    }

    #[test]
    fn test_mismatched_total_is_flagged() {
        let mut order = valid_order();
        order.total = Price::from_rupees(1);

        let errors = order.validate().expect_err("must fail");
        assert!(errors.iter().any(|e| e.field == "total"));
    }

    #[test]
    fn test_bad_email_and_missing_fields_accumulate() {
        let mut order = valid_order();
        order.customer_email = "not-an-email".to_string();
        order.shipping_address.city = String::new();
        order.payment_method = "  ".to_string();

        let errors = order.validate().expect_err("must fail");
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"customerEmail"));
        assert!(fields.contains(&"shippingAddress.city"));
        assert!(fields.contains(&"paymentMethod"));
    }

    #[test]
    fn test_create_stamps_pending_statuses() {
        let mut new = valid_order();
        new.status = OrderStatus::Shipped;
        new.payment_status = PaymentStatus::Paid;

        let order = Order::create(OrderId::generate(), new, Utc::now());
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.payment_status, PaymentStatus::Pending);
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let order = Order::create(OrderId::new("ord-1"), valid_order(), Utc::now());
        let json = serde_json::to_value(&order).expect("serialize");

        assert_eq!(json["customerName"], "Asha Menon");
        assert_eq!(json["paymentStatus"], "pending");
        assert_eq!(json["items"][0]["productId"], "raw-w320");
        assert_eq!(json["shippingAddress"]["postalCode"], "682001");
        assert_eq!(json["total"], "30000");
    }
}
