//! Order store.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use chrono::Utc;

use riverstone_core::OrderId;
use riverstone_core::order::{NewOrder, Order};

/// In-memory store of created orders, keyed by server-assigned id.
#[derive(Debug, Default)]
pub struct OrderStore {
    orders: RwLock<HashMap<OrderId, Order>>,
}

impl OrderStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an order from an accepted submission.
    ///
    /// Assigns a fresh id and creation timestamp; status and payment status
    /// are stamped pending by [`Order::create`].
    pub fn create(&self, new: NewOrder) -> Order {
        let order = Order::create(OrderId::generate(), new, Utc::now());
        self.orders
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(order.id.clone(), order.clone());
        order
    }

    /// Look up an order by id.
    #[must_use]
    pub fn get(&self, id: &OrderId) -> Option<Order> {
        self.orders
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use riverstone_core::order::{OrderItem, ShippingAddress};
    use riverstone_core::{OrderStatus, PaymentStatus, Price, ProductId};

    fn new_order() -> NewOrder {
        NewOrder {
            customer_name: "Asha Menon".to_string(),
            customer_email: "asha@example.com".to_string(),
            customer_phone: Some("+91 98470 00000".to_string()),
            items: vec![OrderItem {
                product_id: ProductId::new("raw-w320"),
                quantity: 25,
                price: Price::from_rupees(1200),
            }],
            total: Price::from_rupees(30000),
            shipping_address: ShippingAddress {
                street: "12 Harbour Road".to_string(),
                city: "Kochi".to_string(),
                state: "Kerala".to_string(),
                postal_code: "682001".to_string(),
                country: "India".to_string(),
            },
            payment_method: "bank".to_string(),
            status: OrderStatus::Pending,
            payment_status: PaymentStatus::Pending,
            notes: None,
        }
    }

    #[test]
    fn test_create_assigns_id_and_is_retrievable() {
        let store = OrderStore::new();
        let order = store.create(new_order());

        let fetched = store.get(&order.id).expect("order stored");
        assert_eq!(fetched, order);
        assert_eq!(fetched.status, OrderStatus::Pending);
        assert_eq!(fetched.payment_status, PaymentStatus::Pending);
    }

    #[test]
    fn test_created_orders_get_distinct_ids() {
        let store = OrderStore::new();
        let a = store.create(new_order());
        let b = store.create(new_order());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_get_unknown_id_is_none() {
        let store = OrderStore::new();
        assert!(store.get(&OrderId::new("missing")).is_none());
    }
}
