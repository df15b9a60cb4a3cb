//! Checkout: validation gate, order assembly, and submission.
//!
//! The gate re-checks every cart line against the quantity policy before a
//! payload is built, so an order can never go out at an invalid quantity
//! even if persisted state was tampered with. Submission is a single
//! request/response: on acceptance the cart is cleared, on any failure the
//! cart is left untouched for a retry.

use thiserror::Error;

use riverstone_core::cart::{Cart, CartLine};
use riverstone_core::order::{NewOrder, Order, OrderItem, ShippingAddress};
use riverstone_core::quantity::is_valid_quantity;
use riverstone_core::{OrderStatus, PaymentStatus, ProductId};

use crate::api::{ApiError, StorefrontApi};
use crate::cart::{CartStorage, CartStore};

/// Customer and shipping details collected by the checkout form.
#[derive(Debug, Clone)]
pub struct CheckoutDetails {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub shipping_address: ShippingAddress,
    pub payment_method: String,
    pub notes: Option<String>,
}

/// Errors that block or fail a checkout.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// There is nothing to order.
    #[error("cart is empty")]
    EmptyCart,

    /// One or more lines violate the quantity policy; submission is blocked
    /// before any request is made.
    #[error("invalid order quantities for: {}", format_ids(.0))]
    InvalidQuantities(Vec<ProductId>),

    /// The submission request failed; the cart is untouched.
    #[error(transparent)]
    Api(#[from] ApiError),
}

fn format_ids(ids: &[ProductId]) -> String {
    ids.iter()
        .map(ProductId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Product ids of lines that violate the quantity policy.
fn invalid_lines(lines: &[CartLine]) -> Vec<ProductId> {
    lines
        .iter()
        .filter(|line| !is_valid_quantity(line.quantity))
        .map(|line| line.product_id.clone())
        .collect()
}

/// Build an order payload from a cart and checkout details.
///
/// Stamps status and payment status pending; the server re-stamps them on
/// creation.
///
/// # Errors
///
/// Returns `CheckoutError::EmptyCart` for an empty cart, or
/// `CheckoutError::InvalidQuantities` naming the offending products if any
/// line fails the quantity policy.
pub fn assemble_order(cart: &Cart, details: &CheckoutDetails) -> Result<NewOrder, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let invalid = invalid_lines(cart.lines());
    if !invalid.is_empty() {
        return Err(CheckoutError::InvalidQuantities(invalid));
    }

    Ok(NewOrder {
        customer_name: details.customer_name.clone(),
        customer_email: details.customer_email.clone(),
        customer_phone: details.customer_phone.clone(),
        items: cart
            .lines()
            .iter()
            .map(|line| OrderItem {
                product_id: line.product_id.clone(),
                quantity: line.quantity,
                price: line.price,
            })
            .collect(),
        total: cart.total_price(),
        shipping_address: details.shipping_address.clone(),
        payment_method: details.payment_method.clone(),
        status: OrderStatus::Pending,
        payment_status: PaymentStatus::Pending,
        notes: details.notes.clone(),
    })
}

/// Assemble and submit an order, clearing the cart on acceptance.
///
/// # Errors
///
/// Returns a blocking [`CheckoutError`] before submission, or the API error
/// afterwards; in every failure case the cart is left as it was so the buyer
/// can retry.
pub async fn place_order<S: CartStorage>(
    api: &StorefrontApi,
    store: &mut CartStore<S>,
    details: &CheckoutDetails,
) -> Result<Order, CheckoutError> {
    let payload = assemble_order(store.cart(), details)?;
    let order = api.create_order(&payload).await?;

    store.clear();
    tracing::info!(order_id = %order.id, "Order placed, cart cleared");

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use riverstone_core::Price;
    use riverstone_core::catalog::Product;

    fn details() -> CheckoutDetails {
        CheckoutDetails {
            customer_name: "Asha Menon".to_string(),
            customer_email: "asha@example.com".to_string(),
            customer_phone: None,
            shipping_address: ShippingAddress {
                street: "12 Harbour Road".to_string(),
                city: "Kochi".to_string(),
                state: "Kerala".to_string(),
                postal_code: "682001".to_string(),
                country: "India".to_string(),
            },
            payment_method: "bank".to_string(),
            notes: None,
        }
    }

    fn product(id: &str, rupees: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            description: String::new(),
            price: Price::from_rupees(rupees),
            category: "raw".to_string(),
            weight: "25kg to 250kg".to_string(),
            image: String::new(),
            images: Vec::new(),
            stock: 1000,
            is_featured: false,
            is_archived: false,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_assembles_payload_from_cart() {
        let mut cart = Cart::new();
        cart.add_item(&product("raw-w320", 1200), 25);

        let order = assemble_order(&cart, &details()).expect("valid cart");
        assert_eq!(order.items.len(), 1);
        assert_eq!(
            order.items.first().map(|i| i.quantity),
            Some(25),
            "quantity snapshot"
        );
        assert_eq!(order.total, Price::from_rupees(30000));
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.payment_status, PaymentStatus::Pending);
        // Assembly validates against the server's own rules
        assert!(order.validate().is_ok());
    }

    #[test]
    fn test_empty_cart_is_blocked() {
        let cart = Cart::new();
        assert!(matches!(
            assemble_order(&cart, &details()),
            Err(CheckoutError::EmptyCart)
        ));
    }

    #[test]
    fn test_gate_names_offending_products() {
        let lines = vec![
            CartLine {
                product_id: ProductId::new("raw-w320"),
                name: String::new(),
                price: Price::from_rupees(1200),
                image: String::new(),
                quantity: 25,
            },
            CartLine {
                product_id: ProductId::new("organic"),
                name: String::new(),
                price: Price::from_rupees(1600),
                image: String::new(),
                quantity: 12,
            },
        ];

        let invalid = invalid_lines(&lines);
        assert_eq!(invalid, vec![ProductId::new("organic")]);
    }
}
