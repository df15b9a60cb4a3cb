//! Order route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::instrument;

use riverstone_core::OrderId;
use riverstone_core::order::{NewOrder, Order};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Submit an order.
///
/// POST /api/orders
///
/// The payload is validated as a whole; a 400 response enumerates every
/// invalid field so the checkout form can report them inline. Accepted
/// orders are stored with a server-assigned id and pending statuses.
#[instrument(skip(state, new_order), fields(customer_email = %new_order.customer_email))]
pub async fn create(
    State(state): State<AppState>,
    Json(new_order): Json<NewOrder>,
) -> Result<impl IntoResponse> {
    new_order.validate().map_err(AppError::Validation)?;

    let order = state.orders().create(new_order);
    tracing::info!(
        order_id = %order.id,
        items = order.items.len(),
        total = %order.total.amount(),
        "Order created"
    );

    Ok((StatusCode::CREATED, Json(order)))
}

/// Fetch a single order.
///
/// GET /api/orders/{id}
#[instrument(skip(state), fields(order_id = %id))]
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Order>> {
    let id = OrderId::new(id);
    state
        .orders()
        .get(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Order not found: {id}")))
}
