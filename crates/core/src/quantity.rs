//! Order quantity rules.
//!
//! Export orders ship in bulk: every order line must meet the minimum order
//! quantity and land on a fixed increment above it. These functions are the
//! single source of truth for what a sellable quantity is - the cart, the
//! checkout gate, and the server-side order validation all go through them.

/// Minimum order quantity in kilograms.
pub const MINIMUM_ORDER_QUANTITY: u32 = 25;

/// Step size in kilograms for quantities above the minimum.
pub const QUANTITY_INCREMENT: u32 = 5;

/// Direction for stepping a quantity up or down by one increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Up,
    Down,
}

/// Returns true if `quantity` meets the MOQ and lands on a valid increment.
///
/// A quantity is valid when it is at least [`MINIMUM_ORDER_QUANTITY`] and its
/// residue modulo [`QUANTITY_INCREMENT`] matches the MOQ's residue.
#[must_use]
pub const fn is_valid_quantity(quantity: u32) -> bool {
    quantity >= MINIMUM_ORDER_QUANTITY
        && quantity % QUANTITY_INCREMENT == MINIMUM_ORDER_QUANTITY % QUANTITY_INCREMENT
}

/// Rounds a raw requested quantity to the nearest valid order quantity.
///
/// Anything at or below the MOQ (including zero and negative input from a
/// decrement-happy UI) clamps to the MOQ. Above it, the quantity snaps to the
/// nearest increment step measured from the MOQ, ties rounding up, so the
/// result always satisfies [`is_valid_quantity`].
#[must_use]
pub fn round_to_nearest_increment(quantity: i64) -> u32 {
    const MOQ: i64 = MINIMUM_ORDER_QUANTITY as i64;
    const STEP: i64 = QUANTITY_INCREMENT as i64;
    // Far beyond any real order; keeps the arithmetic inside u32 range.
    const MAX_OFFSET: i64 = 1_000_000_000;

    if quantity <= MOQ {
        return MINIMUM_ORDER_QUANTITY;
    }

    let offset = (quantity - MOQ).min(MAX_OFFSET);
    let snapped = MOQ + (offset + STEP / 2) / STEP * STEP;
    u32::try_from(snapped).unwrap_or(MINIMUM_ORDER_QUANTITY)
}

/// Steps a quantity up or down by one increment, clamped below at the MOQ.
#[must_use]
pub const fn next_valid_quantity(current: u32, direction: StepDirection) -> u32 {
    let next = match direction {
        StepDirection::Up => current.saturating_add(QUANTITY_INCREMENT),
        StepDirection::Down => current.saturating_sub(QUANTITY_INCREMENT),
    };
    if next < MINIMUM_ORDER_QUANTITY {
        MINIMUM_ORDER_QUANTITY
    } else {
        next
    }
}
