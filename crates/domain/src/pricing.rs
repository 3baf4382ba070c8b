//! Order item total calculation.

use common::Money;

use crate::order_item::{Discount, Quantity};

/// Computes an order item's total: `price * quantity - discount`.
///
/// The result is not floored at zero. A discount larger than the line
/// amount produces a negative total.
pub fn compute_total(price: Money, quantity: Quantity, discount: Discount) -> Money {
    price.multiply(quantity.get()) - discount.amount()
}
