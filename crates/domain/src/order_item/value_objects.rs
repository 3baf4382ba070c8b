//! Value objects for order item fields.

use common::Money;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::ValidationError;

/// Ordered quantity, at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    /// Largest accepted quantity; fits a 32-bit signed database column.
    pub const MAX: u32 = i32::MAX as u32;

    /// Validates a raw quantity.
    pub fn new(quantity: i64) -> Result<Self, ValidationError> {
        if quantity < 1 {
            return Err(ValidationError::QuantityTooLow);
        }
        if quantity > i64::from(Self::MAX) {
            return Err(ValidationError::QuantityTooLarge(quantity));
        }
        Ok(Self(quantity as u32))
    }

    /// Returns the quantity as an integer.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Quantity {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

/// Discount subtracted from an order item's line amount. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Discount(Money);

impl Discount {
    /// Validates a raw discount.
    pub fn new(amount: Decimal) -> Result<Self, ValidationError> {
        if amount < Decimal::ZERO {
            return Err(ValidationError::NegativeDiscount);
        }
        Ok(Self(Money::new(amount)))
    }

    /// Returns the discount as money.
    pub fn amount(&self) -> Money {
        self.0
    }
}

impl TryFrom<Money> for Discount {
    type Error = ValidationError;

    fn try_from(value: Money) -> Result<Self, Self::Error> {
        Self::new(value.amount())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_quantity_accepts_one_and_above() {
        assert_eq!(Quantity::new(1).unwrap().get(), 1);
        assert_eq!(Quantity::new(250).unwrap().get(), 250);
    }

    #[test]
    fn test_quantity_rejects_zero_and_negative() {
        assert_eq!(Quantity::new(0), Err(ValidationError::QuantityTooLow));
        assert_eq!(Quantity::new(-3), Err(ValidationError::QuantityTooLow));
    }

    #[test]
    fn test_quantity_rejects_values_past_max() {
        let too_big = i64::from(Quantity::MAX) + 1;
        assert_eq!(
            Quantity::new(too_big),
            Err(ValidationError::QuantityTooLarge(too_big))
        );
    }

    #[test]
    fn test_discount_accepts_zero() {
        assert!(Discount::new(Decimal::ZERO).unwrap().amount().is_zero());
        assert_eq!(Discount::default(), Discount::new(dec!(0)).unwrap());
    }

    #[test]
    fn test_discount_rejects_negative() {
        assert_eq!(
            Discount::new(dec!(-0.01)),
            Err(ValidationError::NegativeDiscount)
        );
    }
}
