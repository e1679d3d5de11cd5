//! Unit price type backed by decimal arithmetic.
//!
//! Prices in GoMarket are currency-agnostic: the hosting application
//! decides what currency a price is denominated in and how to format it.
//! This type only enforces the one invariant the cart cares about:
//! a unit price is never negative.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`UnitPrice`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is negative.
    #[error("unit price cannot be negative (got {amount})")]
    Negative {
        /// The rejected amount.
        amount: Decimal,
    },
}

/// A non-negative, currency-agnostic price per unit.
///
/// Stored as a [`Decimal`] to keep arithmetic exact; serialized as a
/// decimal string to preserve precision in snapshots. Deserialization
/// re-validates the non-negativity invariant, so a tampered snapshot
/// cannot smuggle a negative price into the cart.
///
/// ## Examples
///
/// ```
/// use gomarket_core::UnitPrice;
/// use rust_decimal::Decimal;
///
/// let price = UnitPrice::new(Decimal::new(1999, 2)).unwrap();
/// assert_eq!(price.to_string(), "19.99");
///
/// assert!(UnitPrice::new(Decimal::new(-1, 0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct UnitPrice(Decimal);

impl UnitPrice {
    /// A zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new unit price.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `amount` is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount < Decimal::ZERO {
            return Err(PriceError::Negative { amount });
        }
        Ok(Self(amount))
    }

    /// Returns the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for UnitPrice {
    type Error = PriceError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<UnitPrice> for Decimal {
    fn from(price: UnitPrice) -> Self {
        price.0
    }
}

impl From<u32> for UnitPrice {
    fn from(whole_units: u32) -> Self {
        Self(Decimal::from(whole_units))
    }
}

impl fmt::Display for UnitPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_non_negative() {
        assert!(UnitPrice::new(Decimal::ZERO).is_ok());
        assert!(UnitPrice::new(Decimal::new(2050, 2)).is_ok());
    }

    #[test]
    fn test_new_negative_rejected() {
        let err = UnitPrice::new(Decimal::new(-1, 2)).unwrap_err();
        assert!(matches!(err, PriceError::Negative { .. }));
    }

    #[test]
    fn test_serde_roundtrip() {
        let price = UnitPrice::new(Decimal::new(1999, 2)).unwrap();
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "\"19.99\"");

        let parsed: UnitPrice = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, price);
    }

    #[test]
    fn test_deserialize_rejects_negative() {
        let result = serde_json::from_str::<UnitPrice>("\"-5.00\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_whole_units() {
        let price = UnitPrice::from(20);
        assert_eq!(price.amount(), Decimal::from(20));
    }
}
