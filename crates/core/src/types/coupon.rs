//! Coupon catalog entries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A discount code and the fraction it takes off the price.
///
/// `discount` is always in `(0, 1]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coupon {
    /// Code the customer enters at checkout (e.g. `SAVE10`).
    pub code: String,
    /// Fraction of the price removed, `0.1` for ten percent.
    #[serde(with = "rust_decimal::serde::float")]
    pub discount: Decimal,
}

impl Coupon {
    /// Create a new coupon.
    #[must_use]
    pub fn new(code: impl Into<String>, discount: Decimal) -> Self {
        Self {
            code: code.into(),
            discount,
        }
    }

    /// Apply this coupon to `price`.
    #[must_use]
    pub fn apply(&self, price: Decimal) -> Decimal {
        price * (Decimal::ONE - self.discount)
    }
}
