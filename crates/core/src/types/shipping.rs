//! Shipping quote returned by a carrier.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Price and delivery estimate for shipping to a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingQuote {
    pub cost: Decimal,
    pub estimated_days: u32,
}

impl ShippingQuote {
    /// Create a new quote.
    #[must_use]
    pub const fn new(cost: Decimal, estimated_days: u32) -> Self {
        Self {
            cost,
            estimated_days,
        }
    }
}
