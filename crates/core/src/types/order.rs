//! Order submission types.
//!
//! These model the payload handed to the payment gateway and the outcome
//! reported back to the caller.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::status::ChargeStatus;

/// Errors that can occur when building an [`Order`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("order total cannot be negative: {0}")]
    NegativeTotal(Decimal),
}

/// An order ready to be paid for.
///
/// The total is never negative; both [`Order::new`] and deserialization
/// reject one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "OrderPayload")]
pub struct Order {
    total_amount: Decimal,
}

impl Order {
    /// Create a new order.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::NegativeTotal`] if `total_amount` is below zero.
    pub fn new(total_amount: Decimal) -> Result<Self, OrderError> {
        if total_amount < Decimal::ZERO {
            return Err(OrderError::NegativeTotal(total_amount));
        }
        Ok(Self { total_amount })
    }

    /// Amount to charge.
    #[must_use]
    pub const fn total_amount(&self) -> Decimal {
        self.total_amount
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderPayload {
    total_amount: Decimal,
}

impl TryFrom<OrderPayload> for Order {
    type Error = OrderError;

    fn try_from(payload: OrderPayload) -> Result<Self, Self::Error> {
        Self::new(payload.total_amount)
    }
}

/// Card used to pay for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    pub card_number: u64,
}

impl PaymentMethod {
    /// Create a new payment method.
    #[must_use]
    pub const fn new(card_number: u64) -> Self {
        Self { card_number }
    }
}

/// What the payment gateway answered for a charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeResult {
    pub status: ChargeStatus,
}

impl ChargeResult {
    /// A successful charge.
    #[must_use]
    pub const fn success() -> Self {
        Self {
            status: ChargeStatus::Success,
        }
    }

    /// A declined charge.
    #[must_use]
    pub const fn failed() -> Self {
        Self {
            status: ChargeStatus::Failed,
        }
    }
}

/// Machine-readable reason an order was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderErrorCode {
    /// The payment gateway declined the charge.
    PaymentError,
}

/// Outcome of submitting an order.
///
/// Serializes to `{"success":true}` or
/// `{"success":false,"error":"payment_error"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<OrderErrorCode>,
}

impl OrderResult {
    /// The order was paid for.
    #[must_use]
    pub const fn accepted() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    /// The order was not paid for.
    #[must_use]
    pub const fn rejected(error: OrderErrorCode) -> Self {
        Self {
            success: false,
            error: Some(error),
        }
    }
}
