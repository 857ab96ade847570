//! External collaborators the storefront delegates to.
//!
//! Each trait is a single narrow capability supplied by the surrounding
//! application. The storefront holds them as `Arc<dyn Trait>` so tests can
//! swap in deterministic fakes.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use shop_rules_core::{ChargeResult, CurrencyCode, Email, PaymentMethod, ShippingQuote};
use thiserror::Error;

/// A collaborator call failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{service} error: {message}")]
pub struct CollaboratorError {
    /// Which collaborator failed (e.g. `payment`, `email`).
    pub service: &'static str,
    pub message: String,
}

impl CollaboratorError {
    /// Create a new collaborator error.
    #[must_use]
    pub fn new(service: &'static str, message: impl Into<String>) -> Self {
        Self {
            service,
            message: message.into(),
        }
    }
}

/// Exchange rate lookup.
pub trait ExchangeRates: Send + Sync {
    /// Multiplier converting the store currency into `currency`.
    fn rate(&self, currency: CurrencyCode) -> Decimal;
}

/// Carrier shipping quotes.
pub trait ShippingQuotes: Send + Sync {
    /// Quote for shipping to `destination`, if the carrier serves it.
    fn quote(&self, destination: &str) -> Option<ShippingQuote>;
}

/// Page-view reporting. Fire-and-forget.
pub trait Analytics: Send + Sync {
    fn track(&self, page_path: &str);
}

/// Card payments.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Charge `amount` to `method`.
    async fn charge(
        &self,
        method: &PaymentMethod,
        amount: Decimal,
    ) -> Result<ChargeResult, CollaboratorError>;
}

/// Outgoing email.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &Email, body: &str) -> Result<(), CollaboratorError>;
}

/// One-time login codes.
pub trait CodeGenerator: Send + Sync {
    fn generate(&self) -> u32;
}

/// Local wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}
