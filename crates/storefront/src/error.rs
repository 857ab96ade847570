//! Error type for storefront operations.

use rust_decimal::Decimal;
use shop_rules_core::{CurrencyCode, EmailError};
use thiserror::Error;

use crate::collaborators::CollaboratorError;

/// Storefront operation error.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// A collaborator call failed.
    #[error("Collaborator error: {0}")]
    Collaborator(#[from] CollaboratorError),

    /// The email address was rejected before any collaborator was called.
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// A converted amount does not fit in a `Decimal`.
    #[error("Amount {amount} at rate {rate} overflows in {currency}")]
    AmountOverflow {
        amount: Decimal,
        rate: Decimal,
        currency: CurrencyCode,
    },
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;
