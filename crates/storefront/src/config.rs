//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `STORE_OPENING_HOUR` - First hour the store is online (default: 8)
//! - `STORE_CLOSING_HOUR` - Hour the store goes offline (default: 20)
//! - `STORE_HOLIDAY_DISCOUNT` - Discount fraction on December 25 (default: 0.2)

use rust_decimal::Decimal;
use thiserror::Error;

const DEFAULT_OPENING_HOUR: u32 = 8;
const DEFAULT_CLOSING_HOUR: u32 = 20;
const DEFAULT_HOLIDAY_DISCOUNT: &str = "0.2";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Invalid opening hours: {opening}..{closing} (need 0 <= opening < closing <= 24)")]
    InvalidHours { opening: u32, closing: u32 },
    #[error("Invalid holiday discount {0}: must be between 0 and 1")]
    InvalidDiscount(Decimal),
}

/// Storefront business configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Hour of day the store comes online (inclusive).
    pub opening_hour: u32,
    /// Hour of day the store goes offline (exclusive).
    pub closing_hour: u32,
    /// Fraction taken off on December 25.
    pub holiday_discount: Decimal,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            opening_hour: DEFAULT_OPENING_HOUR,
            closing_hour: DEFAULT_CLOSING_HOUR,
            holiday_discount: Decimal::new(2, 1),
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable does not parse or the values are
    /// out of range.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its
    /// value.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable does not parse or the values are
    /// out of range.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let opening_hour = parse_or_default(
            &lookup,
            "STORE_OPENING_HOUR",
            &DEFAULT_OPENING_HOUR.to_string(),
        )?;
        let closing_hour = parse_or_default(
            &lookup,
            "STORE_CLOSING_HOUR",
            &DEFAULT_CLOSING_HOUR.to_string(),
        )?;
        let holiday_discount =
            parse_or_default(&lookup, "STORE_HOLIDAY_DISCOUNT", DEFAULT_HOLIDAY_DISCOUNT)?;

        let config = Self {
            opening_hour,
            closing_hour,
            holiday_discount,
        };
        config.validate()?;

        tracing::debug!(
            opening_hour = config.opening_hour,
            closing_hour = config.closing_hour,
            holiday_discount = %config.holiday_discount,
            "Loaded store configuration"
        );
        Ok(config)
    }

    /// Check that the hours form a non-empty window within a day and the
    /// discount is a fraction.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidHours` or `ConfigError::InvalidDiscount`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.opening_hour >= self.closing_hour || self.closing_hour > 24 {
            return Err(ConfigError::InvalidHours {
                opening: self.opening_hour,
                closing: self.closing_hour,
            });
        }

        if self.holiday_discount < Decimal::ZERO || self.holiday_discount > Decimal::ONE {
            return Err(ConfigError::InvalidDiscount(self.holiday_discount));
        }

        Ok(())
    }
}

/// Parse a variable through `lookup`, falling back to `default` when unset.
fn parse_or_default<F, T>(lookup: &F, key: &str, default: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let value = lookup(key).unwrap_or_else(|| default.to_string());
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}
