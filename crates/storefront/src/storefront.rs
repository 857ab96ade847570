//! The storefront service.
//!
//! Every operation delegates to exactly one collaborator (plus the clock for
//! the time-based checks) and keeps no state between calls.

use std::sync::Arc;

use chrono::{Datelike, Timelike};
use rust_decimal::Decimal;
use shop_rules_core::{
    CurrencyCode, Email, Order, OrderErrorCode, OrderResult, PaymentMethod, Price,
};

use crate::collaborators::{
    Analytics, Clock, CodeGenerator, ExchangeRates, Mailer, PaymentGateway, ShippingQuotes,
};
use crate::config::{ConfigError, StoreConfig};
use crate::error::{Result, StorefrontError};
use crate::services::{RandomCodeGenerator, SystemClock, TracingAnalytics};

/// Path reported to analytics by [`Storefront::render_page`].
pub const HOME_PAGE: &str = "/home";

/// Body of the email sent after a successful sign-up.
pub const WELCOME_MESSAGE: &str = "Welcome aboard!";

const PAGE_CONTENT: &str = "<div>content</div>";
const HOLIDAY_MONTH: u32 = 12;
const HOLIDAY_DAY: u32 = 25;

/// The collaborators a [`Storefront`] delegates to.
#[derive(Clone)]
pub struct Collaborators {
    pub rates: Arc<dyn ExchangeRates>,
    pub shipping: Arc<dyn ShippingQuotes>,
    pub analytics: Arc<dyn Analytics>,
    pub payments: Arc<dyn PaymentGateway>,
    pub mailer: Arc<dyn Mailer>,
    pub codes: Arc<dyn CodeGenerator>,
    pub clock: Arc<dyn Clock>,
}

impl Collaborators {
    /// Wire the external services, using the built-in analytics reporter,
    /// code generator and system clock for the rest.
    #[must_use]
    pub fn with_defaults(
        rates: Arc<dyn ExchangeRates>,
        shipping: Arc<dyn ShippingQuotes>,
        payments: Arc<dyn PaymentGateway>,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        Self {
            rates,
            shipping,
            analytics: Arc::new(TracingAnalytics),
            payments,
            mailer,
            codes: Arc::new(RandomCodeGenerator),
            clock: Arc::new(SystemClock),
        }
    }
}

/// Store-front operations over injected collaborators.
///
/// Cheap to clone; clones share the same collaborators.
#[derive(Clone)]
pub struct Storefront {
    services: Collaborators,
    config: StoreConfig,
}

impl Storefront {
    /// Create a storefront with the given collaborators and configuration.
    #[must_use]
    pub fn new(services: Collaborators, config: StoreConfig) -> Self {
        Self { services, config }
    }

    /// Create a storefront configured from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a `STORE_*` variable is malformed or the resulting
    /// configuration is invalid.
    pub fn from_env(services: Collaborators) -> std::result::Result<Self, ConfigError> {
        Ok(Self::new(services, StoreConfig::from_env()?))
    }

    /// The configuration this storefront was built with.
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Convert `price` into `currency` at the current exchange rate.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::AmountOverflow`] if the converted amount
    /// does not fit in a `Decimal`.
    pub fn price_in_currency(&self, price: Decimal, currency: CurrencyCode) -> Result<Price> {
        let rate = self.services.rates.rate(currency);
        tracing::debug!(currency = %currency, rate = %rate, "Exchange rate");

        let amount = price
            .checked_mul(rate)
            .ok_or(StorefrontError::AmountOverflow {
                amount: price,
                rate,
                currency,
            })?;
        Ok(Price::new(amount, currency))
    }

    /// Human-readable shipping quote for `destination`.
    #[must_use]
    pub fn shipping_info(&self, destination: &str) -> String {
        match self.services.shipping.quote(destination) {
            Some(quote) => format!(
                "Shipping Cost: ${} ({} Days)",
                quote.cost, quote.estimated_days
            ),
            None => {
                tracing::debug!(destination = %destination, "No shipping quote");
                "Shipping Unavailable".to_string()
            }
        }
    }

    /// Render the home page, reporting one page view.
    #[allow(clippy::unused_async)]
    pub async fn render_page(&self) -> String {
        self.services.analytics.track(HOME_PAGE);
        PAGE_CONTENT.to_string()
    }

    /// Charge `payment_method` for `order`.
    ///
    /// A declined charge is an ordinary outcome and comes back as a rejected
    /// [`OrderResult`].
    ///
    /// # Errors
    ///
    /// Returns an error if the payment gateway call itself fails.
    pub async fn submit_order(
        &self,
        order: &Order,
        payment_method: &PaymentMethod,
    ) -> Result<OrderResult> {
        let charge = self
            .services
            .payments
            .charge(payment_method, order.total_amount())
            .await?;

        if !charge.status.is_success() {
            tracing::warn!(
                amount = %order.total_amount(),
                status = %charge.status,
                "Payment declined"
            );
            return Ok(OrderResult::rejected(OrderErrorCode::PaymentError));
        }

        tracing::info!(amount = %order.total_amount(), "Order accepted");
        Ok(OrderResult::accepted())
    }

    /// Register `email` and send a welcome message.
    ///
    /// Returns `false` without contacting anyone if the address is malformed.
    ///
    /// # Errors
    ///
    /// Returns an error if the welcome email cannot be sent.
    pub async fn sign_up(&self, email: &str) -> Result<bool> {
        let Ok(email) = Email::parse(email) else {
            tracing::warn!(email = %email, "Sign-up rejected: invalid email");
            return Ok(false);
        };

        self.services.mailer.send(&email, WELCOME_MESSAGE).await?;
        tracing::info!(to = %email, "Welcome email sent");
        Ok(true)
    }

    /// Email a fresh one-time login code to `email`.
    ///
    /// # Errors
    ///
    /// Returns an error if the address is malformed or the email cannot be
    /// sent.
    pub async fn login(&self, email: &str) -> Result<()> {
        let email = Email::parse(email)?;
        let code = self.services.codes.generate();

        self.services.mailer.send(&email, &code.to_string()).await?;
        tracing::info!(to = %email, "Login code sent");
        Ok(())
    }

    /// Whether the store is within opening hours right now.
    #[must_use]
    pub fn is_online(&self) -> bool {
        let hour = self.services.clock.now().hour();
        (self.config.opening_hour..self.config.closing_hour).contains(&hour)
    }

    /// Discount fraction for today: the holiday discount on December 25,
    /// zero otherwise.
    #[must_use]
    pub fn get_discount(&self) -> Decimal {
        let today = self.services.clock.now().date();
        if today.month() == HOLIDAY_MONTH && today.day() == HOLIDAY_DAY {
            self.config.holiday_discount
        } else {
            Decimal::ZERO
        }
    }
}
