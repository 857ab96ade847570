//! Integration tests for shop-rules.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shop-rules-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `rules` - Basics and business rules through the public core API
//! - `storefront` - Storefront operations against recording fakes
//!
//! This library holds the shared fakes. Each fake records what it was asked
//! so tests can assert on calls the way they would on a mock.

#![allow(clippy::unwrap_used)] // test support: a poisoned lock is a test failure

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use shop_rules_core::{ChargeResult, CurrencyCode, Email, PaymentMethod, ShippingQuote};
use shop_rules_storefront::{
    Analytics, Clock, CodeGenerator, CollaboratorError, Collaborators, ExchangeRates, Mailer,
    PaymentGateway, ShippingQuotes, StoreConfig, Storefront,
};

/// Install a test-writer tracing subscriber once per test binary.
///
/// Honors `RUST_LOG`; silent by default.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Parse `YYYY-MM-DD HH:MM` into a local timestamp.
///
/// # Panics
///
/// Panics if `timestamp` is not in that format.
#[must_use]
pub fn at(timestamp: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M").unwrap()
}

// =============================================================================
// Fakes
// =============================================================================

/// Exchange rates with one rate for every currency.
#[derive(Debug)]
pub struct FakeRates {
    rate: Mutex<Decimal>,
    pub requests: Mutex<Vec<CurrencyCode>>,
}

impl FakeRates {
    #[must_use]
    pub const fn new(rate: Decimal) -> Self {
        Self {
            rate: Mutex::new(rate),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn set_rate(&self, rate: Decimal) {
        *self.rate.lock().unwrap() = rate;
    }
}

impl ExchangeRates for FakeRates {
    fn rate(&self, currency: CurrencyCode) -> Decimal {
        self.requests.lock().unwrap().push(currency);
        *self.rate.lock().unwrap()
    }
}

/// Carrier that answers every destination with the same quote.
#[derive(Debug, Default)]
pub struct FakeShipping {
    quote: Mutex<Option<ShippingQuote>>,
    pub destinations: Mutex<Vec<String>>,
}

impl FakeShipping {
    pub fn set_quote(&self, quote: Option<ShippingQuote>) {
        *self.quote.lock().unwrap() = quote;
    }
}

impl ShippingQuotes for FakeShipping {
    fn quote(&self, destination: &str) -> Option<ShippingQuote> {
        self.destinations
            .lock()
            .unwrap()
            .push(destination.to_string());
        *self.quote.lock().unwrap()
    }
}

/// Analytics reporter that remembers every page view.
#[derive(Debug, Default)]
pub struct RecordingAnalytics {
    pub pages: Mutex<Vec<String>>,
}

impl Analytics for RecordingAnalytics {
    fn track(&self, page_path: &str) {
        self.pages.lock().unwrap().push(page_path.to_string());
    }
}

/// Payment gateway with a scripted answer.
///
/// `None` makes the call itself fail.
#[derive(Debug)]
pub struct FakePayments {
    answer: Mutex<Option<ChargeResult>>,
    pub charges: Mutex<Vec<(PaymentMethod, Decimal)>>,
}

impl Default for FakePayments {
    fn default() -> Self {
        Self {
            answer: Mutex::new(Some(ChargeResult::success())),
            charges: Mutex::new(Vec::new()),
        }
    }
}

impl FakePayments {
    pub fn set_answer(&self, answer: Option<ChargeResult>) {
        *self.answer.lock().unwrap() = answer;
    }
}

#[async_trait]
impl PaymentGateway for FakePayments {
    async fn charge(
        &self,
        method: &PaymentMethod,
        amount: Decimal,
    ) -> Result<ChargeResult, CollaboratorError> {
        self.charges.lock().unwrap().push((*method, amount));
        self.answer
            .lock()
            .unwrap()
            .ok_or_else(|| CollaboratorError::new("payment", "gateway unreachable"))
    }
}

/// Mailer that remembers `(to, body)` for every message.
#[derive(Debug, Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<(String, String)>>,
    fail: Mutex<bool>,
}

impl RecordingMailer {
    /// Make every following send fail.
    pub fn fail_sends(&self) {
        *self.fail.lock().unwrap() = true;
    }

    #[must_use]
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, to: &Email, body: &str) -> Result<(), CollaboratorError> {
        if *self.fail.lock().unwrap() {
            return Err(CollaboratorError::new("email", "smtp relay refused"));
        }
        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), body.to_string()));
        Ok(())
    }
}

/// Code generator that counts up from a seed and remembers what it issued.
#[derive(Debug)]
pub struct SequenceCodes {
    next: Mutex<u32>,
    pub issued: Mutex<Vec<u32>>,
}

impl SequenceCodes {
    #[must_use]
    pub const fn starting_at(seed: u32) -> Self {
        Self {
            next: Mutex::new(seed),
            issued: Mutex::new(Vec::new()),
        }
    }
}

impl CodeGenerator for SequenceCodes {
    fn generate(&self) -> u32 {
        let mut next = self.next.lock().unwrap();
        let code = *next;
        *next += 1;
        self.issued.lock().unwrap().push(code);
        code
    }
}

/// Clock the test can move.
#[derive(Debug)]
pub struct FakeClock {
    now: Mutex<NaiveDateTime>,
}

impl FakeClock {
    #[must_use]
    pub const fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Set the time using `YYYY-MM-DD HH:MM`.
    pub fn set(&self, timestamp: &str) {
        *self.now.lock().unwrap() = at(timestamp);
    }
}

impl Clock for FakeClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock().unwrap()
    }
}

// =============================================================================
// Test context
// =============================================================================

/// A storefront wired to fakes, with handles to every fake.
pub struct TestContext {
    pub rates: Arc<FakeRates>,
    pub shipping: Arc<FakeShipping>,
    pub analytics: Arc<RecordingAnalytics>,
    pub payments: Arc<FakePayments>,
    pub mailer: Arc<RecordingMailer>,
    pub codes: Arc<SequenceCodes>,
    pub clock: Arc<FakeClock>,
    pub storefront: Storefront,
}

impl TestContext {
    /// Storefront with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    #[must_use]
    pub fn with_config(config: StoreConfig) -> Self {
        init_tracing();

        let rates = Arc::new(FakeRates::new(Decimal::ONE));
        let shipping = Arc::new(FakeShipping::default());
        let analytics = Arc::new(RecordingAnalytics::default());
        let payments = Arc::new(FakePayments::default());
        let mailer = Arc::new(RecordingMailer::default());
        let codes = Arc::new(SequenceCodes::starting_at(482_913));
        let clock = Arc::new(FakeClock::new(at("2024-01-01 12:00")));

        let storefront = Storefront::new(
            Collaborators {
                rates: rates.clone(),
                shipping: shipping.clone(),
                analytics: analytics.clone(),
                payments: payments.clone(),
                mailer: mailer.clone(),
                codes: codes.clone(),
                clock: clock.clone(),
            },
            config,
        );

        Self {
            rates,
            shipping,
            analytics,
            payments,
            mailer,
            codes,
            clock,
            storefront,
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
