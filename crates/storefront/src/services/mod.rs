//! Default collaborators for running the storefront outside of tests.
//!
//! # Services
//!
//! - `analytics` - Page views recorded as tracing events
//! - `clock` - Local wall-clock time
//! - `security` - Random six-digit login codes
//!
//! Payments, shipping, exchange rates and email have no default: they are
//! always supplied by the surrounding application.

pub mod analytics;
pub mod clock;
pub mod security;

pub use analytics::TracingAnalytics;
pub use clock::SystemClock;
pub use security::RandomCodeGenerator;
