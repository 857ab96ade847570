//! shop-rules storefront library.
//!
//! Store-front operations (currency display, shipping quotes, page renders,
//! order submission, sign-up, login, opening hours, holiday discounts), each
//! delegating to one injected collaborator.
//!
//! # Example
//!
//! ```rust,ignore
//! let services = Collaborators::with_defaults(rates, shipping, payments, mailer);
//! let storefront = Storefront::from_env(services)?;
//!
//! if storefront.sign_up("toot@gmail.com").await? {
//!     // welcome email is on its way
//! }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod collaborators;
pub mod config;
pub mod error;
pub mod services;
pub mod storefront;

pub use collaborators::{
    Analytics, Clock, CodeGenerator, CollaboratorError, ExchangeRates, Mailer, PaymentGateway,
    ShippingQuotes,
};
pub use config::{ConfigError, StoreConfig};
pub use error::{Result, StorefrontError};
pub use storefront::{Collaborators, HOME_PAGE, Storefront, WELCOME_MESSAGE};
