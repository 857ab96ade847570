//! shop-rules core - value types and pure business rules.
//!
//! This crate provides everything that does not need an outside collaborator:
//! - `storefront` - builds on these types and delegates to injected services
//! - `integration-tests` - drives both crates end to end
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! clocks, no collaborators. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`basics`] - max, fizz-buzz, average, factorial
//! - [`rules`] - coupons, sign-up validation, price ranges, driving age
//! - [`types`] - coupons, orders, prices, emails, shipping quotes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod basics;
pub mod rules;
pub mod types;

pub use types::*;
