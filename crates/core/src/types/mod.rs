//! Value types for shop-rules.
//!
//! Plain records produced and consumed by the rules and storefront modules.
//! None of them carry state beyond the call that builds them.

pub mod coupon;
pub mod email;
pub mod order;
pub mod price;
pub mod shipping;
pub mod status;
pub mod validation;

pub use coupon::Coupon;
pub use email::{Email, EmailError};
pub use order::{ChargeResult, Order, OrderError, OrderErrorCode, OrderResult, PaymentMethod};
pub use price::{CurrencyCode, Price};
pub use shipping::ShippingQuote;
pub use status::ChargeStatus;
pub use validation::ValidationResult;
