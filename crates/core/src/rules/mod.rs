//! Business rules: coupons, sign-up validation, price ranges and driving age.
//!
//! Every function here is pure apart from [`fetch_data`], which only stands in
//! for a remote call. Failures that the caller is expected to handle come back
//! as typed errors whose messages keep the wording shown to users
//! (`Invalid price`, `Invalid country code`, ...).
//!
//! Inputs arriving as loosely typed JSON go through [`untyped`] first.

pub mod untyped;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::{Coupon, ValidationResult};

/// Coupon catalog as `(code, percent off)`.
const COUPONS: &[(&str, i64)] = &[("SAVE10", 10), ("SAVE20", 20)];

/// Minimum legal driving age per country code.
const LEGAL_DRIVING_AGE: &[(&str, u32)] = &[("US", 16), ("UK", 17)];

/// Nobody older than this may drive, whatever the country.
pub const MAX_DRIVING_AGE: u32 = 100;

pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MAX_USERNAME_LENGTH: usize = 255;
pub const MIN_AGE: f64 = 18.0;
pub const MAX_AGE: f64 = 100.0;

/// Bounds for [`is_valid_username`], stricter than sign-up validation.
pub const MIN_HANDLE_LENGTH: usize = 5;
pub const MAX_HANDLE_LENGTH: usize = 15;

/// Errors from [`calculate_discount`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiscountError {
    /// Price is not a positive number.
    #[error("Invalid price")]
    InvalidPrice,
    /// Price is a positive number too large to represent exactly.
    #[error("Price out of range")]
    PriceOutOfRange,
    /// Discount code is not a string.
    #[error("Invalid code")]
    InvalidCode,
}

/// Errors from [`can_drive`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrivingError {
    #[error("Invalid country code: {0}")]
    InvalidCountryCode(String),
}

/// Errors from [`fetch_data`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Error: failed to fetch data")]
    Unavailable,
}

/// The full coupon catalog.
#[must_use]
pub fn get_coupons() -> Vec<Coupon> {
    COUPONS
        .iter()
        .map(|&(code, percent)| Coupon::new(code, Decimal::new(percent, 2)))
        .collect()
}

/// Price after applying the coupon named `code`.
///
/// An unknown code leaves the price unchanged.
///
/// ```
/// use rust_decimal::Decimal;
/// use shop_rules_core::rules::calculate_discount;
///
/// let ten = Decimal::from(10);
/// assert_eq!(calculate_discount(ten, "SAVE10"), Ok(Decimal::from(9)));
/// assert_eq!(calculate_discount(ten, "SAVE1"), Ok(ten));
/// ```
///
/// # Errors
///
/// Returns [`DiscountError::InvalidPrice`] if `price` is zero or negative.
pub fn calculate_discount(price: Decimal, code: &str) -> Result<Decimal, DiscountError> {
    if price <= Decimal::ZERO {
        return Err(DiscountError::InvalidPrice);
    }

    Ok(get_coupons()
        .iter()
        .find(|coupon| coupon.code == code)
        .map_or(price, |coupon| coupon.apply(price)))
}

/// Check a sign-up form.
///
/// The username must be 3 to 255 characters and the age 18 to 100.
#[must_use]
pub fn validate_user_input(username: &str, age: u32) -> ValidationResult {
    ValidationResult::from_checks(username_fits(username), age_fits(f64::from(age)))
}

/// Whether `price` lies in `[min, max]`.
#[must_use]
pub fn is_price_in_range(price: Decimal, min: Decimal, max: Decimal) -> bool {
    price >= min && price <= max
}

/// Whether `name` is a usable handle: 5 to 15 characters.
#[must_use]
pub fn is_valid_username(name: &str) -> bool {
    (MIN_HANDLE_LENGTH..=MAX_HANDLE_LENGTH).contains(&name.chars().count())
}

/// Whether someone aged `age` may drive in `country_code`.
///
/// # Errors
///
/// Returns [`DrivingError::InvalidCountryCode`] if the country is unknown.
pub fn can_drive(age: u32, country_code: &str) -> Result<bool, DrivingError> {
    let min_age = legal_driving_age(country_code)
        .ok_or_else(|| DrivingError::InvalidCountryCode(country_code.to_string()))?;

    Ok((min_age..=MAX_DRIVING_AGE).contains(&age))
}

/// Minimum driving age for `country_code`, if the country is known.
#[must_use]
pub fn legal_driving_age(country_code: &str) -> Option<u32> {
    LEGAL_DRIVING_AGE
        .iter()
        .find(|(code, _)| *code == country_code)
        .map(|&(_, age)| age)
}

/// Stand-in for a remote fetch.
///
/// # Errors
///
/// Returns [`FetchError::Unavailable`] when `succeed` is false.
#[allow(clippy::unused_async)]
pub async fn fetch_data(succeed: bool) -> Result<Vec<u32>, FetchError> {
    if succeed {
        Ok(vec![1, 2, 3])
    } else {
        Err(FetchError::Unavailable)
    }
}

fn username_fits(username: &str) -> bool {
    (MIN_USERNAME_LENGTH..=MAX_USERNAME_LENGTH).contains(&username.chars().count())
}

fn age_fits(age: f64) -> bool {
    (MIN_AGE..=MAX_AGE).contains(&age)
}
