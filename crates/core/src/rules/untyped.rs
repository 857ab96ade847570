//! Rule entry points for loosely typed input.
//!
//! Form posts and JSON payloads can carry a username as a number or an age as
//! a string. These wrappers take raw [`serde_json::Value`]s, check the type of
//! every argument explicitly, and only then delegate to the typed rules in
//! [`crate::rules`]. A value of the wrong type is treated exactly like an
//! out-of-range value of the right type.

use rust_decimal::Decimal;
use serde_json::Value;

use super::{
    DiscountError, DrivingError, MAX_DRIVING_AGE, age_fits, legal_driving_age, username_fits,
};
use crate::types::ValidationResult;

/// [`super::calculate_discount`] for raw input.
///
/// # Errors
///
/// Returns [`DiscountError::InvalidPrice`] if `price` is not a positive
/// number, [`DiscountError::PriceOutOfRange`] if it is positive but does not
/// fit in a `Decimal`, and [`DiscountError::InvalidCode`] if `code` is not a
/// string.
pub fn calculate_discount(price: &Value, code: &Value) -> Result<Decimal, DiscountError> {
    let price = as_decimal(price)?;
    if price <= Decimal::ZERO {
        return Err(DiscountError::InvalidPrice);
    }
    let code = code.as_str().ok_or(DiscountError::InvalidCode)?;

    super::calculate_discount(price, code)
}

/// [`super::validate_user_input`] for raw input.
#[must_use]
pub fn validate_user_input(username: &Value, age: &Value) -> ValidationResult {
    let username_ok = username.as_str().is_some_and(username_fits);
    let age_ok = age.as_f64().is_some_and(age_fits);

    ValidationResult::from_checks(username_ok, age_ok)
}

/// [`super::is_valid_username`] for raw input. Anything but a string is invalid.
#[must_use]
pub fn is_valid_username(name: &Value) -> bool {
    name.as_str().is_some_and(super::is_valid_username)
}

/// [`super::can_drive`] for raw input.
///
/// A non-numeric age cannot drive.
///
/// # Errors
///
/// Returns [`DrivingError::InvalidCountryCode`] if `country_code` is not a
/// string naming a known country.
pub fn can_drive(age: &Value, country_code: &Value) -> Result<bool, DrivingError> {
    let min_age = country_code
        .as_str()
        .and_then(legal_driving_age)
        .ok_or_else(|| DrivingError::InvalidCountryCode(display_raw(country_code)))?;

    Ok(age
        .as_f64()
        .is_some_and(|age| age >= f64::from(min_age) && age <= f64::from(MAX_DRIVING_AGE)))
}

fn as_decimal(value: &Value) -> Result<Decimal, DiscountError> {
    let Value::Number(number) = value else {
        return Err(DiscountError::InvalidPrice);
    };
    let text = number.to_string();
    text.parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|_| match number.as_f64() {
            Some(n) if n > 0.0 => DiscountError::PriceOutOfRange,
            _ => DiscountError::InvalidPrice,
        })
}

fn display_raw(value: &Value) -> String {
    value
        .as_str()
        .map_or_else(|| value.to_string(), ToString::to_string)
}
