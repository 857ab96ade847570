//! Integration tests for the basics and business rules.
//!
//! These go through the public core API only, including the loosely typed
//! entry points fed from JSON payloads.

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use serde_json::{Value, json};
use shop_rules_core::basics::{calculate_average, factorial, fizz_buzz, max};
use shop_rules_core::rules::{self, DiscountError, DrivingError, untyped};
use shop_rules_core::{Coupon, ValidationResult};

// =============================================================================
// Basics
// =============================================================================

#[test]
fn test_basics_smoke() {
    assert_eq!(max(3, 7), 7);
    assert_eq!(
        (1..=15).map(fizz_buzz).collect::<Vec<_>>().last().unwrap(),
        "FizzBuzz"
    );
    assert!((calculate_average(&[2.0, 4.0]) - 3.0).abs() < f64::EPSILON);
    assert_eq!(factorial(5), Some(120));
    assert_eq!(factorial(-3), None);
}

// =============================================================================
// Coupons
// =============================================================================

#[test]
fn test_coupon_catalog_serializes_as_sequence() {
    let coupons = rules::get_coupons();
    let value = serde_json::to_value(&coupons).unwrap();

    let entries = value.as_array().unwrap();
    assert!(!entries.is_empty());
    for entry in entries {
        assert!(entry["code"].is_string());
        let discount = entry["discount"].as_f64().unwrap();
        assert!(discount > 0.0 && discount <= 1.0, "{entry}");
    }

    let parsed: Vec<Coupon> = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, coupons);
}

#[test]
fn test_every_catalog_coupon_applies() {
    let price = Decimal::from(10);
    for coupon in rules::get_coupons() {
        let discounted = rules::calculate_discount(price, &coupon.code).unwrap();
        assert!(discounted < price, "{}", coupon.code);
        assert!(discounted >= Decimal::ZERO, "{}", coupon.code);
    }
}

#[test]
fn test_calculate_discount_from_payload() {
    let payload = json!({ "price": 10, "code": "SAVE20" });
    assert_eq!(
        untyped::calculate_discount(&payload["price"], &payload["code"]),
        Ok(Decimal::from(8))
    );

    let payload = json!({ "price": "10", "code": "SAVE10" });
    assert_eq!(
        untyped::calculate_discount(&payload["price"], &payload["code"]),
        Err(DiscountError::InvalidPrice)
    );

    let payload = json!({ "price": 1e30, "code": "SAVE10" });
    assert_eq!(
        untyped::calculate_discount(&payload["price"], &payload["code"]),
        Err(DiscountError::PriceOutOfRange)
    );

    // missing fields index to null
    let payload = json!({});
    assert_eq!(
        untyped::calculate_discount(&payload["price"], &payload["code"]),
        Err(DiscountError::InvalidPrice)
    );
}

// =============================================================================
// Sign-up validation
// =============================================================================

#[test]
fn test_validate_user_input_from_payload() {
    let payload = json!({ "username": "glc", "age": 18 });
    assert_eq!(
        untyped::validate_user_input(&payload["username"], &payload["age"]),
        ValidationResult::Success
    );

    let payload = json!({ "username": 1, "age": "18" });
    let message = untyped::validate_user_input(&payload["username"], &payload["age"]).to_string();
    assert!(message.contains("Invalid username"));
    assert!(message.contains("Invalid age"));
}

#[test]
fn test_typed_and_untyped_validation_agree() {
    for (username, age) in [("glc", 18), ("gl", 18), ("glc", 17), ("", 101)] {
        assert_eq!(
            rules::validate_user_input(username, age),
            untyped::validate_user_input(&json!(username), &json!(age)),
            "{username:?} {age}"
        );
    }
}

#[test]
fn test_is_valid_username_null_and_missing() {
    let payload = json!({ "name": null });
    assert!(!untyped::is_valid_username(&payload["name"]));
    assert!(!untyped::is_valid_username(&payload["missing"]));
    assert!(!untyped::is_valid_username(&Value::Null));
}

// =============================================================================
// Driving age
// =============================================================================

#[test]
fn test_can_drive_through_both_entry_points() {
    assert_eq!(rules::can_drive(17, "UK"), Ok(true));
    assert_eq!(untyped::can_drive(&json!(17), &json!("UK")), Ok(true));
    assert_eq!(untyped::can_drive(&json!("30"), &json!("UK")), Ok(false));

    let err = untyped::can_drive(&json!(30), &json!("FR")).unwrap_err();
    assert!(matches!(err, DrivingError::InvalidCountryCode(code) if code == "FR"));
}

// =============================================================================
// fetch_data
// =============================================================================

#[tokio::test]
async fn test_fetch_data_resolves() {
    let data = rules::fetch_data(true).await.unwrap();
    assert!(!data.is_empty());
}

#[tokio::test]
async fn test_fetch_data_rejects() {
    match rules::fetch_data(false).await {
        Ok(data) => panic!("expected failure, got {data:?}"),
        Err(err) => assert!(err.to_string().contains("Error")),
    }
}
