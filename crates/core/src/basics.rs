//! Small arithmetic helpers: max, fizz-buzz, average, factorial.

/// Returns the greater of `a` and `b`.
///
/// When the two compare equal (or are unordered, like `NaN`) `a` is returned.
#[must_use]
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if b > a { b } else { a }
}

/// Classic fizz-buzz classification of `n`.
///
/// ```
/// use shop_rules_core::basics::fizz_buzz;
///
/// assert_eq!(fizz_buzz(15), "FizzBuzz");
/// assert_eq!(fizz_buzz(9), "Fizz");
/// assert_eq!(fizz_buzz(10), "Buzz");
/// assert_eq!(fizz_buzz(7), "7");
/// ```
#[must_use]
pub fn fizz_buzz(n: i64) -> String {
    match (n % 3 == 0, n % 5 == 0) {
        (true, true) => "FizzBuzz".to_string(),
        (true, false) => "Fizz".to_string(),
        (false, true) => "Buzz".to_string(),
        (false, false) => n.to_string(),
    }
}

/// Arithmetic mean of `values`, or `NaN` when there are none.
#[must_use]
pub fn calculate_average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }

    #[allow(clippy::cast_precision_loss)] // slice length will never exceed f64 precision
    let len = values.len() as f64;
    values.iter().sum::<f64>() / len
}

/// `n!` for non-negative `n`.
///
/// Returns `None` for negative input and when the product no longer fits in
/// a `u64` (`n > 20`).
#[must_use]
pub fn factorial(n: i64) -> Option<u64> {
    let n = u64::try_from(n).ok()?;
    (2..=n).try_fold(1_u64, u64::checked_mul)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_first_greater() {
        assert_eq!(max(2, 1), 2);
    }

    #[test]
    fn test_max_second_greater() {
        assert_eq!(max(1, 2), 2);
    }

    #[test]
    fn test_max_equal() {
        assert_eq!(max(1, 1), 1);
        assert!((max(0.5_f64, 0.5) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fizz_buzz() {
        assert_eq!(fizz_buzz(15), "FizzBuzz");
        assert_eq!(fizz_buzz(3), "Fizz");
        assert_eq!(fizz_buzz(5), "Buzz");
        assert_eq!(fizz_buzz(1), "1");
    }

    #[test]
    fn test_fizz_buzz_zero_and_negative() {
        assert_eq!(fizz_buzz(0), "FizzBuzz");
        assert_eq!(fizz_buzz(-9), "Fizz");
        assert_eq!(fizz_buzz(-7), "-7");
    }

    #[test]
    fn test_calculate_average_empty_is_nan() {
        assert!(calculate_average(&[]).is_nan());
    }

    #[test]
    fn test_calculate_average() {
        assert!((calculate_average(&[1.0]) - 1.0).abs() < f64::EPSILON);
        assert!((calculate_average(&[1.0, 2.0]) - 1.5).abs() < f64::EPSILON);
        assert!((calculate_average(&[1.0, 2.0, 3.0]) - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_factorial_base_cases() {
        assert_eq!(factorial(0), Some(1));
        assert_eq!(factorial(1), Some(1));
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(2), Some(2));
        assert_eq!(factorial(3), Some(6));
        assert_eq!(factorial(4), Some(24));
        assert_eq!(factorial(20), Some(2_432_902_008_176_640_000));
    }

    #[test]
    fn test_factorial_negative_is_none() {
        assert_eq!(factorial(-1), None);
    }

    #[test]
    fn test_factorial_overflow_is_none() {
        assert_eq!(factorial(21), None);
    }
}
