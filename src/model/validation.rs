//! Field validation shared by every product type.
//!
//! Each validated field follows the same policy: coerce the raw input to the
//! target numeric type, then check its range. A failed coercion and an
//! out-of-range value are reported as the same [`ValidationError`] variant, which
//! carries the offending input as text.

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Text format accepted for expiration dates (`DD-MM-YYYY`).
pub const EXPIRATION_FORMAT: &str = "%d-%m-%Y";

/// Errors raised when a product field fails validation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    /// The product id is not a non-negative integer.
    #[error("Product id must be a non-negative integer, got {0:?}")]
    InvalidId(String),

    /// The price is not a positive number.
    #[error("Price must be a positive number, got {0:?}")]
    InvalidPrice(String),

    /// The stock is not a non-negative integer.
    #[error("Stock must be a non-negative integer, got {0:?}")]
    InvalidStock(String),

    /// The warranty is not a non-negative number of months.
    #[error("Warranty must be a non-negative number of months, got {0:?}")]
    InvalidWarranty(String),

    /// The expiration is not a future date in `DD-MM-YYYY` format.
    #[error("Expiration must be a future date in DD-MM-YYYY format, got {0:?}")]
    InvalidExpiration(String),
}

/// Raw input that can be coerced into a validated numeric field.
///
/// Implemented for text (as typed by a user) and for the primitive numeric types,
/// so `Product::new(1, ...)` and `Product::new("1", ...)` go through the same checks.
pub trait RawInput {
    /// Coerces the input to an integer. Text must parse as an integer; finite
    /// floats are truncated toward zero.
    fn to_integer(&self) -> Option<i128>;

    /// Coerces the input to a float.
    fn to_float(&self) -> Option<f64>;

    /// Renders the input for error messages.
    fn describe(&self) -> String;
}

impl RawInput for str {
    fn to_integer(&self) -> Option<i128> {
        self.trim().parse().ok()
    }

    fn to_float(&self) -> Option<f64> {
        self.trim().parse().ok()
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl RawInput for String {
    fn to_integer(&self) -> Option<i128> {
        self.as_str().to_integer()
    }

    fn to_float(&self) -> Option<f64> {
        self.as_str().to_float()
    }

    fn describe(&self) -> String {
        self.clone()
    }
}

impl<T: RawInput + ?Sized> RawInput for &T {
    fn to_integer(&self) -> Option<i128> {
        (**self).to_integer()
    }

    fn to_float(&self) -> Option<f64> {
        (**self).to_float()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

macro_rules! integer_input {
    ($($ty:ty),*) => {
        $(
            impl RawInput for $ty {
                fn to_integer(&self) -> Option<i128> {
                    i128::try_from(*self).ok()
                }

                fn to_float(&self) -> Option<f64> {
                    Some(*self as f64)
                }

                fn describe(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

integer_input!(i32, i64, u32, u64, usize);

impl RawInput for f64 {
    fn to_integer(&self) -> Option<i128> {
        // `as` saturates, so out-of-range floats must be refused before the cast.
        let whole = self.trunc();
        (whole.is_finite() && whole >= i128::MIN as f64 && whole < i128::MAX as f64)
            .then(|| whole as i128)
    }

    fn to_float(&self) -> Option<f64> {
        Some(*self)
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

fn non_negative<T: TryFrom<i128>>(raw: &impl RawInput) -> Option<T> {
    raw.to_integer()
        .filter(|value| *value >= 0)
        .and_then(|value| T::try_from(value).ok())
}

/// Validates a product id: a non-negative integer.
pub fn validate_id(raw: impl RawInput) -> Result<u64, ValidationError> {
    non_negative(&raw).ok_or_else(|| ValidationError::InvalidId(raw.describe()))
}

/// Validates a price: a finite, strictly positive number.
pub fn validate_price(raw: impl RawInput) -> Result<f64, ValidationError> {
    raw.to_float()
        .filter(|price| price.is_finite() && *price > 0.0)
        .ok_or_else(|| ValidationError::InvalidPrice(raw.describe()))
}

/// Validates a stock quantity: a non-negative integer that fits in `u32`.
pub fn validate_stock(raw: impl RawInput) -> Result<u32, ValidationError> {
    non_negative(&raw).ok_or_else(|| ValidationError::InvalidStock(raw.describe()))
}

/// Validates a warranty in months: a non-negative integer that fits in `u32`.
pub fn validate_warranty(raw: impl RawInput) -> Result<u32, ValidationError> {
    non_negative(&raw).ok_or_else(|| ValidationError::InvalidWarranty(raw.describe()))
}

/// Validates an expiration date against the given moment.
///
/// The text must match [`EXPIRATION_FORMAT`] and the date, taken at midnight,
/// must be strictly after `now`. A date equal to today is therefore rejected
/// once the day has started.
pub fn validate_expiration_at(raw: &str, now: NaiveDateTime) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw.trim(), EXPIRATION_FORMAT)
        .ok()
        .filter(|date| date.and_hms_opt(0, 0, 0).is_some_and(|midnight| midnight > now))
        .ok_or_else(|| ValidationError::InvalidExpiration(raw.to_string()))
}

/// Validates an expiration date against the current local time.
pub fn validate_expiration(raw: &str) -> Result<NaiveDate, ValidationError> {
    validate_expiration_at(raw, chrono::Local::now().naive_local())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noon(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_id_accepts_integers_and_integer_text() {
        assert_eq!(validate_id(7u32), Ok(7));
        assert_eq!(validate_id("42"), Ok(42));
        assert_eq!(validate_id(" 3 "), Ok(3));
        assert_eq!(validate_id(0i64), Ok(0));
    }

    #[test]
    fn test_id_rejects_negative_and_non_integer_with_same_kind() {
        assert_eq!(validate_id(-1i64), Err(ValidationError::InvalidId("-1".into())));
        assert_eq!(validate_id("abc"), Err(ValidationError::InvalidId("abc".into())));
        assert_eq!(validate_id("1.5"), Err(ValidationError::InvalidId("1.5".into())));
    }

    #[test]
    fn test_float_input_truncates_for_integer_fields() {
        assert_eq!(validate_stock(12.9), Ok(12));
        assert!(validate_stock(f64::NAN).is_err());
        assert!(validate_id(f64::INFINITY).is_err());
    }

    #[test]
    fn test_large_float_ids_are_exact_or_rejected() {
        assert_eq!(validate_id(1e19), Ok(10_000_000_000_000_000_000));
        assert_eq!(validate_id(9.3e18), Ok(9_300_000_000_000_000_000));
        assert!(validate_id(1e20).is_err());
        assert!(validate_id(1e30).is_err());
        assert!(validate_id(1e300).is_err());
        assert_eq!(validate_id(u64::MAX), Ok(u64::MAX));
        assert!(validate_id("18446744073709551616").is_err());
    }

    #[test]
    fn test_price_must_be_positive_and_finite() {
        assert_eq!(validate_price("19.99"), Ok(19.99));
        assert_eq!(validate_price(5u32), Ok(5.0));
        assert_eq!(validate_price(0.0), Err(ValidationError::InvalidPrice("0".into())));
        assert!(validate_price(-3.5).is_err());
        assert!(validate_price("free").is_err());
        assert!(validate_price("NaN").is_err());
        assert!(validate_price("inf").is_err());
    }

    #[test]
    fn test_stock_and_warranty_reject_values_wider_than_u32() {
        assert!(validate_stock(u64::from(u32::MAX) + 1).is_err());
        assert_eq!(validate_warranty(u32::MAX), Ok(u32::MAX));
        assert_eq!(
            validate_warranty("-6"),
            Err(ValidationError::InvalidWarranty("-6".into()))
        );
    }

    #[test]
    fn test_expiration_must_be_strictly_after_now() {
        let now = noon(2025, 3, 10);

        assert_eq!(
            validate_expiration_at("11-03-2025", now),
            Ok(NaiveDate::from_ymd_opt(2025, 3, 11).unwrap())
        );
        // Midnight of the current day is already in the past.
        assert!(validate_expiration_at("10-03-2025", now).is_err());
        assert!(validate_expiration_at("01-01-2020", now).is_err());
    }

    #[test]
    fn test_expiration_rejects_other_formats() {
        let now = noon(2025, 3, 10);
        assert_eq!(
            validate_expiration_at("2030-01-01", now),
            Err(ValidationError::InvalidExpiration("2030-01-01".into()))
        );
        assert!(validate_expiration_at("31-02-2030", now).is_err());
        assert!(validate_expiration_at("", now).is_err());
    }

    #[test]
    fn test_expiration_against_real_clock() {
        assert!(validate_expiration("01-01-2999").is_ok());
        assert!(validate_expiration("01-01-1999").is_err());
    }
}
