//! Field rules used by the schemas.
//!
//! Each rule returns the coerced value or the message to show next to the
//! field.

use std::str::FromStr;

/// Field must be present and not blank.
pub fn required_text(raw: Option<&str>, message: &str) -> Result<String, String> {
    match raw {
        Some(value) if !value.trim().is_empty() => Ok(value.to_string()),
        _ => Err(message.to_string()),
    }
}

/// Coerce a form value to a number.
///
/// A missing or blank value coerces to `0.0`. Anything that does not parse
/// as a finite number fails.
pub fn coerce_number(raw: Option<&str>, message: &str) -> Result<f64, String> {
    let trimmed = raw.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Ok(0.0);
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(message.to_string()),
    }
}

pub fn greater_than(value: f64, min: f64, message: &str) -> Result<f64, String> {
    if value > min {
        Ok(value)
    } else {
        Err(message.to_string())
    }
}

/// Dollars to cents, rounded to the nearest cent.
pub fn to_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

/// Amount in dollars whose cent value lies in `min..=max`. Values past the
/// `i64` range fail here instead of saturating in `to_cents`.
pub fn cents_within(amount: f64, min: i64, max: i64, message: &str) -> Result<f64, String> {
    let cents = (amount * 100.0).round();
    if cents >= min as f64 && cents <= max as f64 {
        Ok(amount)
    } else {
        Err(message.to_string())
    }
}

/// Field must name one of the variants of `T` exactly.
pub fn one_of<T: FromStr>(raw: Option<&str>, message: &str) -> Result<T, String> {
    raw.and_then(|value| value.parse::<T>().ok())
        .ok_or_else(|| message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InvoiceStatus;

    #[test]
    fn required_text_rejects_missing_and_blank() {
        assert_eq!(required_text(Some("abc"), "req"), Ok("abc".to_string()));
        assert_eq!(required_text(Some("   "), "req"), Err("req".to_string()));
        assert_eq!(required_text(None, "req"), Err("req".to_string()));
    }

    #[test]
    fn coerce_number_treats_blank_as_zero() {
        assert_eq!(coerce_number(None, "num"), Ok(0.0));
        assert_eq!(coerce_number(Some(" "), "num"), Ok(0.0));
        assert_eq!(coerce_number(Some("-3.5"), "num"), Ok(-3.5));
        assert_eq!(coerce_number(Some("ten"), "num"), Err("num".to_string()));
    }

    #[test]
    fn greater_than_is_strict() {
        assert!(greater_than(0.0, 0.0, "gt").is_err());
        assert_eq!(greater_than(0.01, 0.0, "gt"), Ok(0.01));
    }

    #[test]
    fn cents_within_checks_the_rounded_value() {
        assert!(cents_within(0.004, 1, 100, "c").is_err());
        assert_eq!(cents_within(0.005, 1, 100, "c"), Ok(0.005));
        assert_eq!(cents_within(1.0, 1, 100, "c"), Ok(1.0));
        assert!(cents_within(1.01, 1, 100, "c").is_err());
        assert!(cents_within(1e300, 1, i64::MAX, "c").is_err());
    }

    #[test]
    fn one_of_parses_enum_names() {
        assert_eq!(one_of::<InvoiceStatus>(Some("paid"), "st"), Ok(InvoiceStatus::Paid));
        assert_eq!(one_of::<InvoiceStatus>(None, "st"), Err("st".to_string()));
    }
}
