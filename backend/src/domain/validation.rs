//! Input validation for form values.
//!
//! Amount policy: an empty amount field means zero; anything else must parse
//! as a finite, non-negative decimal or the whole submission is rejected.
//! Nothing invalid is ever stored, so totals never see a NaN.
//!
//! Required fields: a customer's name and the title of a contract, reminder
//! or expense must be non-blank after trimming. Every other text field may
//! be left empty.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

/// Longest accepted single-line field (names, titles, areas)
pub const MAX_SHORT_FIELD_LENGTH: usize = 200;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),
    #[error("{0} cannot exceed 200 characters")]
    FieldTooLong(&'static str),
    #[error("'{0}' is not a valid amount")]
    InvalidAmount(String),
    #[error("'{0}' is not a valid date (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("'{0}' is not a valid time (expected HH:MM)")]
    InvalidTime(String),
}

/// Parse the raw text of an amount field
pub fn parse_amount(raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| ValidationError::InvalidAmount(raw.to_string()))?;

    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::InvalidAmount(raw.to_string()));
    }

    // normalizes "-0"
    Ok(value.abs())
}

/// Trim a required single-line field and check its length
pub fn required_text(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    if trimmed.chars().count() > MAX_SHORT_FIELD_LENGTH {
        return Err(ValidationError::FieldTooLong(field));
    }

    Ok(trimmed.to_string())
}

/// Trim an optional single-line field and check its length
pub fn optional_text(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.chars().count() > MAX_SHORT_FIELD_LENGTH {
        return Err(ValidationError::FieldTooLong(field));
    }
    Ok(trimmed.to_string())
}

/// Validate an optional `YYYY-MM-DD` date; empty is allowed
pub fn optional_date(value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(String::new());
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(|_| trimmed.to_string())
        .map_err(|_| ValidationError::InvalidDate(value.to_string()))
}

/// Validate an optional `HH:MM` time; empty is allowed
pub fn optional_time(value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(String::new());
    }

    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .map(|_| trimmed.to_string())
        .map_err(|_| ValidationError::InvalidTime(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_accepts_decimals() {
        assert_eq!(parse_amount("100"), Ok(100.0));
        assert_eq!(parse_amount(" 250.75 "), Ok(250.75));
        assert_eq!(parse_amount("0"), Ok(0.0));
        assert_eq!(parse_amount("1e3"), Ok(1000.0));
    }

    #[test]
    fn test_parse_amount_empty_is_zero() {
        assert_eq!(parse_amount(""), Ok(0.0));
        assert_eq!(parse_amount("   "), Ok(0.0));
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        for raw in ["abc", "12abc", "NaN", "inf", "-5", "1,000", "$10"] {
            assert_eq!(
                parse_amount(raw),
                Err(ValidationError::InvalidAmount(raw.to_string())),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_amount_negative_zero() {
        let value = parse_amount("-0").unwrap();
        assert_eq!(value, 0.0);
        assert!(value.is_sign_positive());
    }

    #[test]
    fn test_required_text() {
        assert_eq!(required_text("Name", "  Bob  "), Ok("Bob".to_string()));
        assert_eq!(required_text("Name", "   "), Err(ValidationError::EmptyField("Name")));
        assert_eq!(
            required_text("Name", &"x".repeat(MAX_SHORT_FIELD_LENGTH + 1)),
            Err(ValidationError::FieldTooLong("Name"))
        );
    }

    #[test]
    fn test_optional_date_and_time() {
        assert_eq!(optional_date(""), Ok(String::new()));
        assert_eq!(optional_date("2024-02-29"), Ok("2024-02-29".to_string()));
        assert!(optional_date("2023-02-29").is_err());
        assert!(optional_date("01/02/2024").is_err());

        assert_eq!(optional_time("09:30"), Ok("09:30".to_string()));
        assert_eq!(optional_time(""), Ok(String::new()));
        assert!(optional_time("25:00").is_err());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::InvalidAmount("abc".to_string()).to_string(),
            "'abc' is not a valid amount"
        );
        assert_eq!(ValidationError::EmptyField("Title").to_string(), "Title cannot be empty");
    }
}
