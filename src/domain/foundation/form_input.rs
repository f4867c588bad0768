//! Parsing of raw form fields into typed values.
//!
//! Browsers submit every field as text. These helpers are the single place
//! where that text becomes an integer or a number, so nothing untyped reaches
//! the domain components.

use super::{Operand, ValidationError};

/// Returns the field value, or an `EmptyField` error if it was not submitted.
pub fn require_field<'a>(field: &str, raw: Option<&'a str>) -> Result<&'a str, ValidationError> {
    raw.ok_or_else(|| ValidationError::empty_field(field))
}

/// Parses a whole number, surrounding whitespace allowed.
pub fn parse_integer(field: &str, raw: Option<&str>) -> Result<i64, ValidationError> {
    let text = require_field(field, raw)?.trim();
    if text.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    text.parse::<i64>().map_err(|_| {
        ValidationError::invalid_format(field, format!("'{}' is not a whole number", text))
    })
}

/// Parses a finite decimal number, surrounding whitespace allowed.
pub fn parse_number(field: &str, raw: Option<&str>) -> Result<Operand, ValidationError> {
    let text = require_field(field, raw)?.trim();
    if text.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    let value = text.parse::<f64>().map_err(|_| {
        ValidationError::invalid_format(field, format!("'{}' is not a number", text))
    })?;
    Operand::try_new(field, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_integer_accepts_whole_numbers() {
        assert_eq!(parse_integer("ciclos", Some("11")).unwrap(), 11);
        assert_eq!(parse_integer("ciclos", Some(" -4 ")).unwrap(), -4);
        assert_eq!(parse_integer("ciclos", Some("0")).unwrap(), 0);
    }

    #[test]
    fn parse_integer_rejects_missing_and_blank() {
        assert_eq!(
            parse_integer("ciclos", None),
            Err(ValidationError::empty_field("ciclos"))
        );
        assert_eq!(
            parse_integer("ciclos", Some("   ")),
            Err(ValidationError::empty_field("ciclos"))
        );
    }

    #[test]
    fn parse_integer_rejects_fractions_and_text() {
        assert!(matches!(
            parse_integer("ciclos", Some("2.5")),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_integer("ciclos", Some("tres")),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn parse_number_accepts_decimals() {
        assert_eq!(parse_number("val1", Some("10")).unwrap().value(), 10.0);
        assert_eq!(parse_number("val1", Some("-2.5")).unwrap().value(), -2.5);
    }

    #[test]
    fn parse_number_rejects_non_numeric() {
        assert!(matches!(
            parse_number("val1", Some("diez")),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn parse_number_rejects_non_finite_spellings() {
        assert!(parse_number("val1", Some("NaN")).is_err());
        assert!(parse_number("val1", Some("inf")).is_err());
        assert!(parse_number("val1", Some("-infinity")).is_err());
    }

    #[test]
    fn require_field_passes_through_present_values() {
        assert_eq!(require_field("mensaje", Some("")).unwrap(), "");
        assert!(require_field("mensaje", None).is_err());
    }
}
