//! Input validation shared by the calculations.

use crate::error::{Error, Result};

/// Reject NaN and infinite values.
pub(crate) fn require_finite(name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::invalid(
            name,
            format!("{name} must be finite, got {value}"),
        ));
    }
    Ok(value)
}

/// Reject non-finite and negative values.
pub(crate) fn require_non_negative(name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::invalid(
            name,
            format!("{name} must be finite and non-negative, got {value}"),
        ));
    }
    // -0.0 + 0.0 == +0.0
    Ok(value + 0.0)
}

/// Parse a textual quantity such as a CLI flag value.
///
/// Surrounding whitespace is ignored. Anything that is not a finite number
/// (`"fast"`, `"NaN"`, `"inf"`, an empty string) fails with
/// [`Error::InvalidArgument`]. Sign checks are left to the calculation that
/// consumes the value, since some quantities (distance) may be negative.
///
/// # Examples
/// ```
/// use kinematics_lib::parse_quantity;
///
/// assert_eq!(parse_quantity("velocity", " 120.5 ").unwrap(), 120.5);
/// assert!(parse_quantity("velocity", "fast").is_err());
/// ```
pub fn parse_quantity(name: &str, raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    let value: f64 = trimmed.parse().map_err(|_| {
        Error::invalid(name, format!("{name} must be a number, got '{trimmed}'"))
    })?;
    require_finite(name, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_numeric_text_is_invalid_argument() {
        let err = parse_quantity("velocity", "fast").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidArgument {
                name: "velocity".to_string(),
                message: "velocity must be a number, got 'fast'".to_string(),
            }
        );
    }

    #[test]
    fn rejects_empty_and_non_finite_text() {
        assert!(parse_quantity("time", "").is_err());
        assert!(parse_quantity("time", "NaN").is_err());
        assert!(parse_quantity("time", "inf").is_err());
    }

    #[test]
    fn accepts_signed_and_exponent_forms() {
        assert_eq!(parse_quantity("distance", "-12.5").unwrap(), -12.5);
        assert_eq!(parse_quantity("fuel", "5e3").unwrap(), 5000.0);
    }

    #[test]
    fn non_negative_rejects_negative_zero_passes() {
        assert!(require_non_negative("acceleration", -1.0).is_err());
        assert!(require_non_negative("acceleration", f64::NAN).is_err());
        assert_eq!(require_non_negative("acceleration", 0.0).unwrap(), 0.0);
    }

    #[test]
    fn non_negative_normalizes_negative_zero() {
        let value = require_non_negative("fuel mass", -0.0).unwrap();
        assert!(value.is_sign_positive());
        assert_eq!(format!("{value:.2}"), "0.00");
    }
}
