//! Input validators.
//!
//! Pure functions over numbers and strings. Range checks clamp, they never
//! fail; the calculators do their own strict range checks and reject.

use once_cell::sync::Lazy;
use regex::Regex;

/// Deliberately permissive: something@something.something, no whitespace.
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex pattern"));

/// Outcome of [`validate_range`].
#[derive(Debug, Clone, PartialEq)]
pub enum RangeCheck {
    /// Value was already within bounds.
    Ok(f64),
    /// Value was outside bounds and has been moved to the nearest one.
    Clamped { value: f64, warning: String },
    /// Value was not a finite number. Nothing to clamp.
    Rejected,
}

impl RangeCheck {
    /// Whether the original value was usable as-is.
    pub fn is_ok(&self) -> bool {
        matches!(self, RangeCheck::Ok(_))
    }

    /// The value to use going forward, if any.
    pub fn value(&self) -> Option<f64> {
        match self {
            RangeCheck::Ok(v) | RangeCheck::Clamped { value: v, .. } => Some(*v),
            RangeCheck::Rejected => None,
        }
    }

    /// Warning to show the user, if the value was clamped.
    pub fn warning(&self) -> Option<&str> {
        match self {
            RangeCheck::Clamped { warning, .. } => Some(warning),
            _ => None,
        }
    }
}

/// Clamp `value` into `[min, max]`.
///
/// Non-finite input is rejected silently.
pub fn validate_range(value: f64, min: f64, max: f64) -> RangeCheck {
    if !value.is_finite() {
        return RangeCheck::Rejected;
    }
    if value < min {
        return RangeCheck::Clamped {
            value: min,
            warning: format!("Minimum value is {}", min),
        };
    }
    if value > max {
        return RangeCheck::Clamped {
            value: max,
            warning: format!("Maximum value is {}", max),
        };
    }
    RangeCheck::Ok(value)
}

/// Parse a user-entered number. Empty, malformed and non-finite input is `None`.
pub fn parse_number(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Check the permissive email format.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Whether `value` is finite and inside `[min, max]`.
pub fn in_range(value: f64, min: f64, max: f64) -> bool {
    value.is_finite() && value >= min && value <= max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_range_within_bounds() {
        assert_eq!(validate_range(70.0, 30.0, 200.0), RangeCheck::Ok(70.0));
        assert_eq!(validate_range(30.0, 30.0, 200.0), RangeCheck::Ok(30.0));
        assert_eq!(validate_range(200.0, 30.0, 200.0), RangeCheck::Ok(200.0));
    }

    #[test]
    fn test_validate_range_clamps_low() {
        let check = validate_range(5.0, 30.0, 200.0);
        assert_eq!(check.value(), Some(30.0));
        assert_eq!(check.warning(), Some("Minimum value is 30"));
        assert!(!check.is_ok());
    }

    #[test]
    fn test_validate_range_clamps_high() {
        let check = validate_range(250.5, 30.0, 200.0);
        assert_eq!(check.value(), Some(200.0));
        assert_eq!(check.warning(), Some("Maximum value is 200"));
    }

    #[test]
    fn test_validate_range_rejects_non_finite() {
        assert_eq!(validate_range(f64::NAN, 0.0, 1.0), RangeCheck::Rejected);
        assert_eq!(validate_range(f64::INFINITY, 0.0, 1.0), RangeCheck::Rejected);
        assert_eq!(validate_range(f64::NAN, 0.0, 1.0).value(), None);
        assert_eq!(validate_range(f64::NAN, 0.0, 1.0).warning(), None);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 72.5 "), Some(72.5));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
    }

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@example.org"));
        assert!(is_valid_email("x@y.z.w"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email("ab.co"));
        assert!(!is_valid_email("a@bco"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_in_range() {
        assert!(in_range(10.0, 10.0, 180.0));
        assert!(!in_range(9.99, 10.0, 180.0));
        assert!(!in_range(f64::NAN, 10.0, 180.0));
    }
}
