//! Field-level validation helpers

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});

static OTP_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{6}$").expect("valid otp regex"));

/// Check email address format
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Check that a one-time code is exactly 6 decimal digits
pub fn is_valid_otp_code(code: &str) -> bool {
    OTP_REGEX.is_match(code)
}

/// Latitude must lie in [-90, 90]
pub fn is_valid_latitude(latitude: f64) -> bool {
    (-90.0..=90.0).contains(&latitude)
}

/// Longitude must lie in [-180, 180]
pub fn is_valid_longitude(longitude: f64) -> bool {
    (-180.0..=180.0).contains(&longitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("alice@example.com"));
        assert!(is_valid_email("a.b+tag@sub.domain.org"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn test_otp_code_format() {
        assert!(is_valid_otp_code("123456"));
        assert!(is_valid_otp_code("000000"));
        assert!(!is_valid_otp_code("12345"));
        assert!(!is_valid_otp_code("1234567"));
        assert!(!is_valid_otp_code("12a456"));
    }

    #[test]
    fn test_coordinate_ranges() {
        assert!(is_valid_latitude(-90.0));
        assert!(is_valid_latitude(90.0));
        assert!(!is_valid_latitude(90.1));
        assert!(is_valid_longitude(-180.0));
        assert!(is_valid_longitude(180.0));
        assert!(!is_valid_longitude(180.5));
    }
}
