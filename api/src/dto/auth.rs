//! Auth endpoint DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validate_otp_code;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(email(message = "invalid email format"))]
    pub email: String,

    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,

    pub phone: Option<String>,

    #[validate(range(min = -90.0, max = 90.0, message = "latitude must be between -90 and 90"))]
    pub latitude: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0, message = "longitude must be between -180 and 180"))]
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Request body for `/auth/login-otp`; credentials are re-validated exactly
/// as for password login before any code is issued.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendLoginOtpRequest {
    #[validate(email(message = "invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyLoginOtpRequest {
    #[validate(email(message = "invalid email format"))]
    pub email: String,

    #[validate(custom(function = "validate_otp_code", message = "otp must be a 6-digit code"))]
    pub otp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_validation() {
        let valid = RegisterRequest {
            name: "Alice".into(),
            email: "alice@example.com".into(),
            password: "secret1".into(),
            phone: None,
            latitude: Some(-33.86),
            longitude: Some(151.2),
        };
        assert!(valid.validate().is_ok());

        let invalid = RegisterRequest {
            name: "".into(),
            email: "not-an-email".into(),
            password: "short".into(),
            phone: None,
            latitude: Some(120.0),
            longitude: None,
        };
        let errors = invalid.validate().unwrap_err();
        // All violations reported at once
        assert!(errors.field_errors().contains_key("name"));
        assert!(errors.field_errors().contains_key("email"));
        assert!(errors.field_errors().contains_key("password"));
        assert!(errors.field_errors().contains_key("latitude"));
    }

    #[test]
    fn test_otp_code_validation() {
        let valid = VerifyLoginOtpRequest {
            email: "a@x.com".into(),
            otp: "123456".into(),
        };
        assert!(valid.validate().is_ok());

        for bad in ["12345", "1234567", "12a456", ""] {
            let request = VerifyLoginOtpRequest {
                email: "a@x.com".into(),
                otp: bad.into(),
            };
            assert!(request.validate().is_err(), "expected {bad:?} to fail");
        }
    }
}
