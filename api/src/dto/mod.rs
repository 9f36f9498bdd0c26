//! Request and response DTOs with field-level validation

pub mod auth;
pub mod forum;
pub mod item;
pub mod otp;
pub mod project;
pub mod user;

use validator::ValidationError;

use hub_shared::utils::validation::is_valid_otp_code;

/// Shared validator: a one-time code is exactly 6 decimal digits
pub(crate) fn validate_otp_code(code: &str) -> Result<(), ValidationError> {
    if is_valid_otp_code(code) {
        Ok(())
    } else {
        Err(ValidationError::new("otp_format"))
    }
}
