//! Signup OTP endpoint DTOs (pre-registration email verification)

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validate_otp_code;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendOtpRequest {
    #[validate(email(message = "invalid email format"))]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    #[validate(email(message = "invalid email format"))]
    pub email: String,

    #[validate(custom(function = "validate_otp_code", message = "otp must be a 6-digit code"))]
    pub otp: String,
}
