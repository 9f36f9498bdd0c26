//! Error type definitions for authentication, token, and validation failures.
//!
//! The HTTP layer maps these onto status codes and the uniform response
//! envelope; message strings here are the client-facing ones.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Duplicate registration. Maps to 409 Conflict.
    #[error("User with this email already exists")]
    EmailAlreadyRegistered,

    /// Unknown email or wrong password. The message is identical for both
    /// cases so callers cannot enumerate accounts.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No live one-time code matched. Mismatch and expiry are
    /// indistinguishable to the caller.
    #[error("Invalid or expired OTP")]
    InvalidOrExpiredCode,

    /// The mail transport reported a failure; the flow is not complete.
    #[error("Failed to send OTP email. Please try again.")]
    MailDispatchFailed,

    /// The account vanished between verification steps.
    #[error("User not found")]
    UserNotFound,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Input validation errors raised below the DTO layer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("Out of range: {field}")]
    OutOfRange { field: String },

    #[error("Invalid email format")]
    InvalidEmail,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DomainError;

    #[test]
    fn test_unauthorized_message_is_generic() {
        // Unknown email and wrong password must be indistinguishable.
        assert_eq!(AuthError::InvalidCredentials.to_string(), "Invalid credentials");
    }

    #[test]
    fn test_auth_error_bridges_into_domain_error() {
        let err: DomainError = AuthError::EmailAlreadyRegistered.into();
        assert_eq!(err.to_string(), "User with this email already exists");
    }

    #[test]
    fn test_otp_error_does_not_distinguish_expiry() {
        assert_eq!(
            AuthError::InvalidOrExpiredCode.to_string(),
            "Invalid or expired OTP"
        );
    }
}
