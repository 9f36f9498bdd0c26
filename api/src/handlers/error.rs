//! Conversion of domain errors into the HTTP envelope.
//!
//! Every failure leaving the API goes through here, so the envelope shape
//! and status mapping live in one place and internal detail never reaches
//! the client.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;
use validator::ValidationErrors;

use hub_core::errors::{AuthError, DomainError};
use hub_shared::types::response::{ApiResponse, FieldViolation};

/// API-boundary error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Validation failed")]
    Validation(Vec<FieldViolation>),
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut violations = Vec::new();
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                violations.push(FieldViolation::new(field.to_string(), message));
            }
        }
        ApiError::Validation(violations)
    }
}

impl ApiError {
    /// Message exposed to the client. Internal errors are replaced with a
    /// generic string; everything else already carries its client-facing
    /// wording.
    fn client_message(&self) -> String {
        match self {
            ApiError::Domain(DomainError::Internal { .. }) => "Internal server error".to_string(),
            ApiError::Domain(e) => e.to_string(),
            ApiError::Validation(_) => "Validation failed".to_string(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Domain(e) => match e {
                DomainError::Validation { .. } | DomainError::ValidationErr(_) => {
                    StatusCode::BAD_REQUEST
                }
                DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
                DomainError::Forbidden { .. } => StatusCode::FORBIDDEN,
                DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
                DomainError::Auth(auth) => match auth {
                    AuthError::EmailAlreadyRegistered => StatusCode::CONFLICT,
                    AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                    AuthError::InvalidOrExpiredCode => StatusCode::BAD_REQUEST,
                    AuthError::MailDispatchFailed => StatusCode::INTERNAL_SERVER_ERROR,
                    AuthError::UserNotFound => StatusCode::NOT_FOUND,
                },
                DomainError::Token(_) => StatusCode::UNAUTHORIZED,
            },
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Domain(DomainError::Internal { message }) = self {
            log::error!("internal error: {message}");
        }

        match self {
            ApiError::Validation(violations) => HttpResponse::build(self.status_code())
                .json(ApiResponse::validation(violations.clone())),
            _ => HttpResponse::build(self.status_code())
                .json(ApiResponse::error(self.client_message())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let conflict: ApiError = DomainError::from(AuthError::EmailAlreadyRegistered).into();
        assert_eq!(conflict.status_code(), StatusCode::CONFLICT);

        let unauthorized: ApiError = DomainError::from(AuthError::InvalidCredentials).into();
        assert_eq!(unauthorized.status_code(), StatusCode::UNAUTHORIZED);

        let bad_otp: ApiError = DomainError::from(AuthError::InvalidOrExpiredCode).into();
        assert_eq!(bad_otp.status_code(), StatusCode::BAD_REQUEST);

        let dependency: ApiError = DomainError::from(AuthError::MailDispatchFailed).into();
        assert_eq!(dependency.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let forbidden: ApiError = DomainError::forbidden("Not yours").into();
        assert_eq!(forbidden.status_code(), StatusCode::FORBIDDEN);

        let missing: ApiError = DomainError::not_found("Item").into();
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_detail_never_leaks() {
        let err: ApiError = DomainError::internal("connection refused on 10.0.0.5:3306").into();
        assert_eq!(err.client_message(), "Internal server error");
    }
}
