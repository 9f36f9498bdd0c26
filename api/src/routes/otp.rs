//! Handlers for `/api/otp`: the signup (pre-registration) OTP flow

use actix_web::{web, HttpResponse};
use validator::Validate;

use hub_core::repositories::{OtpRepository, UserRepository};
use hub_core::services::otp::MailService;
use hub_shared::types::response::ApiResponse;

use crate::dto::otp::{SendOtpRequest, VerifyOtpRequest};
use crate::handlers::ApiError;
use crate::state::AppState;

/// POST /api/otp/send
pub async fn send_otp<U, O, M>(
    state: web::Data<AppState<U, O, M>>,
    request: web::Json<SendOtpRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    M: MailService + 'static,
{
    request.validate()?;

    state.auth_service.request_signup_otp(&request.email).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message("OTP sent to your email successfully")))
}

/// POST /api/otp/verify
pub async fn verify_otp<U, O, M>(
    state: web::Data<AppState<U, O, M>>,
    request: web::Json<VerifyOtpRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    M: MailService + 'static,
{
    request.validate()?;

    state
        .auth_service
        .verify_signup_otp(&request.email, &request.otp)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message("OTP verified successfully")))
}
