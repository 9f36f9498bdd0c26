//! Handlers for `/api/auth`: registration, password login, and login OTP

use actix_web::{web, HttpResponse};
use validator::Validate;

use hub_core::repositories::{OtpRepository, UserRepository};
use hub_core::services::auth::NewAccount;
use hub_core::services::otp::MailService;
use hub_shared::types::response::ApiResponse;

use crate::dto::auth::{
    LoginRequest, RegisterRequest, SendLoginOtpRequest, VerifyLoginOtpRequest,
};
use crate::handlers::ApiError;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register<U, O, M>(
    state: web::Data<AppState<U, O, M>>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    M: MailService + 'static,
{
    request.validate()?;
    let request = request.into_inner();

    let response = state
        .auth_service
        .register(NewAccount {
            name: request.name.trim().to_string(),
            email: request.email,
            password: request.password,
            phone: request.phone,
            latitude: request.latitude,
            longitude: request.longitude,
        })
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(response)))
}

/// POST /api/auth/login
pub async fn login<U, O, M>(
    state: web::Data<AppState<U, O, M>>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    M: MailService + 'static,
{
    request.validate()?;

    let response = state
        .auth_service
        .login(&request.email, &request.password)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}

/// POST /api/auth/login-otp
pub async fn send_login_otp<U, O, M>(
    state: web::Data<AppState<U, O, M>>,
    request: web::Json<SendLoginOtpRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    M: MailService + 'static,
{
    request.validate()?;

    state
        .auth_service
        .request_login_otp(&request.email, &request.password)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message("OTP sent to your email successfully")))
}

/// POST /api/auth/verify-login-otp
pub async fn verify_login_otp<U, O, M>(
    state: web::Data<AppState<U, O, M>>,
    request: web::Json<VerifyLoginOtpRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    M: MailService + 'static,
{
    request.validate()?;

    let response = state
        .auth_service
        .verify_login_otp(&request.email, &request.otp)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}
