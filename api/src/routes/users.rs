//! Handlers for `/api/users`: profile and directory (all authenticated)

use actix_web::{web, HttpResponse};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use hub_core::errors::DomainError;
use hub_core::repositories::{OtpRepository, UserRepository};
use hub_core::services::otp::MailService;
use hub_shared::types::response::ApiResponse;

use crate::dto::user::UpdateProfileRequest;
use crate::handlers::ApiError;
use crate::middleware::AuthContext;
use crate::state::AppState;

/// GET /api/users/profile
pub async fn get_profile<U, O, M>(
    state: web::Data<AppState<U, O, M>>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    M: MailService + 'static,
{
    let user = state
        .users
        .find_by_id(auth.user_id)
        .await?
        .ok_or_else(|| DomainError::not_found("User"))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(json!({ "user": user }))))
}

/// PUT /api/users/profile
pub async fn update_profile<U, O, M>(
    state: web::Data<AppState<U, O, M>>,
    auth: AuthContext,
    request: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    M: MailService + 'static,
{
    request.validate()?;

    let mut user = state
        .users
        .find_by_id(auth.user_id)
        .await?
        .ok_or_else(|| DomainError::not_found("User"))?;

    user.apply_profile_update(request.name.clone(), request.email.as_deref());
    let updated = state.users.update(user).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(json!({ "user": updated }))))
}

/// GET /api/users
pub async fn list<U, O, M>(
    state: web::Data<AppState<U, O, M>>,
    _auth: AuthContext,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    M: MailService + 'static,
{
    let users = state.users.list().await?;
    let results = users.len();

    Ok(HttpResponse::Ok()
        .json(ApiResponse::success_with_results(json!({ "users": users }), results)))
}

/// GET /api/users/{id}
pub async fn get_by_id<U, O, M>(
    state: web::Data<AppState<U, O, M>>,
    _auth: AuthContext,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    M: MailService + 'static,
{
    let user = state
        .users
        .find_by_id(id.into_inner())
        .await?
        .ok_or_else(|| DomainError::not_found("User"))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(json!({ "user": user }))))
}
