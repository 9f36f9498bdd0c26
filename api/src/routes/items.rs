//! Handlers for `/api/items`: listings are public, mutation requires
//! authentication and ownership

use actix_web::{web, HttpResponse};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use hub_core::domain::entities::item::Item;
use hub_core::errors::DomainError;
use hub_core::repositories::{OtpRepository, UserRepository};
use hub_core::services::otp::MailService;
use hub_shared::types::response::ApiResponse;

use crate::dto::item::{CreateItemRequest, UpdateItemRequest};
use crate::handlers::ApiError;
use crate::middleware::AuthContext;
use crate::state::AppState;

/// GET /api/items
pub async fn list<U, O, M>(
    state: web::Data<AppState<U, O, M>>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    M: MailService + 'static,
{
    let items = state.items.list().await?;
    let results = items.len();

    Ok(HttpResponse::Ok()
        .json(ApiResponse::success_with_results(json!({ "items": items }), results)))
}

/// GET /api/items/{id}
pub async fn get_by_id<U, O, M>(
    state: web::Data<AppState<U, O, M>>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    M: MailService + 'static,
{
    let item = state
        .items
        .find_by_id(id.into_inner())
        .await?
        .ok_or_else(|| DomainError::not_found("Item"))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(json!({ "item": item }))))
}

/// POST /api/items
pub async fn create<U, O, M>(
    state: web::Data<AppState<U, O, M>>,
    auth: AuthContext,
    request: web::Json<CreateItemRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    M: MailService + 'static,
{
    request.validate()?;
    let request = request.into_inner();

    let creator = state
        .users
        .find_by_id(auth.user_id)
        .await?
        .ok_or_else(|| DomainError::not_found("User"))?;

    let item = Item::new(
        request.title,
        request.description,
        request.price,
        creator.summary(),
    );
    let created = state.items.create(item).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(json!({ "item": created }))))
}

/// PUT /api/items/{id}
pub async fn update<U, O, M>(
    state: web::Data<AppState<U, O, M>>,
    auth: AuthContext,
    id: web::Path<Uuid>,
    request: web::Json<UpdateItemRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    M: MailService + 'static,
{
    request.validate()?;
    let request = request.into_inner();

    let mut item = state
        .items
        .find_by_id(id.into_inner())
        .await?
        .ok_or_else(|| DomainError::not_found("Item"))?;

    if !item.is_owned_by(auth.user_id) {
        return Err(DomainError::forbidden("Not authorized to update this item").into());
    }

    item.apply_update(request.title, request.description, request.price);
    let updated = state.items.update(item).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(json!({ "item": updated }))))
}

/// DELETE /api/items/{id}
pub async fn delete<U, O, M>(
    state: web::Data<AppState<U, O, M>>,
    auth: AuthContext,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    M: MailService + 'static,
{
    let item = state
        .items
        .find_by_id(id.into_inner())
        .await?
        .ok_or_else(|| DomainError::not_found("Item"))?;

    if !item.is_owned_by(auth.user_id) {
        return Err(DomainError::forbidden("Not authorized to delete this item").into());
    }

    state.items.delete(item.id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message("Item deleted successfully")))
}
