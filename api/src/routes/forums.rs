//! Handlers for `/api/forums`: forums, posts, likes, and comments
//! (all authenticated)

use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use hub_core::domain::entities::forum::{Comment, Forum, Post};
use hub_core::domain::entities::user::UserSummary;
use hub_core::errors::DomainError;
use hub_core::repositories::{OtpRepository, UserRepository};
use hub_core::services::otp::MailService;
use hub_shared::types::response::ApiResponse;

use crate::dto::forum::{AddCommentRequest, CreateForumRequest, CreatePostRequest, ForumListQuery};
use crate::handlers::ApiError;
use crate::middleware::AuthContext;
use crate::state::AppState;

async fn caller_summary<U, O, M>(
    state: &AppState<U, O, M>,
    auth: &AuthContext,
) -> Result<UserSummary, ApiError>
where
    U: UserRepository,
    O: OtpRepository,
    M: MailService,
{
    let user = state
        .users
        .find_by_id(auth.user_id)
        .await?
        .ok_or_else(|| DomainError::not_found("User"))?;
    Ok(user.summary())
}

/// GET /api/forums
pub async fn list<U, O, M>(
    state: web::Data<AppState<U, O, M>>,
    _auth: AuthContext,
    query: web::Query<ForumListQuery>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    M: MailService + 'static,
{
    let forums = state
        .forums
        .list(query.search.as_deref(), query.category.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(forums)))
}

/// POST /api/forums
pub async fn create<U, O, M>(
    state: web::Data<AppState<U, O, M>>,
    auth: AuthContext,
    request: web::Json<CreateForumRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    M: MailService + 'static,
{
    request.validate()?;
    let request = request.into_inner();

    let creator = caller_summary(&state, &auth).await?;
    let forum = Forum::new(
        request.name,
        request.description,
        request.category,
        request.is_public.unwrap_or(true),
        creator,
    );
    let created = state.forums.create(forum).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(created)))
}

/// GET /api/forums/{id}
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
    let forum = state
        .forums
        .find_by_id(id.into_inner())
        .await?
        .ok_or_else(|| DomainError::not_found("Forum"))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(forum)))
}

/// POST /api/forums/{id}/join
pub async fn join<U, O, M>(
    state: web::Data<AppState<U, O, M>>,
    auth: AuthContext,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    M: MailService + 'static,
{
    let forum = state
        .forums
        .find_by_id(id.into_inner())
        .await?
        .ok_or_else(|| DomainError::not_found("Forum"))?;

    if forum.has_member(auth.user_id) {
        return Err(DomainError::Validation {
            message: "Already a member of this forum".to_string(),
        }
        .into());
    }

    let member = caller_summary(&state, &auth).await?;
    state.forums.add_member(forum.id, member).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message("Joined forum successfully")))
}

/// GET /api/forums/{id}/posts
pub async fn list_posts<U, O, M>(
    state: web::Data<AppState<U, O, M>>,
    _auth: AuthContext,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    M: MailService + 'static,
{
    let posts = state.posts.list_by_forum(id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(posts)))
}

/// POST /api/forums/{id}/posts
pub async fn create_post<U, O, M>(
    state: web::Data<AppState<U, O, M>>,
    auth: AuthContext,
    id: web::Path<Uuid>,
    request: web::Json<CreatePostRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    M: MailService + 'static,
{
    request.validate()?;
    let request = request.into_inner();

    let forum = state
        .forums
        .find_by_id(id.into_inner())
        .await?
        .ok_or_else(|| DomainError::not_found("Forum"))?;

    let author = caller_summary(&state, &auth).await?;
    let post = Post::new(forum.id, author, request.title, request.content);
    let created = state.posts.create(post).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(created)))
}

/// POST /api/forums/posts/{id}/like
pub async fn like_post<U, O, M>(
    state: web::Data<AppState<U, O, M>>,
    auth: AuthContext,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    M: MailService + 'static,
{
    let mut post = state
        .posts
        .find_by_id(id.into_inner())
        .await?
        .ok_or_else(|| DomainError::not_found("Post"))?;

    // Set-membership flip
    if post.toggle_like(auth.user_id) {
        state.posts.add_like(post.id, auth.user_id).await?;
    } else {
        state.posts.remove_like(post.id, auth.user_id).await?;
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(json!({ "likes": post.likes.len() }))))
}

/// POST /api/forums/posts/{id}/comment
pub async fn add_comment<U, O, M>(
    state: web::Data<AppState<U, O, M>>,
    auth: AuthContext,
    id: web::Path<Uuid>,
    request: web::Json<AddCommentRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    M: MailService + 'static,
{
    request.validate()?;

    let post = state
        .posts
        .find_by_id(id.into_inner())
        .await?
        .ok_or_else(|| DomainError::not_found("Post"))?;

    let author = caller_summary(&state, &auth).await?;
    let comment = Comment {
        author,
        content: request.content.clone(),
        created_at: Utc::now(),
    };
    state.posts.add_comment(post.id, &comment).await?;

    let updated = state
        .posts
        .find_by_id(post.id)
        .await?
        .ok_or_else(|| DomainError::not_found("Post"))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(updated)))
}
