//! Handlers for `/api/projects` (all authenticated)

use actix_web::{web, HttpResponse};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use hub_core::domain::entities::project::{Project, ProjectCategory, ProjectStatus};
use hub_core::errors::DomainError;
use hub_core::repositories::{OtpRepository, UserRepository};
use hub_core::services::otp::MailService;
use hub_shared::types::response::ApiResponse;

use crate::dto::project::{CreateProjectRequest, ProjectListQuery, UpdateProjectRequest};
use crate::handlers::ApiError;
use crate::middleware::AuthContext;
use crate::state::AppState;

fn parse_category(raw: Option<&str>) -> Result<Option<ProjectCategory>, ApiError> {
    raw.map(|value| {
        value.parse::<ProjectCategory>().map_err(|_| {
            ApiError::from(DomainError::Validation {
                message: format!("Invalid category: {value}"),
            })
        })
    })
    .transpose()
}

fn parse_status(raw: Option<&str>) -> Result<Option<ProjectStatus>, ApiError> {
    raw.map(|value| {
        value.parse::<ProjectStatus>().map_err(|_| {
            ApiError::from(DomainError::Validation {
                message: format!("Invalid status: {value}"),
            })
        })
    })
    .transpose()
}

/// GET /api/projects
pub async fn list<U, O, M>(
    state: web::Data<AppState<U, O, M>>,
    _auth: AuthContext,
    query: web::Query<ProjectListQuery>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    M: MailService + 'static,
{
    let category = parse_category(query.category.as_deref())?;
    let status = parse_status(query.status.as_deref())?;

    let projects = state
        .projects
        .list(query.search.as_deref(), category, status)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(projects)))
}

/// POST /api/projects
pub async fn create<U, O, M>(
    state: web::Data<AppState<U, O, M>>,
    auth: AuthContext,
    request: web::Json<CreateProjectRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    M: MailService + 'static,
{
    request.validate()?;
    let request = request.into_inner();

    let owner = state
        .users
        .find_by_id(auth.user_id)
        .await?
        .ok_or_else(|| DomainError::not_found("User"))?;

    let project = Project::new(
        request.title,
        request.description,
        request.github_link,
        request.technologies.unwrap_or_default(),
        request.category.unwrap_or_default(),
        request.status.unwrap_or_default(),
        owner.summary(),
    );
    let created = state.projects.create(project).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(created)))
}

/// GET /api/projects/{id}
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
    let id = id.into_inner();
    let mut project = state
        .projects
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("Project"))?;

    state.projects.increment_views(id).await?;
    project.views += 1;

    Ok(HttpResponse::Ok().json(ApiResponse::success(project)))
}

/// PUT /api/projects/{id}
pub async fn update<U, O, M>(
    state: web::Data<AppState<U, O, M>>,
    auth: AuthContext,
    id: web::Path<Uuid>,
    request: web::Json<UpdateProjectRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    M: MailService + 'static,
{
    request.validate()?;
    let request = request.into_inner();

    let mut project = state
        .projects
        .find_by_id(id.into_inner())
        .await?
        .ok_or_else(|| DomainError::not_found("Project"))?;

    if !project.is_owned_by(auth.user_id) {
        return Err(DomainError::forbidden("Not authorized to update this project").into());
    }

    // Allow-listed fields only
    if let Some(title) = request.title {
        project.title = title;
    }
    if let Some(description) = request.description {
        project.description = description;
    }
    if let Some(github_link) = request.github_link {
        project.github_link = Some(github_link);
    }
    if let Some(technologies) = request.technologies {
        project.technologies = technologies;
    }
    if let Some(category) = request.category {
        project.category = category;
    }
    if let Some(status) = request.status {
        project.status = status;
    }
    project.updated_at = chrono::Utc::now();

    let updated = state.projects.update(project).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(updated)))
}

/// DELETE /api/projects/{id}
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
    let project = state
        .projects
        .find_by_id(id.into_inner())
        .await?
        .ok_or_else(|| DomainError::not_found("Project"))?;

    if !project.is_owned_by(auth.user_id) {
        return Err(DomainError::forbidden("Not authorized to delete this project").into());
    }

    state.projects.delete(project.id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message("Project deleted successfully")))
}

/// POST /api/projects/{id}/like
pub async fn like<U, O, M>(
    state: web::Data<AppState<U, O, M>>,
    auth: AuthContext,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    M: MailService + 'static,
{
    let mut project = state
        .projects
        .find_by_id(id.into_inner())
        .await?
        .ok_or_else(|| DomainError::not_found("Project"))?;

    // Set-membership flip
    if project.toggle_like(auth.user_id) {
        state.projects.add_like(project.id, auth.user_id).await?;
    } else {
        state.projects.remove_like(project.id, auth.user_id).await?;
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(json!({ "likes": project.likes.len() }))))
}
