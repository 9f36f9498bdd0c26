//! Project endpoint DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use hub_core::domain::entities::project::{ProjectCategory, ProjectStatus};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProjectRequest {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,

    pub github_link: Option<String>,

    pub technologies: Option<Vec<String>>,

    pub category: Option<ProjectCategory>,

    pub status: Option<ProjectStatus>,
}

/// Project update; mutable fields only, anything else in the payload is
/// ignored
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProjectRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: Option<String>,

    pub github_link: Option<String>,

    pub technologies: Option<Vec<String>>,

    pub category: Option<ProjectCategory>,

    pub status: Option<ProjectStatus>,
}

/// Query filters for the project listing. Category and status arrive as raw
/// strings and are parsed in the handler so an unknown value is a uniform
/// validation failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectListQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}
