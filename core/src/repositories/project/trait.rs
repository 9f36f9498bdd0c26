//! Project repository trait

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::project::{Project, ProjectCategory, ProjectStatus};
use crate::errors::DomainError;

/// Repository contract for showcased projects
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// List projects, newest first, optionally filtered by free-text search
    /// over title/description, category, and status.
    async fn list(
        &self,
        search: Option<&str>,
        category: Option<ProjectCategory>,
        status: Option<ProjectStatus>,
    ) -> Result<Vec<Project>, DomainError>;

    /// Find a project by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Project>, DomainError>;

    /// Persist a new project
    async fn create(&self, project: Project) -> Result<Project, DomainError>;

    /// Persist changes to an existing project
    async fn update(&self, project: Project) -> Result<Project, DomainError>;

    /// Delete a project. Returns false if it did not exist.
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Bump the view counter
    async fn increment_views(&self, id: Uuid) -> Result<(), DomainError>;

    /// Record a like (no-op if already present)
    async fn add_like(&self, project_id: Uuid, user_id: Uuid) -> Result<(), DomainError>;

    /// Remove a like (no-op if absent)
    async fn remove_like(&self, project_id: Uuid, user_id: Uuid) -> Result<(), DomainError>;
}
