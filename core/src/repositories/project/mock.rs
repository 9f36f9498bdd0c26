//! Mock implementation of ProjectRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::project::{Project, ProjectCategory, ProjectStatus};
use crate::errors::DomainError;

use super::trait_::ProjectRepository;

/// In-memory project repository for tests
#[derive(Default)]
pub struct MockProjectRepository {
    projects: Arc<RwLock<HashMap<Uuid, Project>>>,
}

impl MockProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectRepository for MockProjectRepository {
    async fn list(
        &self,
        search: Option<&str>,
        category: Option<ProjectCategory>,
        status: Option<ProjectStatus>,
    ) -> Result<Vec<Project>, DomainError> {
        let projects = self.projects.read().await;
        let needle = search.map(|s| s.to_lowercase());
        let mut matching: Vec<Project> = projects
            .values()
            .filter(|p| match &needle {
                Some(q) => {
                    p.title.to_lowercase().contains(q)
                        || p.description.to_lowercase().contains(q)
                }
                None => true,
            })
            .filter(|p| category.map(|c| p.category == c).unwrap_or(true))
            .filter(|p| status.map(|s| p.status == s).unwrap_or(true))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matching)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Project>, DomainError> {
        let projects = self.projects.read().await;
        Ok(projects.get(&id).cloned())
    }

    async fn create(&self, project: Project) -> Result<Project, DomainError> {
        let mut projects = self.projects.write().await;
        projects.insert(project.id, project.clone());
        Ok(project)
    }

    async fn update(&self, project: Project) -> Result<Project, DomainError> {
        let mut projects = self.projects.write().await;
        if !projects.contains_key(&project.id) {
            return Err(DomainError::not_found("Project"));
        }
        projects.insert(project.id, project.clone());
        Ok(project)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut projects = self.projects.write().await;
        Ok(projects.remove(&id).is_some())
    }

    async fn increment_views(&self, id: Uuid) -> Result<(), DomainError> {
        let mut projects = self.projects.write().await;
        let project = projects
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found("Project"))?;
        project.views += 1;
        Ok(())
    }

    async fn add_like(&self, project_id: Uuid, user_id: Uuid) -> Result<(), DomainError> {
        let mut projects = self.projects.write().await;
        let project = projects
            .get_mut(&project_id)
            .ok_or_else(|| DomainError::not_found("Project"))?;
        if !project.likes.contains(&user_id) {
            project.likes.push(user_id);
        }
        Ok(())
    }

    async fn remove_like(&self, project_id: Uuid, user_id: Uuid) -> Result<(), DomainError> {
        let mut projects = self.projects.write().await;
        let project = projects
            .get_mut(&project_id)
            .ok_or_else(|| DomainError::not_found("Project"))?;
        project.likes.retain(|id| *id != user_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::user::UserSummary;

    fn owner() -> UserSummary {
        UserSummary {
            id: Uuid::new_v4(),
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        }
    }

    fn project(title: &str, category: ProjectCategory, status: ProjectStatus) -> Project {
        Project::new(
            title.to_string(),
            "A project".to_string(),
            None,
            vec!["rust".to_string()],
            category,
            status,
            owner(),
        )
    }

    #[tokio::test]
    async fn test_list_filters() {
        let repo = MockProjectRepository::new();
        repo.create(project("Course Planner", ProjectCategory::Web, ProjectStatus::Completed))
            .await
            .unwrap();
        repo.create(project("Robot Arm", ProjectCategory::Iot, ProjectStatus::InProgress))
            .await
            .unwrap();

        assert_eq!(repo.list(None, None, None).await.unwrap().len(), 2);
        assert_eq!(repo.list(Some("planner"), None, None).await.unwrap().len(), 1);
        assert_eq!(
            repo.list(None, Some(ProjectCategory::Iot), None).await.unwrap().len(),
            1
        );
        assert_eq!(
            repo.list(None, None, Some(ProjectStatus::Completed)).await.unwrap().len(),
            1
        );
    }

    #[tokio::test]
    async fn test_views_increment() {
        let repo = MockProjectRepository::new();
        let created = repo
            .create(project("Demo", ProjectCategory::Other, ProjectStatus::InProgress))
            .await
            .unwrap();

        repo.increment_views(created.id).await.unwrap();
        repo.increment_views(created.id).await.unwrap();
        assert_eq!(repo.find_by_id(created.id).await.unwrap().unwrap().views, 2);
    }
}
