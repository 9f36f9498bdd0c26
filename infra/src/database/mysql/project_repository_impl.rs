//! MySQL implementation of the ProjectRepository trait

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use hub_core::domain::entities::project::{Project, ProjectCategory, ProjectStatus};
use hub_core::domain::entities::user::UserSummary;
use hub_core::errors::DomainError;
use hub_core::repositories::ProjectRepository;

use super::{column, db_error, summary_columns, uuid_column};

const PROJECT_SELECT: &str = r#"
    SELECT p.id, p.title, p.description, p.github_link, p.owner_email,
           p.technologies, p.category, p.status, p.views, p.created_at, p.updated_at,
           u.id AS owner_id, u.name AS owner_name, u.email AS owner_summary_email
    FROM projects p
    INNER JOIN users u ON u.id = p.owner_id
"#;

/// MySQL-backed project repository
pub struct MySqlProjectRepository {
    pool: MySqlPool,
}

impl MySqlProjectRepository {
    /// Create a new project repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_project(
        row: &MySqlRow,
        collaborators: Vec<UserSummary>,
        likes: Vec<Uuid>,
    ) -> Result<Project, DomainError> {
        let technologies_raw: String = column(row, "technologies")?;
        let technologies: Vec<String> = serde_json::from_str(&technologies_raw)
            .map_err(|e| DomainError::internal(format!("Invalid technologies JSON: {e}")))?;

        let category_raw: String = column(row, "category")?;
        let status_raw: String = column(row, "status")?;

        Ok(Project {
            id: uuid_column(row, "id")?,
            title: column(row, "title")?,
            description: column(row, "description")?,
            github_link: column(row, "github_link")?,
            owner: UserSummary {
                id: uuid_column(row, "owner_id")?,
                name: column(row, "owner_name")?,
                email: column(row, "owner_summary_email")?,
            },
            owner_email: column(row, "owner_email")?,
            technologies,
            category: category_raw
                .parse::<ProjectCategory>()
                .map_err(DomainError::internal)?,
            status: status_raw
                .parse::<ProjectStatus>()
                .map_err(DomainError::internal)?,
            collaborators,
            likes,
            views: column(row, "views")?,
            created_at: column::<DateTime<Utc>>(row, "created_at")?,
            updated_at: column::<DateTime<Utc>>(row, "updated_at")?,
        })
    }

    async fn collaborators_of(&self, project_id: Uuid) -> Result<Vec<UserSummary>, DomainError> {
        let query = r#"
            SELECT u.id AS collab_id, u.name AS collab_name, u.email AS collab_email
            FROM project_collaborators pc
            INNER JOIN users u ON u.id = pc.user_id
            WHERE pc.project_id = ?
        "#;
        let rows = sqlx::query(query)
            .bind(project_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to query collaborators", e))?;

        rows.iter().map(|row| summary_columns(row, "collab")).collect()
    }

    async fn likes_of(&self, project_id: Uuid) -> Result<Vec<Uuid>, DomainError> {
        let rows = sqlx::query("SELECT user_id FROM project_likes WHERE project_id = ?")
            .bind(project_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to query project likes", e))?;

        rows.iter().map(|row| uuid_column(row, "user_id")).collect()
    }

    async fn hydrate(&self, row: &MySqlRow) -> Result<Project, DomainError> {
        let id = uuid_column(row, "id")?;
        let collaborators = self.collaborators_of(id).await?;
        let likes = self.likes_of(id).await?;
        Self::row_to_project(row, collaborators, likes)
    }
}

#[async_trait]
impl ProjectRepository for MySqlProjectRepository {
    async fn list(
        &self,
        search: Option<&str>,
        category: Option<ProjectCategory>,
        status: Option<ProjectStatus>,
    ) -> Result<Vec<Project>, DomainError> {
        let mut query = format!("{PROJECT_SELECT} WHERE 1 = 1");
        if search.is_some() {
            query.push_str(" AND MATCH(p.title, p.description) AGAINST (? IN NATURAL LANGUAGE MODE)");
        }
        if category.is_some() {
            query.push_str(" AND p.category = ?");
        }
        if status.is_some() {
            query.push_str(" AND p.status = ?");
        }
        query.push_str(" ORDER BY p.created_at DESC");

        let mut q = sqlx::query(&query);
        if let Some(search) = search {
            q = q.bind(search);
        }
        if let Some(category) = category {
            q = q.bind(category.as_str());
        }
        if let Some(status) = status {
            q = q.bind(status.as_str());
        }

        let rows = q
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to list projects", e))?;

        let mut projects = Vec::with_capacity(rows.len());
        for row in &rows {
            projects.push(self.hydrate(row).await?);
        }
        Ok(projects)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Project>, DomainError> {
        let query = format!("{PROJECT_SELECT} WHERE p.id = ?");
        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to query project", e))?;

        match row {
            Some(row) => Ok(Some(self.hydrate(&row).await?)),
            None => Ok(None),
        }
    }

    async fn create(&self, project: Project) -> Result<Project, DomainError> {
        let technologies = serde_json::to_string(&project.technologies)
            .map_err(|e| DomainError::internal(format!("Failed to encode technologies: {e}")))?;

        let query = r#"
            INSERT INTO projects (
                id, title, description, github_link, owner_id, owner_email,
                technologies, category, status, views, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(project.id.to_string())
            .bind(&project.title)
            .bind(&project.description)
            .bind(&project.github_link)
            .bind(project.owner.id.to_string())
            .bind(&project.owner_email)
            .bind(technologies)
            .bind(project.category.as_str())
            .bind(project.status.as_str())
            .bind(project.views)
            .bind(project.created_at)
            .bind(project.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to create project", e))?;

        Ok(project)
    }

    async fn update(&self, project: Project) -> Result<Project, DomainError> {
        let technologies = serde_json::to_string(&project.technologies)
            .map_err(|e| DomainError::internal(format!("Failed to encode technologies: {e}")))?;

        let query = r#"
            UPDATE projects
            SET title = ?, description = ?, github_link = ?, technologies = ?,
                category = ?, status = ?, updated_at = ?
            WHERE id = ?
        "#;

        sqlx::query(query)
            .bind(&project.title)
            .bind(&project.description)
            .bind(&project.github_link)
            .bind(technologies)
            .bind(project.category.as_str())
            .bind(project.status.as_str())
            .bind(project.updated_at)
            .bind(project.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to update project", e))?;

        Ok(project)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to delete project", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn increment_views(&self, id: Uuid) -> Result<(), DomainError> {
        sqlx::query("UPDATE projects SET views = views + 1 WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to increment views", e))?;
        Ok(())
    }

    async fn add_like(&self, project_id: Uuid, user_id: Uuid) -> Result<(), DomainError> {
        sqlx::query("INSERT IGNORE INTO project_likes (project_id, user_id) VALUES (?, ?)")
            .bind(project_id.to_string())
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to add project like", e))?;
        Ok(())
    }

    async fn remove_like(&self, project_id: Uuid, user_id: Uuid) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM project_likes WHERE project_id = ? AND user_id = ?")
            .bind(project_id.to_string())
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to remove project like", e))?;
        Ok(())
    }
}
