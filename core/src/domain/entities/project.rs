//! Project showcase entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::user::UserSummary;

/// Project category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectCategory {
    Web,
    Mobile,
    AiMl,
    DataScience,
    Iot,
    Game,
    #[default]
    Other,
}

impl ProjectCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectCategory::Web => "web",
            ProjectCategory::Mobile => "mobile",
            ProjectCategory::AiMl => "ai-ml",
            ProjectCategory::DataScience => "data-science",
            ProjectCategory::Iot => "iot",
            ProjectCategory::Game => "game",
            ProjectCategory::Other => "other",
        }
    }
}

impl FromStr for ProjectCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "web" => Ok(ProjectCategory::Web),
            "mobile" => Ok(ProjectCategory::Mobile),
            "ai-ml" => Ok(ProjectCategory::AiMl),
            "data-science" => Ok(ProjectCategory::DataScience),
            "iot" => Ok(ProjectCategory::Iot),
            "game" => Ok(ProjectCategory::Game),
            "other" => Ok(ProjectCategory::Other),
            other => Err(format!("unknown project category: {other}")),
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Project lifecycle status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Planning,
    #[default]
    InProgress,
    Completed,
    Archived,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "planning",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Archived => "archived",
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "planning" => Ok(ProjectStatus::Planning),
            "in-progress" => Ok(ProjectStatus::InProgress),
            "completed" => Ok(ProjectStatus::Completed),
            "archived" => Ok(ProjectStatus::Archived),
            other => Err(format!("unknown project status: {other}")),
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A showcased project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub github_link: Option<String>,

    /// Owner; only the owner may mutate the project
    pub owner: UserSummary,
    pub owner_email: String,

    pub technologies: Vec<String>,
    pub category: ProjectCategory,
    pub status: ProjectStatus,

    pub collaborators: Vec<UserSummary>,

    /// Users who liked this project (set semantics)
    pub likes: Vec<Uuid>,

    /// View counter, incremented on each fetch by id
    pub views: i64,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: String,
        description: String,
        github_link: Option<String>,
        technologies: Vec<String>,
        category: ProjectCategory,
        status: ProjectStatus,
        owner: UserSummary,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            github_link,
            owner_email: owner.email.clone(),
            owner,
            technologies,
            category,
            status,
            collaborators: Vec::new(),
            likes: Vec::new(),
            views: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// True if the given user owns this project
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.owner.id == user_id
    }

    /// Flip like membership for a user. Returns true if the user now likes
    /// the project.
    pub fn toggle_like(&mut self, user_id: Uuid) -> bool {
        if let Some(pos) = self.likes.iter().position(|id| *id == user_id) {
            self.likes.remove(pos);
            false
        } else {
            self.likes.push(user_id);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serde_names() {
        assert_eq!(
            serde_json::to_string(&ProjectCategory::AiMl).unwrap(),
            "\"ai-ml\""
        );
        assert_eq!(
            serde_json::to_string(&ProjectCategory::DataScience).unwrap(),
            "\"data-science\""
        );
        assert_eq!(
            "in-progress".parse::<ProjectStatus>().unwrap(),
            ProjectStatus::InProgress
        );
        assert!("unknown".parse::<ProjectCategory>().is_err());
    }

    #[test]
    fn test_round_trip_as_str() {
        for category in [
            ProjectCategory::Web,
            ProjectCategory::Mobile,
            ProjectCategory::AiMl,
            ProjectCategory::DataScience,
            ProjectCategory::Iot,
            ProjectCategory::Game,
            ProjectCategory::Other,
        ] {
            assert_eq!(category.as_str().parse::<ProjectCategory>().unwrap(), category);
        }
    }

    #[test]
    fn test_defaults() {
        assert_eq!(ProjectCategory::default(), ProjectCategory::Other);
        assert_eq!(ProjectStatus::default(), ProjectStatus::InProgress);
    }
}
