//! Forum and post repository traits

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::forum::{Comment, Forum, Post};
use crate::domain::entities::user::UserSummary;
use crate::errors::DomainError;

/// Repository contract for forums
#[async_trait]
pub trait ForumRepository: Send + Sync {
    /// List public forums, newest first, optionally filtered by free-text
    /// search over name/description and by category.
    async fn list(
        &self,
        search: Option<&str>,
        category: Option<&str>,
    ) -> Result<Vec<Forum>, DomainError>;

    /// Find a forum by id, members resolved
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Forum>, DomainError>;

    /// Persist a new forum (creator is already a member)
    async fn create(&self, forum: Forum) -> Result<Forum, DomainError>;

    /// Add a member to a forum
    async fn add_member(&self, forum_id: Uuid, member: UserSummary) -> Result<(), DomainError>;
}

/// Repository contract for forum posts
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// List posts in a forum, newest first
    async fn list_by_forum(&self, forum_id: Uuid) -> Result<Vec<Post>, DomainError>;

    /// Find a post by id, likes and comments resolved
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, DomainError>;

    /// Persist a new post
    async fn create(&self, post: Post) -> Result<Post, DomainError>;

    /// Record a like (no-op if already present)
    async fn add_like(&self, post_id: Uuid, user_id: Uuid) -> Result<(), DomainError>;

    /// Remove a like (no-op if absent)
    async fn remove_like(&self, post_id: Uuid, user_id: Uuid) -> Result<(), DomainError>;

    /// Append a comment to a post
    async fn add_comment(&self, post_id: Uuid, comment: &Comment) -> Result<(), DomainError>;
}
