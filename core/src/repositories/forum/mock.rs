//! Mock implementations of the forum and post repositories for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::forum::{Comment, Forum, Post};
use crate::domain::entities::user::UserSummary;
use crate::errors::DomainError;

use super::trait_::{ForumRepository, PostRepository};

/// In-memory forum repository for tests
#[derive(Default)]
pub struct MockForumRepository {
    forums: Arc<RwLock<HashMap<Uuid, Forum>>>,
}

impl MockForumRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ForumRepository for MockForumRepository {
    async fn list(
        &self,
        search: Option<&str>,
        category: Option<&str>,
    ) -> Result<Vec<Forum>, DomainError> {
        let forums = self.forums.read().await;
        let needle = search.map(|s| s.to_lowercase());
        let mut matching: Vec<Forum> = forums
            .values()
            .filter(|f| f.is_public)
            .filter(|f| match &needle {
                Some(q) => {
                    f.name.to_lowercase().contains(q) || f.description.to_lowercase().contains(q)
                }
                None => true,
            })
            .filter(|f| category.map(|c| f.category == c).unwrap_or(true))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matching)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Forum>, DomainError> {
        let forums = self.forums.read().await;
        Ok(forums.get(&id).cloned())
    }

    async fn create(&self, forum: Forum) -> Result<Forum, DomainError> {
        let mut forums = self.forums.write().await;
        forums.insert(forum.id, forum.clone());
        Ok(forum)
    }

    async fn add_member(&self, forum_id: Uuid, member: UserSummary) -> Result<(), DomainError> {
        let mut forums = self.forums.write().await;
        let forum = forums
            .get_mut(&forum_id)
            .ok_or_else(|| DomainError::not_found("Forum"))?;
        if !forum.has_member(member.id) {
            forum.members.push(member);
        }
        Ok(())
    }
}

/// In-memory post repository for tests
#[derive(Default)]
pub struct MockPostRepository {
    posts: Arc<RwLock<HashMap<Uuid, Post>>>,
}

impl MockPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for MockPostRepository {
    async fn list_by_forum(&self, forum_id: Uuid) -> Result<Vec<Post>, DomainError> {
        let posts = self.posts.read().await;
        let mut matching: Vec<Post> = posts
            .values()
            .filter(|p| p.forum_id == forum_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matching)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, DomainError> {
        let posts = self.posts.read().await;
        Ok(posts.get(&id).cloned())
    }

    async fn create(&self, post: Post) -> Result<Post, DomainError> {
        let mut posts = self.posts.write().await;
        posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn add_like(&self, post_id: Uuid, user_id: Uuid) -> Result<(), DomainError> {
        let mut posts = self.posts.write().await;
        let post = posts
            .get_mut(&post_id)
            .ok_or_else(|| DomainError::not_found("Post"))?;
        if !post.likes.contains(&user_id) {
            post.likes.push(user_id);
        }
        Ok(())
    }

    async fn remove_like(&self, post_id: Uuid, user_id: Uuid) -> Result<(), DomainError> {
        let mut posts = self.posts.write().await;
        let post = posts
            .get_mut(&post_id)
            .ok_or_else(|| DomainError::not_found("Post"))?;
        post.likes.retain(|id| *id != user_id);
        Ok(())
    }

    async fn add_comment(&self, post_id: Uuid, comment: &Comment) -> Result<(), DomainError> {
        let mut posts = self.posts.write().await;
        let post = posts
            .get_mut(&post_id)
            .ok_or_else(|| DomainError::not_found("Post"))?;
        post.comments.push(comment.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> UserSummary {
        UserSummary {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
        }
    }

    #[tokio::test]
    async fn test_list_filters_search_and_category() {
        let repo = MockForumRepository::new();
        let creator = user("Alice");
        repo.create(Forum::new(
            "Rust Study Group".into(),
            "Weekly rust sessions".into(),
            "tech".into(),
            true,
            creator.clone(),
        ))
        .await
        .unwrap();
        repo.create(Forum::new(
            "Campus Gardening".into(),
            "Green thumbs".into(),
            "hobby".into(),
            true,
            creator.clone(),
        ))
        .await
        .unwrap();
        repo.create(Forum::new(
            "Private Rust Club".into(),
            "Invite only".into(),
            "tech".into(),
            false,
            creator,
        ))
        .await
        .unwrap();

        // Private forums never show in listings
        assert_eq!(repo.list(None, None).await.unwrap().len(), 2);
        assert_eq!(repo.list(Some("rust"), None).await.unwrap().len(), 1);
        assert_eq!(repo.list(None, Some("hobby")).await.unwrap().len(), 1);
        assert!(repo.list(Some("rust"), Some("hobby")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_post_like_set_semantics() {
        let repo = MockPostRepository::new();
        let post = repo
            .create(Post::new(Uuid::new_v4(), user("Bob"), "Hi".into(), "Body".into()))
            .await
            .unwrap();
        let liker = Uuid::new_v4();

        repo.add_like(post.id, liker).await.unwrap();
        repo.add_like(post.id, liker).await.unwrap();
        assert_eq!(repo.find_by_id(post.id).await.unwrap().unwrap().likes.len(), 1);

        repo.remove_like(post.id, liker).await.unwrap();
        assert!(repo.find_by_id(post.id).await.unwrap().unwrap().likes.is_empty());
    }
}
