//! Forum, post, and comment entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::UserSummary;

/// A discussion forum
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Forum {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub category: String,
    pub is_public: bool,

    /// Creator of the forum
    pub creator: UserSummary,

    /// Current members; the creator joins on creation
    pub members: Vec<UserSummary>,

    pub created_at: DateTime<Utc>,
}

impl Forum {
    pub fn new(
        name: String,
        description: String,
        category: String,
        is_public: bool,
        creator: UserSummary,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            description,
            category,
            is_public,
            members: vec![creator.clone()],
            creator,
            created_at: Utc::now(),
        }
    }

    /// True if the user is already a member
    pub fn has_member(&self, user_id: Uuid) -> bool {
        self.members.iter().any(|m| m.id == user_id)
    }
}

/// A comment appended to a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub author: UserSummary,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A post inside a forum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub forum_id: Uuid,
    pub author: UserSummary,
    pub title: String,
    pub content: String,

    /// Users who liked this post (set semantics)
    pub likes: Vec<Uuid>,

    /// Append-only comment list
    pub comments: Vec<Comment>,

    pub created_at: DateTime<Utc>,
}

impl Post {
    pub fn new(forum_id: Uuid, author: UserSummary, title: String, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            forum_id,
            author,
            title,
            content,
            likes: Vec::new(),
            comments: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Flip like membership for a user. Returns true if the user now likes
    /// the post, false if the like was removed.
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

    fn user(name: &str) -> UserSummary {
        UserSummary {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
        }
    }

    #[test]
    fn test_creator_is_initial_member() {
        let creator = user("Alice");
        let forum = Forum::new(
            "Rust".into(),
            "Rust talk".into(),
            "tech".into(),
            true,
            creator.clone(),
        );
        assert!(forum.has_member(creator.id));
        assert_eq!(forum.members.len(), 1);
    }

    #[test]
    fn test_toggle_like_is_a_set_flip() {
        let mut post = Post::new(Uuid::new_v4(), user("Bob"), "Hi".into(), "First".into());
        let liker = Uuid::new_v4();

        assert!(post.toggle_like(liker));
        assert_eq!(post.likes.len(), 1);
        // Liking twice removes the like
        assert!(!post.toggle_like(liker));
        assert!(post.likes.is_empty());
    }
}
