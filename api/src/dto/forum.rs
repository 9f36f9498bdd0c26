//! Forum endpoint DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateForumRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,

    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,

    /// Defaults to public when omitted
    pub is_public: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddCommentRequest {
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
}

/// Query filters for the forum listing
#[derive(Debug, Clone, Deserialize)]
pub struct ForumListQuery {
    pub search: Option<String>,
    pub category: Option<String>,
}
