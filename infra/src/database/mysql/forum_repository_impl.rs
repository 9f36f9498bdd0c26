//! MySQL implementations of the forum and post repositories

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use hub_core::domain::entities::forum::{Comment, Forum, Post};
use hub_core::domain::entities::user::UserSummary;
use hub_core::errors::DomainError;
use hub_core::repositories::{ForumRepository, PostRepository};

use super::{column, db_error, summary_columns, uuid_column};

const FORUM_SELECT: &str = r#"
    SELECT f.id, f.name, f.description, f.category, f.is_public, f.created_at,
           u.id AS creator_id, u.name AS creator_name, u.email AS creator_email
    FROM forums f
    INNER JOIN users u ON u.id = f.creator_id
"#;

const POST_SELECT: &str = r#"
    SELECT p.id, p.forum_id, p.title, p.content, p.created_at,
           u.id AS author_id, u.name AS author_name, u.email AS author_email
    FROM posts p
    INNER JOIN users u ON u.id = p.author_id
"#;

/// MySQL-backed forum repository
pub struct MySqlForumRepository {
    pool: MySqlPool,
}

impl MySqlForumRepository {
    /// Create a new forum repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_forum(row: &MySqlRow, members: Vec<UserSummary>) -> Result<Forum, DomainError> {
        Ok(Forum {
            id: uuid_column(row, "id")?,
            name: column(row, "name")?,
            description: column(row, "description")?,
            category: column(row, "category")?,
            is_public: column(row, "is_public")?,
            creator: summary_columns(row, "creator")?,
            members,
            created_at: column::<DateTime<Utc>>(row, "created_at")?,
        })
    }

    async fn members_of(&self, forum_id: Uuid) -> Result<Vec<UserSummary>, DomainError> {
        let query = r#"
            SELECT u.id AS member_id, u.name AS member_name, u.email AS member_email
            FROM forum_members fm
            INNER JOIN users u ON u.id = fm.user_id
            WHERE fm.forum_id = ?
        "#;
        let rows = sqlx::query(query)
            .bind(forum_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to query forum members", e))?;

        rows.iter().map(|row| summary_columns(row, "member")).collect()
    }
}

#[async_trait]
impl ForumRepository for MySqlForumRepository {
    async fn list(
        &self,
        search: Option<&str>,
        category: Option<&str>,
    ) -> Result<Vec<Forum>, DomainError> {
        let mut query = format!("{FORUM_SELECT} WHERE f.is_public = TRUE");
        if search.is_some() {
            query.push_str(" AND MATCH(f.name, f.description) AGAINST (? IN NATURAL LANGUAGE MODE)");
        }
        if category.is_some() {
            query.push_str(" AND f.category = ?");
        }
        query.push_str(" ORDER BY f.created_at DESC");

        let mut q = sqlx::query(&query);
        if let Some(search) = search {
            q = q.bind(search);
        }
        if let Some(category) = category {
            q = q.bind(category);
        }

        let rows = q
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to list forums", e))?;

        let mut forums = Vec::with_capacity(rows.len());
        for row in &rows {
            let id = uuid_column(row, "id")?;
            let members = self.members_of(id).await?;
            forums.push(Self::row_to_forum(row, members)?);
        }
        Ok(forums)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Forum>, DomainError> {
        let query = format!("{FORUM_SELECT} WHERE f.id = ?");
        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to query forum", e))?;

        match row {
            Some(row) => {
                let members = self.members_of(id).await?;
                Ok(Some(Self::row_to_forum(&row, members)?))
            }
            None => Ok(None),
        }
    }

    async fn create(&self, forum: Forum) -> Result<Forum, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("Failed to open transaction", e))?;

        sqlx::query(
            r#"
            INSERT INTO forums (id, name, description, category, is_public, creator_id, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(forum.id.to_string())
        .bind(&forum.name)
        .bind(&forum.description)
        .bind(&forum.category)
        .bind(forum.is_public)
        .bind(forum.creator.id.to_string())
        .bind(forum.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| db_error("Failed to create forum", e))?;

        for member in &forum.members {
            sqlx::query("INSERT INTO forum_members (forum_id, user_id) VALUES (?, ?)")
                .bind(forum.id.to_string())
                .bind(member.id.to_string())
                .execute(&mut *tx)
                .await
                .map_err(|e| db_error("Failed to add forum member", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| db_error("Failed to commit forum creation", e))?;

        Ok(forum)
    }

    async fn add_member(&self, forum_id: Uuid, member: UserSummary) -> Result<(), DomainError> {
        sqlx::query("INSERT IGNORE INTO forum_members (forum_id, user_id) VALUES (?, ?)")
            .bind(forum_id.to_string())
            .bind(member.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to add forum member", e))?;
        Ok(())
    }
}

/// MySQL-backed post repository
pub struct MySqlPostRepository {
    pool: MySqlPool,
}

impl MySqlPostRepository {
    /// Create a new post repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_post(
        row: &MySqlRow,
        likes: Vec<Uuid>,
        comments: Vec<Comment>,
    ) -> Result<Post, DomainError> {
        Ok(Post {
            id: uuid_column(row, "id")?,
            forum_id: uuid_column(row, "forum_id")?,
            author: summary_columns(row, "author")?,
            title: column(row, "title")?,
            content: column(row, "content")?,
            likes,
            comments,
            created_at: column::<DateTime<Utc>>(row, "created_at")?,
        })
    }

    async fn likes_of(&self, post_id: Uuid) -> Result<Vec<Uuid>, DomainError> {
        let rows = sqlx::query("SELECT user_id FROM post_likes WHERE post_id = ?")
            .bind(post_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to query post likes", e))?;

        rows.iter().map(|row| uuid_column(row, "user_id")).collect()
    }

    async fn comments_of(&self, post_id: Uuid) -> Result<Vec<Comment>, DomainError> {
        let query = r#"
            SELECT c.content, c.created_at,
                   u.id AS author_id, u.name AS author_name, u.email AS author_email
            FROM post_comments c
            INNER JOIN users u ON u.id = c.author_id
            WHERE c.post_id = ?
            ORDER BY c.id
        "#;
        let rows = sqlx::query(query)
            .bind(post_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to query post comments", e))?;

        rows.iter()
            .map(|row| {
                Ok(Comment {
                    author: summary_columns(row, "author")?,
                    content: column(row, "content")?,
                    created_at: column::<DateTime<Utc>>(row, "created_at")?,
                })
            })
            .collect()
    }

    async fn hydrate(&self, row: &MySqlRow) -> Result<Post, DomainError> {
        let id = uuid_column(row, "id")?;
        let likes = self.likes_of(id).await?;
        let comments = self.comments_of(id).await?;
        Self::row_to_post(row, likes, comments)
    }
}

#[async_trait]
impl PostRepository for MySqlPostRepository {
    async fn list_by_forum(&self, forum_id: Uuid) -> Result<Vec<Post>, DomainError> {
        let query = format!("{POST_SELECT} WHERE p.forum_id = ? ORDER BY p.created_at DESC");
        let rows = sqlx::query(&query)
            .bind(forum_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to list posts", e))?;

        let mut posts = Vec::with_capacity(rows.len());
        for row in &rows {
            posts.push(self.hydrate(row).await?);
        }
        Ok(posts)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, DomainError> {
        let query = format!("{POST_SELECT} WHERE p.id = ?");
        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to query post", e))?;

        match row {
            Some(row) => Ok(Some(self.hydrate(&row).await?)),
            None => Ok(None),
        }
    }

    async fn create(&self, post: Post) -> Result<Post, DomainError> {
        let query = r#"
            INSERT INTO posts (id, forum_id, author_id, title, content, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(post.id.to_string())
            .bind(post.forum_id.to_string())
            .bind(post.author.id.to_string())
            .bind(&post.title)
            .bind(&post.content)
            .bind(post.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to create post", e))?;

        Ok(post)
    }

    async fn add_like(&self, post_id: Uuid, user_id: Uuid) -> Result<(), DomainError> {
        sqlx::query("INSERT IGNORE INTO post_likes (post_id, user_id) VALUES (?, ?)")
            .bind(post_id.to_string())
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to add post like", e))?;
        Ok(())
    }

    async fn remove_like(&self, post_id: Uuid, user_id: Uuid) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM post_likes WHERE post_id = ? AND user_id = ?")
            .bind(post_id.to_string())
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to remove post like", e))?;
        Ok(())
    }

    async fn add_comment(&self, post_id: Uuid, comment: &Comment) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO post_comments (post_id, author_id, content, created_at)
            VALUES (?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(post_id.to_string())
            .bind(comment.author.id.to_string())
            .bind(&comment.content)
            .bind(comment.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to add comment", e))?;
        Ok(())
    }
}
