//! MySQL implementation of the UserRepository trait

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use tracing::debug;
use uuid::Uuid;

use hub_core::domain::entities::user::User;
use hub_core::errors::{AuthError, DomainError};
use hub_core::repositories::UserRepository;
use hub_shared::utils::email::mask_email;

use super::{column, db_error, uuid_column};

const USER_COLUMNS: &str =
    "id, name, email, password_hash, phone, latitude, longitude, created_at, updated_at";

/// MySQL-backed user repository
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &MySqlRow) -> Result<User, DomainError> {
        Ok(User {
            id: uuid_column(row, "id")?,
            name: column(row, "name")?,
            email: column(row, "email")?,
            password_hash: column(row, "password_hash")?,
            phone: column(row, "phone")?,
            latitude: column(row, "latitude")?,
            longitude: column(row, "longitude")?,
            created_at: column::<DateTime<Utc>>(row, "created_at")?,
            updated_at: column::<DateTime<Utc>>(row, "updated_at")?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE email = ?");
        let row = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to query user by email", e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?");
        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to query user by id", e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT 1 FROM users WHERE email = ? LIMIT 1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to check email existence", e))?;

        Ok(row.is_some())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (
                id, name, email, password_hash, phone,
                latitude, longitude, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.phone)
            .bind(user.latitude)
            .bind(user.longitude)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                // The unique email index is the source of truth for
                // duplicate registration, even under concurrent requests.
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    DomainError::Auth(AuthError::EmailAlreadyRegistered)
                }
                _ => db_error("Failed to create user", e),
            })?;

        debug!(email = %mask_email(&user.email), user_id = %user.id, "user row created");
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            UPDATE users
            SET name = ?, email = ?, phone = ?, latitude = ?, longitude = ?, updated_at = ?
            WHERE id = ?
        "#;

        sqlx::query(query)
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.phone)
            .bind(user.latitude)
            .bind(user.longitude)
            .bind(user.updated_at)
            .bind(user.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    DomainError::Auth(AuthError::EmailAlreadyRegistered)
                }
                _ => db_error("Failed to update user", e),
            })?;

        Ok(user)
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users ORDER BY created_at DESC");
        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to list users", e))?;

        rows.iter().map(Self::row_to_user).collect()
    }
}
