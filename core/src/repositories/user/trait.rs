//! User repository trait defining the interface for user data persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository contract for User entities.
///
/// Implementations handle the actual database operations while keeping the
/// abstraction boundary between domain and infrastructure layers. Email
/// lookups are case-insensitive: callers pass normalized (lowercase)
/// addresses and stores enforce a unique index on the email column.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by email address (normalized lowercase)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Check whether an email address is already registered
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Persist a new user. Fails if the email is already taken.
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Persist changes to an existing user
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// List all users (directory listing)
    async fn list(&self) -> Result<Vec<User>, DomainError>;
}
