//! MySQL repository implementations

pub mod forum_repository_impl;
pub mod item_repository_impl;
pub mod otp_repository_impl;
pub mod project_repository_impl;
pub mod user_repository_impl;

pub use forum_repository_impl::{MySqlForumRepository, MySqlPostRepository};
pub use item_repository_impl::MySqlItemRepository;
pub use otp_repository_impl::MySqlOtpRepository;
pub use project_repository_impl::MySqlProjectRepository;
pub use user_repository_impl::MySqlUserRepository;

use hub_core::domain::entities::user::UserSummary;
use hub_core::errors::DomainError;
use sqlx::mysql::MySqlRow;
use sqlx::Row;
use uuid::Uuid;

/// Read a column, mapping decode failures into a domain error
pub(crate) fn column<'r, T>(row: &'r MySqlRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::MySql> + sqlx::Type<sqlx::MySql>,
{
    row.try_get(name)
        .map_err(|e| DomainError::internal(format!("Failed to read column {name}: {e}")))
}

/// Parse a CHAR(36) column into a Uuid
pub(crate) fn uuid_column(row: &MySqlRow, name: &str) -> Result<Uuid, DomainError> {
    let raw: String = column(row, name)?;
    Uuid::parse_str(&raw)
        .map_err(|e| DomainError::internal(format!("Invalid UUID in column {name}: {e}")))
}

/// Build a user summary from aliased join columns (`<prefix>_id`,
/// `<prefix>_name`, `<prefix>_email`)
pub(crate) fn summary_columns(row: &MySqlRow, prefix: &str) -> Result<UserSummary, DomainError> {
    Ok(UserSummary {
        id: uuid_column(row, &format!("{prefix}_id"))?,
        name: column(row, &format!("{prefix}_name"))?,
        email: column(row, &format!("{prefix}_email"))?,
    })
}

/// Map a sqlx error into a domain error with context
pub(crate) fn db_error(context: &str, e: sqlx::Error) -> DomainError {
    DomainError::internal(format!("{context}: {e}"))
}
