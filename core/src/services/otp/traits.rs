//! Trait for the outbound mail transport

use async_trait::async_trait;

use crate::errors::DomainError;

/// Outbound mail transport for one-time codes.
///
/// Success or failure is always reported back to the caller; a failed
/// dispatch must never be swallowed, because the auth flow must not complete
/// on it.
#[async_trait]
pub trait MailService: Send + Sync {
    /// Deliver a one-time code to an email address. Returns the provider's
    /// message id on success.
    async fn send_one_time_code(&self, email: &str, code: &str) -> Result<String, DomainError>;
}
