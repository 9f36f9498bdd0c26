//! Mock mail service for development and tests.
//!
//! Records every delivery in memory and logs it. Codes are only written to
//! the log at debug level, for local development.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tokio::sync::Mutex;

use hub_core::errors::DomainError;
use hub_core::services::otp::MailService;
use hub_shared::utils::email::mask_email;
use tracing::{debug, info};

/// A recorded delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMail {
    pub to: String,
    pub code: String,
}

/// In-memory mail service
#[derive(Default)]
pub struct MockMailService {
    sent: Mutex<Vec<SentMail>>,
    fail: AtomicBool,
    counter: AtomicU64,
}

impl MockMailService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent sends fail (for dependency-failure tests)
    pub fn set_failing(&self, failing: bool) {
        self.fail.store(failing, Ordering::SeqCst);
    }

    /// All deliveries so far
    pub async fn sent(&self) -> Vec<SentMail> {
        self.sent.lock().await.clone()
    }

    /// Last code delivered to the given address
    pub async fn last_code_for(&self, email: &str) -> Option<String> {
        let sent = self.sent.lock().await;
        sent.iter()
            .rev()
            .find(|mail| mail.to == email)
            .map(|mail| mail.code.clone())
    }
}

#[async_trait]
impl MailService for MockMailService {
    async fn send_one_time_code(&self, email: &str, code: &str) -> Result<String, DomainError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(DomainError::internal("mock mail transport set to fail"));
        }

        let id = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        info!(to = %mask_email(email), message_id = id, "mock mail sent");
        debug!(to = %mask_email(email), code, "mock mail content");

        let mut sent = self.sent.lock().await;
        sent.push(SentMail {
            to: email.to_string(),
            code: code.to_string(),
        });
        Ok(format!("mock-{id}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_deliveries() {
        let service = MockMailService::new();
        service.send_one_time_code("a@x.com", "111111").await.unwrap();
        service.send_one_time_code("a@x.com", "222222").await.unwrap();

        assert_eq!(service.sent().await.len(), 2);
        assert_eq!(service.last_code_for("a@x.com").await.unwrap(), "222222");
        assert!(service.last_code_for("b@x.com").await.is_none());
    }

    #[tokio::test]
    async fn test_failure_mode() {
        let service = MockMailService::new();
        service.set_failing(true);
        assert!(service.send_one_time_code("a@x.com", "111111").await.is_err());

        service.set_failing(false);
        assert!(service.send_one_time_code("a@x.com", "111111").await.is_ok());
    }
}
