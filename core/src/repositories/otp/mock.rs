//! Mock implementation of OtpRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::one_time_code::OneTimeCode;
use crate::errors::DomainError;

use super::trait_::OtpRepository;

/// In-memory one-time-code store for tests, keyed by email so replacement is
/// a plain map insert.
#[derive(Default)]
pub struct MockOtpRepository {
    codes: Arc<RwLock<HashMap<String, OneTimeCode>>>,
}

impl MockOtpRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Test helper: the currently stored code for an email, if any
    pub async fn stored_code(&self, email: &str) -> Option<String> {
        let codes = self.codes.read().await;
        codes.get(email).map(|c| c.code.clone())
    }

    /// Test helper: overwrite the stored record, e.g. with an expired one
    pub async fn insert_raw(&self, code: OneTimeCode) {
        let mut codes = self.codes.write().await;
        codes.insert(code.email.clone(), code);
    }
}

#[async_trait]
impl OtpRepository for MockOtpRepository {
    async fn put(&self, code: &OneTimeCode) -> Result<(), DomainError> {
        let mut codes = self.codes.write().await;
        codes.insert(code.email.clone(), code.clone());
        Ok(())
    }

    async fn consume(&self, email: &str, code: &str) -> Result<bool, DomainError> {
        let mut codes = self.codes.write().await;
        let matches = codes
            .get(email)
            .map(|c| c.code == code && !c.is_expired())
            .unwrap_or(false);
        if matches {
            codes.remove(email);
        }
        Ok(matches)
    }

    async fn reap_expired(&self) -> Result<u64, DomainError> {
        let mut codes = self.codes.write().await;
        let before = codes.len();
        codes.retain(|_, c| !c.is_expired());
        Ok((before - codes.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_replaces_existing_code() {
        let repo = MockOtpRepository::new();
        let mut first = OneTimeCode::new("a@x.com");
        first.code = "111111".to_string();
        let mut second = OneTimeCode::new("a@x.com");
        second.code = "222222".to_string();
        repo.put(&first).await.unwrap();
        repo.put(&second).await.unwrap();

        // Only the second code is live
        assert!(!repo.consume("a@x.com", "111111").await.unwrap());
        assert!(repo.consume("a@x.com", "222222").await.unwrap());
    }

    #[tokio::test]
    async fn test_consume_is_single_use() {
        let repo = MockOtpRepository::new();
        let code = OneTimeCode::new("a@x.com");
        repo.put(&code).await.unwrap();

        assert!(repo.consume("a@x.com", &code.code).await.unwrap());
        assert!(!repo.consume("a@x.com", &code.code).await.unwrap());
    }

    #[tokio::test]
    async fn test_expired_code_never_matches_without_reap() {
        let repo = MockOtpRepository::new();
        let code = OneTimeCode::with_ttl("a@x.com", 0);
        let digits = code.code.clone();
        repo.insert_raw(code).await;
        std::thread::sleep(std::time::Duration::from_millis(5));

        assert!(!repo.consume("a@x.com", &digits).await.unwrap());
    }

    #[tokio::test]
    async fn test_reap_removes_only_expired() {
        let repo = MockOtpRepository::new();
        repo.insert_raw(OneTimeCode::with_ttl("old@x.com", 0)).await;
        repo.put(&OneTimeCode::new("fresh@x.com")).await.unwrap();
        std::thread::sleep(std::time::Duration::from_millis(5));

        assert_eq!(repo.reap_expired().await.unwrap(), 1);
        assert!(repo.stored_code("fresh@x.com").await.is_some());
    }
}
