//! One-time-code service implementation

use std::sync::Arc;

use hub_shared::utils::email::{mask_email, normalize_email};
use tracing::{error, info};

use crate::domain::entities::one_time_code::{OneTimeCode, DEFAULT_TTL_SECONDS};
use crate::errors::{AuthError, DomainResult};
use crate::repositories::OtpRepository;

use super::traits::MailService;

/// Configuration for the OTP service
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Seconds a code stays valid after issuance
    pub ttl_seconds: i64,
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: DEFAULT_TTL_SECONDS,
        }
    }
}

impl From<hub_shared::config::OtpConfig> for OtpServiceConfig {
    fn from(config: hub_shared::config::OtpConfig) -> Self {
        Self {
            ttl_seconds: config.ttl_seconds,
        }
    }
}

/// Service handling the mechanics of one-time codes: generation, storage,
/// dispatch, and single-use verification.
pub struct OtpService<O, M>
where
    O: OtpRepository,
    M: MailService,
{
    otp_repository: Arc<O>,
    mail_service: Arc<M>,
    config: OtpServiceConfig,
}

impl<O, M> OtpService<O, M>
where
    O: OtpRepository,
    M: MailService,
{
    /// Create a new OTP service
    pub fn new(otp_repository: Arc<O>, mail_service: Arc<M>, config: OtpServiceConfig) -> Self {
        Self {
            otp_repository,
            mail_service,
            config,
        }
    }

    /// Issue a fresh code to an email address.
    ///
    /// Any live code for the address is atomically replaced before the mail
    /// is dispatched. If dispatch fails the stored code is kept: the caller
    /// retries the whole issuance and the replacement makes the stale code
    /// unreachable, so nothing leaks across retries.
    pub async fn issue(&self, email: &str) -> DomainResult<()> {
        let code = OneTimeCode::with_ttl(email, self.config.ttl_seconds);

        self.otp_repository.put(&code).await?;
        info!(email = %mask_email(&code.email), "one-time code issued");

        match self
            .mail_service
            .send_one_time_code(&code.email, &code.code)
            .await
        {
            Ok(message_id) => {
                info!(
                    email = %mask_email(&code.email),
                    message_id = %message_id,
                    "one-time code dispatched"
                );
                Ok(())
            }
            Err(e) => {
                error!(
                    email = %mask_email(&code.email),
                    error = %e,
                    "one-time code dispatch failed"
                );
                Err(AuthError::MailDispatchFailed.into())
            }
        }
    }

    /// Verify and consume a code. Returns true iff a live record matched the
    /// exact `(email, code)` pair; the record is gone afterwards.
    pub async fn verify(&self, email: &str, code: &str) -> DomainResult<bool> {
        let email = normalize_email(email);
        let matched = self.otp_repository.consume(&email, code).await?;
        if matched {
            info!(email = %mask_email(&email), "one-time code verified");
        }
        Ok(matched)
    }

    /// Sweep TTL-lapsed records from the store
    pub async fn reap_expired(&self) -> DomainResult<u64> {
        let reaped = self.otp_repository.reap_expired().await?;
        if reaped > 0 {
            info!(reaped, "expired one-time codes removed");
        }
        Ok(reaped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DomainError;
    use crate::repositories::MockOtpRepository;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tokio::sync::Mutex;

    /// Test mail transport recording deliveries, optionally failing
    #[derive(Default)]
    struct RecordingMailService {
        fail: AtomicBool,
        sent: Mutex<Vec<(String, String)>>,
    }

    impl RecordingMailService {
        fn set_failing(&self, failing: bool) {
            self.fail.store(failing, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl MailService for RecordingMailService {
        async fn send_one_time_code(
            &self,
            email: &str,
            code: &str,
        ) -> Result<String, DomainError> {
            if self.fail.load(Ordering::SeqCst) {
                return Err(DomainError::internal("mail transport unavailable"));
            }
            let mut sent = self.sent.lock().await;
            sent.push((email.to_string(), code.to_string()));
            Ok(format!("msg-{}", sent.len()))
        }
    }

    fn service() -> (
        OtpService<MockOtpRepository, RecordingMailService>,
        Arc<MockOtpRepository>,
        Arc<RecordingMailService>,
    ) {
        let repo = Arc::new(MockOtpRepository::new());
        let mail = Arc::new(RecordingMailService::default());
        let service = OtpService::new(repo.clone(), mail.clone(), OtpServiceConfig::default());
        (service, repo, mail)
    }

    #[tokio::test]
    async fn test_issue_stores_and_dispatches() {
        let (service, repo, mail) = service();

        service.issue("Alice@Example.com").await.unwrap();

        let stored = repo.stored_code("alice@example.com").await.unwrap();
        let sent = mail.sent.lock().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "alice@example.com");
        assert_eq!(sent[0].1, stored);
    }

    #[tokio::test]
    async fn test_reissue_invalidates_prior_code() {
        let (service, repo, _mail) = service();

        service.issue("a@x.com").await.unwrap();
        let first = repo.stored_code("a@x.com").await.unwrap();
        service.issue("a@x.com").await.unwrap();
        let second = repo.stored_code("a@x.com").await.unwrap();

        if first != second {
            assert!(!service.verify("a@x.com", &first).await.unwrap());
        }
        assert!(service.verify("a@x.com", &second).await.unwrap());
    }

    #[tokio::test]
    async fn test_verified_code_is_single_use() {
        let (service, repo, _mail) = service();

        service.issue("a@x.com").await.unwrap();
        let code = repo.stored_code("a@x.com").await.unwrap();

        assert!(service.verify("a@x.com", &code).await.unwrap());
        assert!(!service.verify("a@x.com", &code).await.unwrap());
    }

    #[tokio::test]
    async fn test_dispatch_failure_keeps_code_and_reports() {
        let (service, repo, mail) = service();
        mail.set_failing(true);

        let err = service.issue("a@x.com").await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Auth(AuthError::MailDispatchFailed)
        ));
        // The code stays persisted for a retried issuance to replace
        assert!(repo.stored_code("a@x.com").await.is_some());

        mail.set_failing(false);
        service.issue("a@x.com").await.unwrap();
        let code = repo.stored_code("a@x.com").await.unwrap();
        assert!(service.verify("a@x.com", &code).await.unwrap());
    }

    #[tokio::test]
    async fn test_expired_code_fails_without_reap() {
        let repo = Arc::new(MockOtpRepository::new());
        let mail = Arc::new(RecordingMailService::default());
        let service = OtpService::new(
            repo.clone(),
            mail,
            OtpServiceConfig { ttl_seconds: 0 },
        );

        service.issue("a@x.com").await.unwrap();
        let code = repo.stored_code("a@x.com").await.unwrap();
        std::thread::sleep(std::time::Duration::from_millis(5));

        assert!(!service.verify("a@x.com", &code).await.unwrap());
    }
}
