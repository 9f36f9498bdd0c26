//! Mail Service Module
//!
//! Outbound delivery of one-time codes. Two implementations are provided:
//! an HTTP mail API client for production and a console-logging mock for
//! development and tests.

use async_trait::async_trait;
use tracing::warn;

use hub_core::errors::DomainError;
use hub_core::services::otp::MailService;
use hub_shared::config::MailConfig;

pub mod http_api;
pub mod mock_mail;

pub use http_api::HttpApiMailService;
pub use mock_mail::MockMailService;

/// Concrete mail service selected at startup from configuration
pub enum MailProvider {
    HttpApi(HttpApiMailService),
    Mock(MockMailService),
}

#[async_trait]
impl MailService for MailProvider {
    async fn send_one_time_code(&self, email: &str, code: &str) -> Result<String, DomainError> {
        match self {
            MailProvider::HttpApi(service) => service.send_one_time_code(email, code).await,
            MailProvider::Mock(service) => service.send_one_time_code(email, code).await,
        }
    }
}

/// Create a mail service based on configuration.
///
/// Unknown providers and incomplete HTTP API configuration fall back to the
/// mock so development setups run without mail credentials.
pub fn create_mail_service(config: &MailConfig) -> MailProvider {
    match config.provider.as_str() {
        "http-api" => match HttpApiMailService::new(config.clone()) {
            Ok(service) => MailProvider::HttpApi(service),
            Err(e) => {
                warn!(error = %e, "failed to initialize HTTP mail service, using mock");
                MailProvider::Mock(MockMailService::new())
            }
        },
        "mock" => MailProvider::Mock(MockMailService::new()),
        other => {
            warn!(provider = other, "unknown mail provider, using mock");
            MailProvider::Mock(MockMailService::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_provider_falls_back_to_mock() {
        let config = MailConfig {
            provider: "carrier-pigeon".to_string(),
            ..Default::default()
        };
        assert!(matches!(create_mail_service(&config), MailProvider::Mock(_)));
    }

    #[test]
    fn test_http_api_without_url_falls_back_to_mock() {
        let config = MailConfig {
            provider: "http-api".to_string(),
            api_url: String::new(),
            ..Default::default()
        };
        assert!(matches!(create_mail_service(&config), MailProvider::Mock(_)));
    }

    #[test]
    fn test_http_api_provider_selected() {
        let config = MailConfig {
            provider: "http-api".to_string(),
            api_url: "https://mail.example.com/v1/messages".to_string(),
            api_key: "key".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            create_mail_service(&config),
            MailProvider::HttpApi(_)
        ));
    }
}
