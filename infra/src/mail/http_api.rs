//! HTTP mail API client
//!
//! Sends one-time-code messages through a REST mail provider (Mailgun-style
//! form POST with basic auth). Retries transient failures with exponential
//! backoff; client errors are not retried.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, error, info, warn};

use hub_core::errors::DomainError;
use hub_core::services::otp::MailService;
use hub_shared::config::MailConfig;
use hub_shared::utils::email::mask_email;

use crate::InfrastructureError;

/// HTTP mail API service implementation
pub struct HttpApiMailService {
    client: reqwest::Client,
    config: MailConfig,
}

impl HttpApiMailService {
    /// Create a new HTTP mail service
    pub fn new(config: MailConfig) -> Result<Self, InfrastructureError> {
        if config.api_url.is_empty() {
            return Err(InfrastructureError::Config(
                "MAIL_API_URL not set".to_string(),
            ));
        }
        if config.api_key.is_empty() {
            return Err(InfrastructureError::Config(
                "MAIL_API_KEY not set".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| InfrastructureError::Mail(format!("Failed to build client: {e}")))?;

        info!(from = %config.from_address, "HTTP mail service initialized");
        Ok(Self { client, config })
    }

    /// Render the message body. The code is interpolated here and nowhere
    /// else; it must not appear in logs.
    fn render_body(code: &str) -> String {
        format!(
            "Your verification code is: {code}\n\n\
             This code will expire in 10 minutes.\n\n\
             If you didn't request this verification, please ignore this email."
        )
    }

    async fn send_with_retry(&self, to: &str, body: &str) -> Result<String, DomainError> {
        let mut attempts = 0;
        let mut delay = Duration::from_millis(self.config.retry_delay_ms);

        loop {
            attempts += 1;
            debug!(
                attempt = attempts,
                max = self.config.max_retries,
                to = %mask_email(to),
                "sending mail"
            );

            let result = self
                .client
                .post(&self.config.api_url)
                .basic_auth("api", Some(&self.config.api_key))
                .form(&[
                    ("from", self.config.from_address.as_str()),
                    ("to", to),
                    ("subject", "Email Verification - Your OTP Code"),
                    ("text", body),
                ])
                .send()
                .await;

            match result {
                Ok(response) if response.status().is_success() => {
                    let message_id = response
                        .json::<serde_json::Value>()
                        .await
                        .ok()
                        .and_then(|v| v.get("id").and_then(|id| id.as_str().map(String::from)))
                        .unwrap_or_else(|| "unknown".to_string());

                    info!(to = %mask_email(to), message_id = %message_id, "mail accepted");
                    return Ok(message_id);
                }
                Ok(response) => {
                    let status = response.status();
                    error!(
                        to = %mask_email(to),
                        status = %status,
                        attempt = attempts,
                        "mail API rejected request"
                    );

                    // Client errors will not succeed on retry
                    if status.is_client_error() && status.as_u16() != 429 {
                        return Err(DomainError::internal(format!(
                            "Mail API rejected request with status {status}"
                        )));
                    }

                    if attempts >= self.config.max_retries {
                        return Err(DomainError::internal(format!(
                            "Mail dispatch failed after {attempts} attempts (status {status})"
                        )));
                    }
                }
                Err(e) => {
                    error!(
                        to = %mask_email(to),
                        error = %e,
                        attempt = attempts,
                        "mail API request failed"
                    );

                    if attempts >= self.config.max_retries {
                        return Err(DomainError::internal(format!(
                            "Mail dispatch failed after {attempts} attempts: {e}"
                        )));
                    }
                }
            }

            warn!(delay_ms = delay.as_millis() as u64, "retrying mail dispatch");
            tokio::time::sleep(delay).await;
            delay *= 2;
        }
    }
}

#[async_trait]
impl MailService for HttpApiMailService {
    async fn send_one_time_code(&self, email: &str, code: &str) -> Result<String, DomainError> {
        let body = Self::render_body(code);
        self.send_with_retry(email, &body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_requires_url_and_key() {
        let missing_url = MailConfig {
            provider: "http-api".to_string(),
            api_key: "key".to_string(),
            ..Default::default()
        };
        assert!(HttpApiMailService::new(missing_url).is_err());

        let missing_key = MailConfig {
            provider: "http-api".to_string(),
            api_url: "https://mail.example.com".to_string(),
            ..Default::default()
        };
        assert!(HttpApiMailService::new(missing_key).is_err());
    }

    #[test]
    fn test_body_contains_code_and_expiry() {
        let body = HttpApiMailService::render_body("123456");
        assert!(body.contains("123456"));
        assert!(body.contains("10 minutes"));
    }
}
