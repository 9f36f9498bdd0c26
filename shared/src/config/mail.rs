//! Outbound mail transport configuration

use serde::{Deserialize, Serialize};

/// Mail service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// Mail provider ("http-api" or "mock")
    pub provider: String,

    /// Base URL of the HTTP mail API
    pub api_url: String,

    /// API key for the mail provider
    pub api_key: String,

    /// From address for outbound messages
    pub from_address: String,

    /// Maximum retry attempts for failed requests
    pub max_retries: u32,

    /// Initial retry delay in milliseconds
    pub retry_delay_ms: u64,

    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            provider: String::from("mock"),
            api_url: String::new(),
            api_key: String::new(),
            from_address: String::from("no-reply@campushub.local"),
            max_retries: 3,
            retry_delay_ms: 1000,
            request_timeout_secs: 30,
        }
    }
}

impl MailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            provider: std::env::var("MAIL_PROVIDER").unwrap_or(defaults.provider),
            api_url: std::env::var("MAIL_API_URL").unwrap_or(defaults.api_url),
            api_key: std::env::var("MAIL_API_KEY").unwrap_or(defaults.api_key),
            from_address: std::env::var("MAIL_FROM_ADDRESS").unwrap_or(defaults.from_address),
            max_retries: std::env::var("MAIL_MAX_RETRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_retries),
            retry_delay_ms: std::env::var("MAIL_RETRY_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.retry_delay_ms),
            request_timeout_secs: std::env::var("MAIL_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
        }
    }
}
