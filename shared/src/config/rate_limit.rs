//! Rate limiting configuration module

use serde::{Deserialize, Serialize};

/// Fixed-window rate limiting configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RateLimitConfig {
    /// Enable rate limiting
    pub enabled: bool,

    /// Window length in seconds
    pub window_seconds: u64,

    /// Max requests per IP per window on general API endpoints
    pub api_max_requests: u32,

    /// Max requests per IP per window on auth/OTP endpoints
    pub auth_max_requests: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            window_seconds: 15 * 60, // 15 minutes
            api_max_requests: 100,
            auth_max_requests: 10,
        }
    }
}

impl RateLimitConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            enabled: std::env::var("RATE_LIMIT_ENABLED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enabled),
            window_seconds: std::env::var("RATE_LIMIT_WINDOW_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.window_seconds),
            api_max_requests: std::env::var("RATE_LIMIT_API_MAX")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.api_max_requests),
            auth_max_requests: std::env::var("RATE_LIMIT_AUTH_MAX")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.auth_max_requests),
        }
    }

    /// Lenient limits for development
    pub fn development() -> Self {
        Self {
            api_max_requests: 1000,
            auth_max_requests: 100,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_limit_stricter_than_api() {
        let config = RateLimitConfig::default();
        assert!(config.auth_max_requests < config.api_max_requests);
        assert_eq!(config.window_seconds, 900);
    }
}
