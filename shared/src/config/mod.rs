//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - JWT and OTP configuration
//! - `cache` - Redis configuration (rate limiting counters)
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection
//! - `mail` - Outbound mail transport configuration
//! - `rate_limit` - Request-count window limits
//! - `server` - HTTP server configuration

pub mod auth;
pub mod cache;
pub mod database;
pub mod environment;
pub mod mail;
pub mod rate_limit;
pub mod server;

// Re-export commonly used types
pub use auth::{AuthConfig, JwtConfig, OtpConfig};
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use mail::MailConfig;
pub use rate_limit::RateLimitConfig;
pub use server::ServerConfig;
