//! Shared utilities and common types for the CampusHub server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - The uniform API response envelope
//! - Utility functions (email/coordinate validation, masking)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AuthConfig, CacheConfig, DatabaseConfig, Environment, JwtConfig, MailConfig, OtpConfig,
    RateLimitConfig, ServerConfig,
};
pub use types::{ApiResponse, FieldViolation, ResponseStatus};
pub use utils::{email, validation};
