//! Application configuration, assembled once in `main` from the environment
//! and handed to services at construction.

use hub_shared::config::{
    AuthConfig, CacheConfig, DatabaseConfig, Environment, MailConfig, RateLimitConfig,
    ServerConfig,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cache: CacheConfig,
    pub auth: AuthConfig,
    pub mail: MailConfig,
    pub rate_limit: RateLimitConfig,
}

impl Config {
    /// Load the full configuration from environment variables
    pub fn from_env() -> Self {
        let environment = Environment::from_env();

        Config {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            cache: CacheConfig::from_env(),
            auth: AuthConfig::from_env(),
            mail: MailConfig::from_env(),
            rate_limit: if environment.is_development() {
                RateLimitConfig::development()
            } else {
                RateLimitConfig::from_env()
            },
        }
    }

    pub fn is_development(&self) -> bool {
        self.environment.is_development()
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}
