//! Shared setup for API integration tests: the full app factory running
//! against the in-memory repositories and the mock mail transport.

use std::sync::Arc;

use actix_web::web;

use hub_api::config::Config;
use hub_api::state::AppState;
use hub_core::repositories::{
    MockForumRepository, MockItemRepository, MockOtpRepository, MockPostRepository,
    MockProjectRepository, MockUserRepository,
};
use hub_core::services::auth::{AuthService, AuthServiceConfig};
use hub_core::services::otp::{OtpService, OtpServiceConfig};
use hub_core::services::token::TokenService;
use hub_infra::mail::MockMailService;
use hub_shared::config::{
    AuthConfig, CacheConfig, DatabaseConfig, Environment, JwtConfig, MailConfig, OtpConfig,
    RateLimitConfig, ServerConfig,
};

pub type TestState = AppState<MockUserRepository, MockOtpRepository, MockMailService>;

pub struct TestContext {
    pub state: web::Data<TestState>,
    pub mail: Arc<MockMailService>,
    pub config: Config,
}

pub fn test_context() -> TestContext {
    let jwt = JwtConfig::new("test-secret");

    let users = Arc::new(MockUserRepository::new());
    let otp_repository = Arc::new(MockOtpRepository::new());
    let mail = Arc::new(MockMailService::new());
    let otp_service = Arc::new(OtpService::new(
        otp_repository,
        mail.clone(),
        OtpServiceConfig::default(),
    ));
    let token_service = Arc::new(TokenService::new(jwt.clone().into()));
    let auth_service = Arc::new(AuthService::new(
        users.clone(),
        otp_service,
        token_service,
        AuthServiceConfig::fast_for_tests(),
    ));

    let state = web::Data::new(AppState {
        auth_service,
        users,
        items: Arc::new(MockItemRepository::new()),
        forums: Arc::new(MockForumRepository::new()),
        posts: Arc::new(MockPostRepository::new()),
        projects: Arc::new(MockProjectRepository::new()),
    });

    let config = Config {
        environment: Environment::Development,
        server: ServerConfig::default(),
        database: DatabaseConfig::default(),
        cache: CacheConfig::default(),
        auth: AuthConfig {
            jwt,
            otp: OtpConfig::default(),
        },
        mail: MailConfig::default(),
        rate_limit: RateLimitConfig {
            enabled: false,
            ..Default::default()
        },
    };

    TestContext {
        state,
        mail,
        config,
    }
}
