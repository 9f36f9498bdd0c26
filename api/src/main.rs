//! CampusHub API server entry point.
//!
//! Loads configuration, connects the datastore, wires repositories and
//! services together, spawns the OTP reaper, and starts the HTTP server.

use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::{info, warn};

use hub_api::app::create_app;
use hub_api::config::Config;
use hub_api::state::AppState;
use hub_core::services::auth::{AuthService, AuthServiceConfig};
use hub_core::services::otp::OtpService;
use hub_core::services::token::TokenService;
use hub_infra::database::{
    create_pool, MySqlForumRepository, MySqlItemRepository, MySqlOtpRepository,
    MySqlPostRepository, MySqlProjectRepository, MySqlUserRepository,
};
use hub_infra::mail::create_mail_service;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting CampusHub API server");

    let config = Config::from_env();
    if config.is_production() && config.auth.jwt.is_using_default_secret() {
        panic!("JWT_SECRET must be set in production");
    }

    // Datastore
    let pool = create_pool(&config.database)
        .await
        .unwrap_or_else(|e| panic!("Failed to initialize database: {e}"));

    // Repositories
    let users = Arc::new(MySqlUserRepository::new(pool.clone()));
    let otp_repository = Arc::new(MySqlOtpRepository::new(pool.clone()));
    let items = Arc::new(MySqlItemRepository::new(pool.clone()));
    let forums = Arc::new(MySqlForumRepository::new(pool.clone()));
    let posts = Arc::new(MySqlPostRepository::new(pool.clone()));
    let projects = Arc::new(MySqlProjectRepository::new(pool.clone()));

    // Services
    let mail_service = Arc::new(create_mail_service(&config.mail));
    let otp_service = Arc::new(OtpService::new(
        otp_repository,
        mail_service,
        config.auth.otp.clone().into(),
    ));
    let token_service = Arc::new(TokenService::new(config.auth.jwt.clone().into()));
    let auth_service = Arc::new(AuthService::new(
        users.clone(),
        otp_service.clone(),
        token_service,
        AuthServiceConfig::default(),
    ));

    // Background reaper for TTL-lapsed codes. Lookup correctness never
    // depends on it; it bounds storage.
    let reaper = otp_service.clone();
    let reap_interval = config.auth.otp.reap_interval_seconds;
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(reap_interval));
        loop {
            interval.tick().await;
            if let Err(e) = reaper.reap_expired().await {
                warn!("OTP reap failed: {e}");
            }
        }
    });

    // Redis backs the rate-limit counters
    let redis_client = match redis::Client::open(config.cache.url.as_str()) {
        Ok(client) => Some(Arc::new(client)),
        Err(e) => {
            warn!("Redis unavailable, rate limiting disabled: {e}");
            None
        }
    };

    let app_state = web::Data::new(AppState {
        auth_service,
        users,
        items,
        forums,
        posts,
        projects,
    });

    let bind_address = config.server.bind_address();
    info!("Server listening on {bind_address}");

    HttpServer::new(move || create_app(app_state.clone(), &config, redis_client.clone()))
        .bind(&bind_address)?
        .run()
        .await
}
