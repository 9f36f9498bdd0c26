//! Application factory
//!
//! Builds the actix-web App from the shared state and configuration: route
//! tree, middleware (CORS, rate limiting, JWT auth), and the fallback
//! handlers.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{middleware::Logger, web, App, HttpResponse};

use hub_core::repositories::{OtpRepository, UserRepository};
use hub_core::services::otp::MailService;
use hub_shared::types::response::ApiResponse;

use crate::config::Config;
use crate::middleware::cors::create_cors;
use crate::middleware::{JwtAuth, RateLimiter};
use crate::routes;
use crate::state::AppState;

/// Create and configure the application with all routes and middleware
pub fn create_app<U, O, M>(
    app_state: web::Data<AppState<U, O, M>>,
    config: &Config,
    redis_client: Option<Arc<redis::Client>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    M: MailService + 'static,
{
    let jwt = JwtAuth::new(&config.auth.jwt);
    let limiter_api = RateLimiter::general(redis_client.clone(), &config.rate_limit);
    let limiter_auth = RateLimiter::auth(redis_client, &config.rate_limit);
    let cors = create_cors(config.environment, &config.server.allowed_origins);

    // Malformed JSON bodies get the uniform envelope too
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(ApiResponse::error(message)),
        )
        .into()
    });

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API routes
        .service(
            web::scope("/api")
                .wrap(limiter_api)
                // Auth routes (stricter rate limit)
                .service(
                    web::scope("/auth")
                        .wrap(limiter_auth.clone())
                        .route("/register", web::post().to(routes::auth::register::<U, O, M>))
                        .route("/login", web::post().to(routes::auth::login::<U, O, M>))
                        .route(
                            "/login-otp",
                            web::post().to(routes::auth::send_login_otp::<U, O, M>),
                        )
                        .route(
                            "/verify-login-otp",
                            web::post().to(routes::auth::verify_login_otp::<U, O, M>),
                        ),
                )
                // Signup OTP routes (stricter rate limit)
                .service(
                    web::scope("/otp")
                        .wrap(limiter_auth)
                        .route("/send", web::post().to(routes::otp::send_otp::<U, O, M>))
                        .route("/verify", web::post().to(routes::otp::verify_otp::<U, O, M>)),
                )
                // User directory (authenticated)
                .service(
                    web::scope("/users")
                        .wrap(jwt.clone())
                        .service(
                            web::resource("/profile")
                                .route(web::get().to(routes::users::get_profile::<U, O, M>))
                                .route(web::put().to(routes::users::update_profile::<U, O, M>)),
                        )
                        .route("", web::get().to(routes::users::list::<U, O, M>))
                        .route("/{id}", web::get().to(routes::users::get_by_id::<U, O, M>)),
                )
                // Marketplace items (public reads, authenticated mutation)
                .service(
                    web::scope("/items")
                        .service(
                            web::resource("")
                                .route(web::get().to(routes::items::list::<U, O, M>))
                                .route(
                                    web::post()
                                        .to(routes::items::create::<U, O, M>)
                                        .wrap(jwt.clone()),
                                ),
                        )
                        .service(
                            web::resource("/{id}")
                                .route(web::get().to(routes::items::get_by_id::<U, O, M>))
                                .route(
                                    web::put()
                                        .to(routes::items::update::<U, O, M>)
                                        .wrap(jwt.clone()),
                                )
                                .route(
                                    web::delete()
                                        .to(routes::items::delete::<U, O, M>)
                                        .wrap(jwt.clone()),
                                ),
                        ),
                )
                // Forums and posts (authenticated)
                .service(
                    web::scope("/forums")
                        .wrap(jwt.clone())
                        .service(
                            web::resource("")
                                .route(web::get().to(routes::forums::list::<U, O, M>))
                                .route(web::post().to(routes::forums::create::<U, O, M>)),
                        )
                        .route(
                            "/posts/{id}/like",
                            web::post().to(routes::forums::like_post::<U, O, M>),
                        )
                        .route(
                            "/posts/{id}/comment",
                            web::post().to(routes::forums::add_comment::<U, O, M>),
                        )
                        .route("/{id}", web::get().to(routes::forums::get_by_id::<U, O, M>))
                        .route("/{id}/join", web::post().to(routes::forums::join::<U, O, M>))
                        .service(
                            web::resource("/{id}/posts")
                                .route(web::get().to(routes::forums::list_posts::<U, O, M>))
                                .route(web::post().to(routes::forums::create_post::<U, O, M>)),
                        ),
                )
                // Projects (authenticated)
                .service(
                    web::scope("/projects")
                        .wrap(jwt)
                        .service(
                            web::resource("")
                                .route(web::get().to(routes::projects::list::<U, O, M>))
                                .route(web::post().to(routes::projects::create::<U, O, M>)),
                        )
                        .service(
                            web::resource("/{id}")
                                .route(web::get().to(routes::projects::get_by_id::<U, O, M>))
                                .route(web::put().to(routes::projects::update::<U, O, M>))
                                .route(web::delete().to(routes::projects::delete::<U, O, M>)),
                        )
                        .route("/{id}/like", web::post().to(routes::projects::like::<U, O, M>)),
                )
                // API index
                .route("", web::get().to(api_info)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "campushub-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// API index endpoint
async fn api_info() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "success",
        "message": "CampusHub API v1.0",
        "endpoints": {
            "auth": "/api/auth",
            "otp": "/api/otp",
            "users": "/api/users",
            "items": "/api/items",
            "forums": "/api/forums",
            "projects": "/api/projects",
            "health": "/health"
        }
    }))
}

/// Fallback 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error("The requested resource was not found"))
}
