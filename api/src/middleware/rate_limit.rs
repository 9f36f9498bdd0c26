//! Rate limiting middleware.
//!
//! Fixed request-count windows per client IP, counted in Redis so limits
//! hold across instances sharing the store. Auth/OTP scopes run with a
//! stricter limit than the general API. When Redis is unavailable the
//! middleware fails open: an outage of the counter store must not take the
//! API down with it.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ResponseError,
    http::StatusCode,
    Error, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use redis::AsyncCommands;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};
use thiserror::Error as ThisError;

use hub_shared::config::RateLimitConfig;
use hub_shared::types::response::ApiResponse;

/// Rejection carrying the scope-specific breach message
#[derive(Debug, ThisError)]
#[error("{message}")]
struct RateLimitRejection {
    message: String,
}

impl ResponseError for RateLimitRejection {
    fn status_code(&self) -> StatusCode {
        StatusCode::TOO_MANY_REQUESTS
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::TooManyRequests().json(ApiResponse::error(self.message.clone()))
    }
}

/// Rate limiter middleware factory for one scope (general API or auth)
#[derive(Clone)]
pub struct RateLimiter {
    client: Option<Arc<redis::Client>>,
    scope: &'static str,
    max_requests: u32,
    window_seconds: u64,
    message: &'static str,
}

impl RateLimiter {
    /// Limiter for general API endpoints
    pub fn general(client: Option<Arc<redis::Client>>, config: &RateLimitConfig) -> Self {
        Self {
            client: if config.enabled { client } else { None },
            scope: "api",
            max_requests: config.api_max_requests,
            window_seconds: config.window_seconds,
            message: "Too many requests from this IP, please try again later.",
        }
    }

    /// Stricter limiter for auth and OTP endpoints
    pub fn auth(client: Option<Arc<redis::Client>>, config: &RateLimitConfig) -> Self {
        Self {
            client: if config.enabled { client } else { None },
            scope: "auth",
            max_requests: config.auth_max_requests,
            window_seconds: config.window_seconds,
            message: "Too many authentication attempts, please try again later.",
        }
    }

    /// A limiter that never rejects, for tests and setups without Redis
    pub fn disabled() -> Self {
        Self {
            client: None,
            scope: "api",
            max_requests: 0,
            window_seconds: 0,
            message: "",
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RateLimiter
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimiterMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimiterMiddleware {
            service: Rc::new(service),
            limiter: self.clone(),
        }))
    }
}

/// Rate limiter middleware service
pub struct RateLimiterMiddleware<S> {
    service: Rc<S>,
    limiter: RateLimiter,
}

impl<S, B> Service<ServiceRequest> for RateLimiterMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let limiter = self.limiter.clone();

        Box::pin(async move {
            if let Some(client) = &limiter.client {
                let ip = extract_client_ip(&req);
                match over_limit(client, limiter.scope, &ip, limiter.max_requests, limiter.window_seconds).await {
                    Ok(true) => {
                        log::warn!(
                            "rate limit breached: scope={} ip={}",
                            limiter.scope,
                            ip
                        );
                        return Err(RateLimitRejection {
                            message: limiter.message.to_string(),
                        }
                        .into());
                    }
                    Ok(false) => {}
                    Err(e) => {
                        // Counter store down: let the request through
                        log::warn!("rate limiter unavailable, allowing request: {e}");
                    }
                }
            }

            service.call(req).await
        })
    }
}

/// Check and bump the fixed-window counter for an identifier
async fn over_limit(
    client: &redis::Client,
    scope: &str,
    ip: &str,
    max_requests: u32,
    window_seconds: u64,
) -> Result<bool, redis::RedisError> {
    let mut conn = client.get_multiplexed_async_connection().await?;
    let key = format!("rate_limit:{scope}:{ip}");

    let count: Option<u32> = conn.get(&key).await?;
    match count {
        Some(current) if current >= max_requests => Ok(true),
        Some(_) => {
            let _: u32 = conn.incr(&key, 1).await?;
            Ok(false)
        }
        None => {
            // First request in the window starts the clock
            conn.set_ex::<_, _, ()>(&key, 1u32, window_seconds).await?;
            Ok(false)
        }
    }
}

/// Extract the client IP, honoring reverse-proxy headers
pub(crate) fn extract_client_ip(req: &ServiceRequest) -> String {
    if let Some(forwarded_for) = req.headers().get("X-Forwarded-For") {
        if let Ok(forwarded_str) = forwarded_for.to_str() {
            if let Some(ip) = forwarded_str.split(',').next() {
                return ip.trim().to_string();
            }
        }
    }

    if let Some(real_ip) = req.headers().get("X-Real-IP") {
        if let Ok(ip_str) = real_ip.to_str() {
            return ip_str.to_string();
        }
    }

    req.connection_info()
        .peer_addr()
        .unwrap_or("unknown")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_extract_client_ip_prefers_forwarded_for() {
        let req = TestRequest::default()
            .insert_header(("X-Forwarded-For", "203.0.113.7, 10.0.0.1"))
            .insert_header(("X-Real-IP", "10.0.0.2"))
            .to_srv_request();
        assert_eq!(extract_client_ip(&req), "203.0.113.7");
    }

    #[test]
    fn test_extract_client_ip_real_ip_fallback() {
        let req = TestRequest::default()
            .insert_header(("X-Real-IP", "10.0.0.2"))
            .to_srv_request();
        assert_eq!(extract_client_ip(&req), "10.0.0.2");
    }
}
