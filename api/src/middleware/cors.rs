//! CORS middleware configuration.
//!
//! Development allows any origin for easy local testing; production
//! restricts to the origins listed in `ALLOWED_ORIGINS`.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use hub_shared::config::Environment;

/// Creates a CORS middleware instance for the given environment
pub fn create_cors(environment: Environment, allowed_origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
        ])
        .max_age(3600);

    if environment.is_production() {
        let mut cors = cors;
        for origin in allowed_origins {
            log::info!("allowing CORS origin: {origin}");
            cors = cors.allowed_origin(origin);
        }
        cors
    } else {
        cors.allow_any_origin()
    }
}
