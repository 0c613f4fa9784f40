//! CORS middleware configuration for cross-origin requests.
//!
//! The course frontend is plain HTML/JS, often opened straight from the
//! filesystem, so development CORS is permissive. Production restricts
//! origins to the configured list.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use tp_shared::config::{Environment, ServerConfig};

/// Creates a CORS middleware instance for the current environment
pub fn create_cors(environment: Environment, server: &ServerConfig) -> Cors {
    if environment.is_production() {
        create_production_cors(&server.cors_origins)
    } else {
        create_development_cors()
    }
}

/// Permissive CORS for development: any origin, standard methods
fn create_development_cors() -> Cors {
    tracing::info!("Configuring CORS for development environment");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE, header::ORIGIN])
        .max_age(3600)
}

/// Restrictive CORS for production: only configured origins
fn create_production_cors(origins: &[String]) -> Cors {
    tracing::info!("Configuring CORS for production environment");

    let mut cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE, header::ORIGIN])
        .max_age(3600);

    for origin in origins {
        tracing::info!(origin = %origin, "Adding allowed origin");
        cors = cors.allowed_origin(origin);
    }

    cors
}
