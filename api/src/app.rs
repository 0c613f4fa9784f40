//! Application factory
//!
//! Registers routes, the health endpoint and the default 404 handler on a
//! `ServiceConfig`, so the real binary and the test harness build the same
//! application.

use actix_web::{web, HttpResponse};

use crate::routes;
use tp_shared::types::ErrorBody;

/// Register every endpoint of the API
pub fn configure_app(cfg: &mut web::ServiceConfig) {
    routes::configure(cfg);

    cfg.route("/health", web::get().to(health_check))
        .default_service(web::route().to(not_found));
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "task-prioritize-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorBody::new("Not found"))
}
