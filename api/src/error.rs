//! Mapping from domain errors to HTTP responses.
//!
//! The wire format is the original frontend's contract: failing endpoints
//! answer `{ "error": "<message>" }` with the status the frontend expects
//! (404 for a missing reset request, 400 for everything user-correctable).

use actix_web::HttpResponse;

use tp_core::errors::{DomainError, ResetError};
use tp_shared::types::ErrorBody;

/// Render a domain error as the appropriate HTTP response
pub fn domain_error_response(err: &DomainError) -> HttpResponse {
    match err {
        DomainError::Reset(reset) => reset_error_response(reset),
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ErrorBody::new(message.clone()))
        }
        DomainError::NotFound { resource } => {
            HttpResponse::NotFound().json(ErrorBody::new(format!("{resource} not found")))
        }
        DomainError::AuthenticationFailed => {
            HttpResponse::Unauthorized().json(ErrorBody::new("Invalid email or password"))
        }
        DomainError::Internal { .. } => {
            // Detail stays in the logs
            tracing::error!(error = %err, "Internal error while handling request");
            HttpResponse::InternalServerError().json(ErrorBody::new("Internal server error"))
        }
    }
}

fn reset_error_response(err: &ResetError) -> HttpResponse {
    match err {
        ResetError::NotFound => HttpResponse::NotFound().json(ErrorBody::new(err.to_string())),
        ResetError::Expired
        | ResetError::AttemptsExhausted
        | ResetError::InvalidCode { .. }
        | ResetError::InvalidRequest => {
            HttpResponse::BadRequest().json(ErrorBody::new(err.to_string()))
        }
    }
}
