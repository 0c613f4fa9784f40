//! Handler for POST /api/auth/login

use actix_web::{web, HttpResponse};

use crate::dto::auth::{AccountResponse, LoginRequest};
use crate::error::domain_error_response;
use crate::state::AppState;
use tp_shared::types::ErrorBody;
use tp_shared::utils::email::normalize_email;

/// Authenticate with email and password
pub async fn login(state: web::Data<AppState>, request: web::Json<LoginRequest>) -> HttpResponse {
    let email = normalize_email(&request.email);

    if email.is_empty() || request.password.is_empty() {
        return HttpResponse::BadRequest().json(ErrorBody::new("Email and password are required"));
    }

    match state.auth_service.login(&email, &request.password).await {
        Ok(account) => HttpResponse::Ok().json(AccountResponse::from(account)),
        Err(err) => domain_error_response(&err),
    }
}
