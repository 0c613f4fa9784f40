//! Handler for POST /api/auth/signup

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{AccountResponse, SignupRequest};
use crate::error::domain_error_response;
use crate::state::AppState;
use tp_shared::types::ErrorBody;
use tp_shared::utils::email::{is_valid_email, normalize_email};
use tp_shared::utils::password::is_strong_password;
use tp_shared::utils::phone::is_valid_phone_number;

/// Register a new account
pub async fn signup(
    state: web::Data<AppState>,
    request: web::Json<SignupRequest>,
) -> HttpResponse {
    if request.validate().is_err() {
        return HttpResponse::BadRequest().json(ErrorBody::new("Email and password are required"));
    }

    let email = normalize_email(&request.email);
    if !is_valid_email(&email) {
        return HttpResponse::BadRequest().json(ErrorBody::new("Invalid email format"));
    }

    if !is_strong_password(&request.password) {
        return HttpResponse::BadRequest().json(ErrorBody::new("Weak password"));
    }

    if let Some(phone) = request.phone.as_deref() {
        if !is_valid_phone_number(phone) {
            return HttpResponse::BadRequest().json(ErrorBody::new("Invalid phone format"));
        }
    }

    match state
        .auth_service
        .register(
            email,
            &request.password,
            request.phone.clone(),
            request.notification_preference,
        )
        .await
    {
        Ok(account) => HttpResponse::Created().json(AccountResponse::from(account)),
        Err(err) => domain_error_response(&err),
    }
}
