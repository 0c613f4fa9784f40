//! Handler for POST /api/auth/forgot-password

use actix_web::{web, HttpResponse};

use crate::dto::auth::{ForgotPasswordRequest, ForgotPasswordResponse};
use crate::error::domain_error_response;
use crate::state::AppState;
use tp_shared::types::ErrorBody;
use tp_shared::utils::email::{is_valid_email, normalize_email};

/// Start a password reset: issue a token and email the code.
///
/// Always answers 200 for a well-formed email. Whether an account exists
/// is not revealed; the token is issued either way and the dispatcher's
/// fallback delivers to the address itself.
pub async fn forgot_password(
    state: web::Data<AppState>,
    request: web::Json<ForgotPasswordRequest>,
) -> HttpResponse {
    let email = normalize_email(&request.email);

    if email.is_empty() {
        return HttpResponse::BadRequest().json(ErrorBody::new("Email is required"));
    }

    if !is_valid_email(&email) {
        return HttpResponse::BadRequest().json(ErrorBody::new("Invalid email format"));
    }

    match state.reset_service.issue(&email).await {
        Ok(outcome) => HttpResponse::Ok().json(ForgotPasswordResponse {
            message: "Reset code sent to email".to_string(),
            reset_token: outcome.token.correlation_token.clone(),
            expires_in: outcome.expires_in_seconds(),
        }),
        Err(err) => domain_error_response(&err),
    }
}
