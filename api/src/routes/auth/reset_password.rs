//! Handler for POST /api/auth/reset-password

use actix_web::{web, HttpResponse};

use crate::dto::auth::{ResetPasswordRequest, ResetPasswordResponse};
use crate::error::domain_error_response;
use crate::state::AppState;
use tp_core::errors::DomainError;
use tp_shared::types::ErrorBody;
use tp_shared::utils::email::{mask_email, normalize_email};
use tp_shared::utils::password::is_strong_password;

/// Finalize a reset: consume the verified token and rotate the credential.
pub async fn reset_password(
    state: web::Data<AppState>,
    request: web::Json<ResetPasswordRequest>,
) -> HttpResponse {
    let email = normalize_email(&request.email);
    let code = request.code.trim();
    let new_password = request.new_password.as_str();

    if email.is_empty() || code.is_empty() || new_password.is_empty() {
        return HttpResponse::BadRequest().json(ErrorBody::new("All fields are required"));
    }

    if !is_strong_password(new_password) {
        return HttpResponse::BadRequest().json(ErrorBody::new("Weak password"));
    }

    // Consume the token first; only a verified, unexpired, code-matching
    // record lets the credential change through.
    if let Err(err) = state.reset_service.finalize(&email, code).await {
        return domain_error_response(&err);
    }

    match state.auth_service.update_password(&email, new_password).await {
        Ok(()) => {}
        // A reset for an address with no account completes quietly: the
        // token flow already succeeded and account existence stays hidden.
        Err(DomainError::NotFound { .. }) => {
            tracing::warn!(
                email = %mask_email(&email),
                event = "reset_without_account",
                "Reset finalized for an address with no account"
            );
        }
        Err(err) => return domain_error_response(&err),
    }

    HttpResponse::Ok().json(ResetPasswordResponse {
        message: "Password reset successful".to_string(),
        redirect: "/login.html".to_string(),
    })
}
