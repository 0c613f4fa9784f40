//! Handler for POST /api/auth/verify-reset-code

use actix_web::{web, HttpResponse};

use crate::dto::auth::{VerifyResetCodeRequest, VerifyResetCodeResponse};
use crate::error::domain_error_response;
use crate::state::AppState;
use tp_shared::types::ErrorBody;
use tp_shared::utils::email::normalize_email;

/// Check a reset code without consuming the token.
///
/// A correct code flips the token to verified so the frontend can collect
/// the new password; the attempt is spent either way.
pub async fn verify_reset_code(
    state: web::Data<AppState>,
    request: web::Json<VerifyResetCodeRequest>,
) -> HttpResponse {
    let email = normalize_email(&request.email);
    let code = request.code.trim();

    if email.is_empty() || code.is_empty() {
        return HttpResponse::BadRequest().json(ErrorBody::new("Email and code required"));
    }

    match state.reset_service.verify_code(&email, code).await {
        Ok(()) => HttpResponse::Ok().json(VerifyResetCodeResponse {
            message: "Code verified successfully".to_string(),
            verified: true,
        }),
        Err(err) => domain_error_response(&err),
    }
}
