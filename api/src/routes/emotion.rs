//! Emotion scan route

use actix_web::{web, HttpResponse};

use crate::dto::emotion::{ScanRequest, ScanResponse};
use crate::error::domain_error_response;
use crate::state::AppState;
use tp_shared::types::ErrorBody;

/// POST /api/emotion/scan
///
/// Classify a webcam frame. The scan itself never fails on bad input; it
/// degrades to neutral, so the dashboard always has something to show.
pub async fn scan_emotion(
    state: web::Data<AppState>,
    request: web::Json<ScanRequest>,
) -> HttpResponse {
    if request.user_id.is_empty() || request.image.is_empty() {
        return HttpResponse::BadRequest().json(ErrorBody::new("user_id and image are required"));
    }

    match state
        .emotion_service
        .scan(&request.user_id, &request.image)
        .await
    {
        Ok(outcome) => HttpResponse::Ok().json(ScanResponse::from(outcome)),
        Err(err) => domain_error_response(&err),
    }
}
