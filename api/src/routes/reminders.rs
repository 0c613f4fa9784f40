//! Reminder dispatch route

use actix_web::{web, HttpResponse};
use chrono::Utc;

use crate::dto::reminders::{DispatchRequest, DispatchResponse};
use crate::error::domain_error_response;
use crate::state::AppState;
use tp_core::services::reminder::ReminderScope;

/// POST /api/reminders/dispatch
///
/// On-demand trigger for a dispatch pass; deployments point a cron job at
/// this endpoint. The pass itself decides what is due as of "now".
pub async fn dispatch_reminders(
    state: web::Data<AppState>,
    request: web::Json<DispatchRequest>,
) -> HttpResponse {
    let scope = match &request.user_id {
        Some(user_id) if !user_id.is_empty() => ReminderScope::Owner(user_id.clone()),
        _ => ReminderScope::All,
    };

    match state
        .reminder_service
        .dispatch_due(&scope, Utc::now())
        .await
    {
        Ok(summary) => HttpResponse::Ok().json(DispatchResponse::from(summary)),
        Err(err) => domain_error_response(&err),
    }
}
