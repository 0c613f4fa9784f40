//! Task management routes

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::dto::emotion::{EmotionLogResponse, LogEmotionRequest};
use crate::dto::tasks::{CreateTaskRequest, TaskResponse, UpdateTaskRequest};
use crate::error::domain_error_response;
use crate::state::AppState;
use tp_shared::types::{ApiResponse, ErrorBody};

#[derive(Debug, Deserialize)]
pub struct OwnerQuery {
    #[serde(default)]
    pub user_id: String,
}

/// GET /api/tasks?user_id=...
pub async fn list_tasks(
    state: web::Data<AppState>,
    query: web::Query<OwnerQuery>,
) -> HttpResponse {
    if query.user_id.is_empty() {
        return HttpResponse::BadRequest().json(ErrorBody::new("user_id is required"));
    }

    match state.task_service.list(&query.user_id).await {
        Ok(tasks) => HttpResponse::Ok()
            .json(tasks.into_iter().map(TaskResponse::from).collect::<Vec<_>>()),
        Err(err) => domain_error_response(&err),
    }
}

/// POST /api/tasks
pub async fn create_task(
    state: web::Data<AppState>,
    request: web::Json<CreateTaskRequest>,
) -> HttpResponse {
    let request = request.into_inner();

    if request.title.is_empty() || request.user_id.is_empty() {
        return HttpResponse::BadRequest().json(ErrorBody::new("title and user_id are required"));
    }

    let owner = request.user_id.clone();
    let title = request.title.clone();

    match state
        .task_service
        .create(owner, title, request.into_attrs())
        .await
    {
        Ok(task) => HttpResponse::Created().json(TaskResponse::from(task)),
        Err(err) => domain_error_response(&err),
    }
}

/// PUT /api/tasks/{task_id}
pub async fn update_task(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateTaskRequest>,
) -> HttpResponse {
    let task_id = path.into_inner();

    match state
        .task_service
        .update(task_id, request.into_inner().into())
        .await
    {
        Ok(task) => HttpResponse::Ok().json(TaskResponse::from(task)),
        Err(err) => domain_error_response(&err),
    }
}

/// DELETE /api/tasks/{task_id}
pub async fn delete_task(state: web::Data<AppState>, path: web::Path<Uuid>) -> HttpResponse {
    match state.task_service.delete(path.into_inner()).await {
        Ok(()) => {
            HttpResponse::Ok().json(ApiResponse::<()>::message_only("Task deleted successfully"))
        }
        Err(err) => domain_error_response(&err),
    }
}

/// PATCH /api/tasks/{task_id}/complete
pub async fn toggle_complete(state: web::Data<AppState>, path: web::Path<Uuid>) -> HttpResponse {
    match state.task_service.toggle_complete(path.into_inner()).await {
        Ok(task) => HttpResponse::Ok().json(TaskResponse::from(task)),
        Err(err) => domain_error_response(&err),
    }
}

/// POST /api/tasks/emotion/log
pub async fn log_emotion(
    state: web::Data<AppState>,
    request: web::Json<LogEmotionRequest>,
) -> HttpResponse {
    if request.user_id.is_empty() {
        return HttpResponse::BadRequest().json(ErrorBody::new("user_id and emotion are required"));
    }

    match state
        .emotion_service
        .log_scan(request.user_id.clone(), request.emotion, request.confidence)
        .await
    {
        Ok(log) => HttpResponse::Created().json(EmotionLogResponse::from(log)),
        Err(err) => domain_error_response(&err),
    }
}

/// GET /api/tasks/emotion/history?user_id=...
pub async fn emotion_history(
    state: web::Data<AppState>,
    query: web::Query<OwnerQuery>,
) -> HttpResponse {
    if query.user_id.is_empty() {
        return HttpResponse::BadRequest().json(ErrorBody::new("user_id is required"));
    }

    match state.emotion_service.history(&query.user_id).await {
        Ok(logs) => HttpResponse::Ok().json(
            logs.into_iter()
                .map(EmotionLogResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(err) => domain_error_response(&err),
    }
}
