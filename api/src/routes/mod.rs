//! Route registration.

pub mod auth;
pub mod emotion;
pub mod reminders;
pub mod tasks;

use actix_web::web;

/// Mount every API route. Literal paths are registered before
/// parameterized ones so `/tasks/emotion/log` is not swallowed by
/// `/tasks/{task_id}`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(
                web::scope("/auth")
                    .route("/signup", web::post().to(auth::signup::signup))
                    .route("/login", web::post().to(auth::login::login))
                    .route(
                        "/forgot-password",
                        web::post().to(auth::forgot_password::forgot_password),
                    )
                    .route(
                        "/verify-reset-code",
                        web::post().to(auth::verify_code::verify_reset_code),
                    )
                    .route(
                        "/reset-password",
                        web::post().to(auth::reset_password::reset_password),
                    ),
            )
            .service(
                web::scope("/tasks")
                    .route("/emotion/log", web::post().to(tasks::log_emotion))
                    .route("/emotion/history", web::get().to(tasks::emotion_history))
                    .route("", web::get().to(tasks::list_tasks))
                    .route("", web::post().to(tasks::create_task))
                    .route("/{task_id}", web::put().to(tasks::update_task))
                    .route("/{task_id}", web::delete().to(tasks::delete_task))
                    .route("/{task_id}/complete", web::patch().to(tasks::toggle_complete)),
            )
            .service(
                web::scope("/reminders")
                    .route("/dispatch", web::post().to(reminders::dispatch_reminders)),
            )
            .service(web::scope("/emotion").route("/scan", web::post().to(emotion::scan_emotion))),
    );
}
