use actix_web::{web, App, HttpServer};
use std::env;
use tracing::info;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use tp_api::{configure_app, AppState};
use tp_api::middleware::cors::create_cors;
use tp_core::services::password_reset::PasswordResetConfig;
use tp_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    info!("Starting TaskPrioritize API server");

    let config = AppConfig::from_env();

    let reset_config = PasswordResetConfig {
        code_length: env_or("RESET_CODE_LENGTH", 6),
        code_expiration_minutes: env_or("RESET_CODE_EXPIRY_MINUTES", 60),
        max_attempts: env_or("MAX_RESET_ATTEMPTS", 5),
    };

    let state = web::Data::new(
        AppState::build(&config, reset_config)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?,
    );

    let bind_address = config.server.bind_address();
    info!(bind_address = %bind_address, environment = %config.environment, "Server binding");

    let environment = config.environment;
    let server_config = config.server.clone();

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(TracingLogger::default())
            .wrap(create_cors(environment, &server_config))
            .configure(configure_app)
    })
    .bind(&bind_address)?
    .run()
    .await
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
