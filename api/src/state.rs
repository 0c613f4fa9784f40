//! Application state wiring concrete implementations to core services.

use std::sync::Arc;

use tp_core::services::auth::AuthService;
use tp_core::services::emotion::EmotionService;
use tp_core::services::password_reset::{PasswordResetConfig, PasswordResetService};
use tp_core::services::reminder::ReminderService;
use tp_core::services::tasks::TaskService;
use tp_infra::classifier::MockEmotionClassifier;
use tp_infra::notify::ChannelGateway;
use tp_infra::password::BcryptPasswordHasher;
use tp_infra::store::{
    InMemoryAccountRepository, InMemoryEmotionLogRepository, InMemoryTaskRepository,
    InMemoryTokenStore,
};
use tp_infra::InfrastructureError;
use tp_shared::config::AppConfig;

pub type ResetServiceImpl = PasswordResetService<InMemoryTokenStore, ChannelGateway>;
pub type AuthServiceImpl = AuthService<InMemoryAccountRepository, BcryptPasswordHasher>;
pub type TaskServiceImpl = TaskService<InMemoryTaskRepository>;
pub type ReminderServiceImpl =
    ReminderService<InMemoryTaskRepository, InMemoryAccountRepository, ChannelGateway>;
pub type EmotionServiceImpl = EmotionService<MockEmotionClassifier, InMemoryEmotionLogRepository>;

/// Shared services handed to every handler
pub struct AppState {
    pub reset_service: Arc<ResetServiceImpl>,
    pub auth_service: Arc<AuthServiceImpl>,
    pub task_service: Arc<TaskServiceImpl>,
    pub reminder_service: Arc<ReminderServiceImpl>,
    pub emotion_service: Arc<EmotionServiceImpl>,
}

impl AppState {
    /// Wire the full application from configuration.
    ///
    /// Stores are in-memory; notification providers come from the config
    /// and fall back to console mocks when absent.
    pub fn build(
        config: &AppConfig,
        reset_config: PasswordResetConfig,
    ) -> Result<Self, InfrastructureError> {
        let tokens = Arc::new(InMemoryTokenStore::new());
        let tasks = Arc::new(InMemoryTaskRepository::new());
        let accounts = Arc::new(InMemoryAccountRepository::new());
        let emotion_logs = Arc::new(InMemoryEmotionLogRepository::new());

        let gateway = Arc::new(ChannelGateway::from_config(&config.notification)?);
        let hasher = Arc::new(BcryptPasswordHasher::new());

        Ok(Self {
            reset_service: Arc::new(PasswordResetService::new(
                tokens,
                gateway.clone(),
                reset_config,
            )),
            auth_service: Arc::new(AuthService::new(accounts.clone(), hasher)),
            task_service: Arc::new(TaskService::new(tasks.clone())),
            reminder_service: Arc::new(ReminderService::new(tasks, accounts, gateway)),
            emotion_service: Arc::new(EmotionService::new(
                Arc::new(MockEmotionClassifier::new()),
                emotion_logs,
            )),
        })
    }
}
