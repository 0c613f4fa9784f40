//! Repository interfaces for persistence, plus in-memory mocks for tests.

pub mod account;
pub mod emotion_log;
pub mod task;
pub mod token_store;

pub use account::{AccountRepository, MockAccountRepository};
pub use emotion_log::{EmotionLogRepository, MockEmotionLogRepository};
pub use task::{MockTaskRepository, ReminderScope, TaskRepository};
pub use token_store::{MockTokenStore, TokenStore};
