//! Emotion log repository trait.

use async_trait::async_trait;

use crate::domain::entities::emotion_log::EmotionLog;
use crate::errors::DomainError;

/// Append-only store of emotion scans, queried for dashboard analytics
#[async_trait]
pub trait EmotionLogRepository: Send + Sync {
    /// Append a scan record
    async fn append(&self, log: EmotionLog) -> Result<EmotionLog, DomainError>;

    /// List scans for a subject, newest first
    async fn list_by_owner(&self, owner: &str) -> Result<Vec<EmotionLog>, DomainError>;
}
