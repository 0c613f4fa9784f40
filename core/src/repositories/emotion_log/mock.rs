//! Mock implementation of EmotionLogRepository for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::emotion_log::EmotionLog;
use crate::errors::DomainError;

use super::trait_::EmotionLogRepository;

/// In-memory emotion log for tests
#[derive(Default)]
pub struct MockEmotionLogRepository {
    logs: Arc<RwLock<Vec<EmotionLog>>>,
}

impl MockEmotionLogRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmotionLogRepository for MockEmotionLogRepository {
    async fn append(&self, log: EmotionLog) -> Result<EmotionLog, DomainError> {
        self.logs.write().await.push(log.clone());
        Ok(log)
    }

    async fn list_by_owner(&self, owner: &str) -> Result<Vec<EmotionLog>, DomainError> {
        let logs = self.logs.read().await;
        let mut owned: Vec<EmotionLog> =
            logs.iter().filter(|l| l.owner == owner).cloned().collect();
        owned.sort_by(|a, b| b.scanned_at.cmp(&a.scanned_at));
        Ok(owned)
    }
}
