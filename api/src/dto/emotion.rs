//! Emotion scan DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tp_core::domain::entities::emotion_log::{EmotionLabel, EmotionLog};
use tp_core::services::emotion::ScanOutcome;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanRequest {
    #[serde(default)]
    pub user_id: String,
    /// Base64-encoded JPEG frame from the webcam
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResponse {
    pub emotion: EmotionLabel,
    pub confidence: f64,
    pub message: String,
}

impl From<ScanOutcome> for ScanResponse {
    fn from(outcome: ScanOutcome) -> Self {
        Self {
            emotion: outcome.emotion,
            confidence: outcome.confidence,
            message: outcome.message,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEmotionRequest {
    #[serde(default)]
    pub user_id: String,
    pub emotion: EmotionLabel,
    #[serde(default)]
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionLogResponse {
    pub id: Uuid,
    pub user_id: String,
    pub emotion: EmotionLabel,
    pub confidence: f64,
    pub scanned_at: DateTime<Utc>,
}

impl From<EmotionLog> for EmotionLogResponse {
    fn from(log: EmotionLog) -> Self {
        Self {
            id: log.id,
            user_id: log.owner,
            emotion: log.emotion,
            confidence: log.confidence,
            scanned_at: log.scanned_at,
        }
    }
}
