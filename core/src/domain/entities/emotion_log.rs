//! Emotion scan log entity for analytics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// App-level emotion labels the classifier output is mapped onto
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionLabel {
    Focused,
    Stressed,
    Neutral,
}

impl EmotionLabel {
    /// Human-readable coaching message shown in the dashboard
    pub fn message(&self) -> &'static str {
        match self {
            EmotionLabel::Focused => "You're in focus mode! Tackle high-effort tasks now.",
            EmotionLabel::Stressed => "You seem stressed. Start with easier tasks to build momentum.",
            EmotionLabel::Neutral => "You're in a balanced state. Ready for any task.",
        }
    }
}

/// Log of a single emotion scan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionLog {
    pub id: Uuid,
    pub owner: String,
    pub emotion: EmotionLabel,
    /// Confidence score in 0..=1
    pub confidence: f64,
    pub scanned_at: DateTime<Utc>,
}

impl EmotionLog {
    pub fn new(owner: String, emotion: EmotionLabel, confidence: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner,
            emotion,
            confidence: confidence.clamp(0.0, 1.0),
            scanned_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_is_clamped() {
        let log = EmotionLog::new("a@x.com".to_string(), EmotionLabel::Focused, 1.7);
        assert_eq!(log.confidence, 1.0);
    }

    #[test]
    fn test_label_wire_format() {
        assert_eq!(serde_json::to_string(&EmotionLabel::Stressed).unwrap(), r#""stressed""#);
    }
}
