//! Emotion classifier capability.
//!
//! The actual model (DeepFace-style service, local network, or a mock) is
//! an opaque external collaborator behind this trait.

use async_trait::async_trait;

use crate::domain::entities::emotion_log::EmotionLabel;
use crate::errors::DomainResult;

/// A classified emotion with its confidence score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub label: EmotionLabel,
    /// Confidence in 0..=1
    pub confidence: f64,
}

/// Classify a face image into an app-level emotion label
#[async_trait]
pub trait EmotionClassifier: Send + Sync {
    async fn classify(&self, image: &[u8]) -> DomainResult<Classification>;
}
