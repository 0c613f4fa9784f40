//! Emotion scan service implementation

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::domain::entities::emotion_log::{EmotionLabel, EmotionLog};
use crate::errors::DomainResult;
use crate::repositories::emotion_log::EmotionLogRepository;
use tp_shared::utils::email::mask_email;

use super::classifier::EmotionClassifier;

/// Payloads below this size are not a real image; degrade to neutral
const MIN_IMAGE_BYTES: usize = 100;

/// Result of an emotion scan
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutcome {
    pub emotion: EmotionLabel,
    pub confidence: f64,
    /// Human-readable coaching message for the dashboard
    pub message: String,
}

impl ScanOutcome {
    fn neutral(confidence: f64, message: &str) -> Self {
        Self {
            emotion: EmotionLabel::Neutral,
            confidence,
            message: message.to_string(),
        }
    }
}

/// Drives the classifier and records scans for analytics.
///
/// The scan never fails on bad input or a broken classifier; every failure
/// mode degrades to a neutral result with a lowered confidence, matching
/// the dashboard's expectation that a scan always yields something.
pub struct EmotionService<C: EmotionClassifier, L: EmotionLogRepository> {
    classifier: Arc<C>,
    logs: Arc<L>,
}

impl<C: EmotionClassifier, L: EmotionLogRepository> EmotionService<C, L> {
    /// Create a new emotion service
    pub fn new(classifier: Arc<C>, logs: Arc<L>) -> Self {
        Self { classifier, logs }
    }

    /// Classify a base64-encoded image
    pub async fn scan(&self, owner: &str, base64_image: &str) -> DomainResult<ScanOutcome> {
        let bytes = match STANDARD.decode(base64_image.trim()) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(
                    owner = %mask_email(owner),
                    error = %err,
                    event = "emotion_decode_failed",
                    "Could not decode scan payload"
                );
                return Ok(ScanOutcome::neutral(
                    0.6,
                    "Error processing image, using neutral detection",
                ));
            }
        };

        if bytes.len() < MIN_IMAGE_BYTES {
            return Ok(ScanOutcome::neutral(
                0.5,
                "Image quality too low, using neutral detection",
            ));
        }

        match self.classifier.classify(&bytes).await {
            Ok(classification) => Ok(ScanOutcome {
                emotion: classification.label,
                confidence: classification.confidence.clamp(0.0, 1.0),
                message: classification.label.message().to_string(),
            }),
            Err(err) => {
                tracing::warn!(
                    owner = %mask_email(owner),
                    error = %err,
                    event = "emotion_classifier_failed",
                    "Classifier error; falling back to neutral"
                );
                Ok(ScanOutcome::neutral(
                    0.6,
                    "Error processing image, using neutral detection",
                ))
            }
        }
    }

    /// Record a scan the client chose to apply
    pub async fn log_scan(
        &self,
        owner: String,
        emotion: EmotionLabel,
        confidence: f64,
    ) -> DomainResult<EmotionLog> {
        self.logs.append(EmotionLog::new(owner, emotion, confidence)).await
    }

    /// Scan history for a subject, newest first
    pub async fn history(&self, owner: &str) -> DomainResult<Vec<EmotionLog>> {
        self.logs.list_by_owner(owner).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DomainError;
    use crate::repositories::emotion_log::MockEmotionLogRepository;
    use crate::services::emotion::Classification;
    use async_trait::async_trait;

    struct FixedClassifier {
        result: Option<Classification>,
    }

    #[async_trait]
    impl EmotionClassifier for FixedClassifier {
        async fn classify(&self, _image: &[u8]) -> DomainResult<Classification> {
            self.result.ok_or(DomainError::Internal {
                message: "classifier offline".to_string(),
            })
        }
    }

    fn service(
        result: Option<Classification>,
    ) -> EmotionService<FixedClassifier, MockEmotionLogRepository> {
        EmotionService::new(
            Arc::new(FixedClassifier { result }),
            Arc::new(MockEmotionLogRepository::new()),
        )
    }

    fn large_payload() -> String {
        STANDARD.encode(vec![0u8; 4096])
    }

    #[tokio::test]
    async fn test_scan_reports_classifier_result() {
        let service = service(Some(Classification {
            label: EmotionLabel::Focused,
            confidence: 0.85,
        }));

        let outcome = service.scan("a@x.com", &large_payload()).await.unwrap();
        assert_eq!(outcome.emotion, EmotionLabel::Focused);
        assert_eq!(outcome.confidence, 0.85);
        assert!(outcome.message.contains("focus mode"));
    }

    #[tokio::test]
    async fn test_short_payload_degrades_to_neutral() {
        let service = service(Some(Classification {
            label: EmotionLabel::Stressed,
            confidence: 0.9,
        }));

        let outcome = service
            .scan("a@x.com", &STANDARD.encode(b"tiny"))
            .await
            .unwrap();
        assert_eq!(outcome.emotion, EmotionLabel::Neutral);
        assert_eq!(outcome.confidence, 0.5);
    }

    #[tokio::test]
    async fn test_classifier_failure_degrades_to_neutral() {
        let service = service(None);

        let outcome = service.scan("a@x.com", &large_payload()).await.unwrap();
        assert_eq!(outcome.emotion, EmotionLabel::Neutral);
        assert_eq!(outcome.confidence, 0.6);
    }

    #[tokio::test]
    async fn test_invalid_base64_degrades_to_neutral() {
        let service = service(None);

        let outcome = service.scan("a@x.com", "!!not-base64!!").await.unwrap();
        assert_eq!(outcome.emotion, EmotionLabel::Neutral);
    }

    #[tokio::test]
    async fn test_log_and_history() {
        let service = service(None);

        service
            .log_scan("a@x.com".to_string(), EmotionLabel::Focused, 0.8)
            .await
            .unwrap();
        service
            .log_scan("b@x.com".to_string(), EmotionLabel::Neutral, 0.7)
            .await
            .unwrap();

        let history = service.history("a@x.com").await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].emotion, EmotionLabel::Focused);
    }
}
