//! Mock emotion classifier.
//!
//! Produces realistic-looking results without a model: a weighted draw
//! that prefers focused/neutral over stressed, with a little jitter on the
//! confidence so repeated scans do not look canned.

use async_trait::async_trait;
use rand::seq::SliceRandom;
use rand::Rng;

use tp_core::domain::entities::emotion_log::EmotionLabel;
use tp_core::errors::DomainResult;
use tp_core::services::emotion::{Classification, EmotionClassifier};

/// (label, base confidence, weight)
const WEIGHTED: &[(EmotionLabel, f64, usize)] = &[
    (EmotionLabel::Focused, 0.85, 4),
    (EmotionLabel::Neutral, 0.78, 3),
    (EmotionLabel::Stressed, 0.72, 2),
];

/// Classifier returning weighted random labels
#[derive(Clone, Copy, Default)]
pub struct MockEmotionClassifier;

impl MockEmotionClassifier {
    /// Create a new mock classifier
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EmotionClassifier for MockEmotionClassifier {
    async fn classify(&self, _image: &[u8]) -> DomainResult<Classification> {
        let mut rng = rand::thread_rng();

        let pool: Vec<(EmotionLabel, f64)> = WEIGHTED
            .iter()
            .flat_map(|&(label, confidence, weight)| {
                std::iter::repeat((label, confidence)).take(weight)
            })
            .collect();

        let &(label, base_confidence) = pool
            .choose(&mut rng)
            .expect("weighted pool is never empty");

        let jitter: f64 = rng.gen_range(-0.05..=0.05);
        let confidence = (base_confidence + jitter).clamp(0.0, 1.0);

        Ok(Classification { label, confidence })
    }
}
