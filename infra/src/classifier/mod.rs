//! Emotion classifier implementations.

mod mock;

pub use mock::MockEmotionClassifier;
