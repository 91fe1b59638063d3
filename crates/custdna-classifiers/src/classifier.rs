//! Classifier trait and common types

use chrono::{DateTime, Utc};
use custdna_core::{InteractionRecord, RandomSource, RawInteraction, Result};

use crate::sentiment::InferenceRule;

/// Trait for interaction classifiers
pub trait Classifier: Send + Sync {
    /// Classify a raw interaction as of `now`
    fn classify_at(
        &self,
        raw: RawInteraction,
        rng: &mut dyn RandomSource,
        now: DateTime<Utc>,
    ) -> Result<ClassificationResult>;

    /// Classify a raw interaction using the wall clock
    fn classify(
        &self,
        raw: RawInteraction,
        rng: &mut dyn RandomSource,
    ) -> Result<ClassificationResult> {
        self.classify_at(raw, rng, Utc::now())
    }

    /// Get the classifier name
    fn name(&self) -> &str;
}

/// Result of classification
#[derive(Debug, Clone)]
pub struct ClassificationResult {
    /// The finished record
    pub record: InteractionRecord,

    /// Rule that decided the sentiment
    pub rule: InferenceRule,

    /// Fields that were generated rather than supplied
    pub defaulted: DefaultedFields,

    /// Latency in microseconds
    pub latency_us: u64,
}

impl ClassificationResult {
    pub fn into_record(self) -> InteractionRecord {
        self.record
    }
}

/// Which optional inputs were filled in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultedFields {
    pub duration: bool,
    pub content: bool,
    pub date: bool,
}

impl DefaultedFields {
    pub fn any(&self) -> bool {
        self.duration || self.content || self.date
    }
}
