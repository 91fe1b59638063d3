//! Escalation inference

use crate::config::ClassifierConfig;
use custdna_core::{RandomSource, Sentiment};

/// Decides whether an interaction is escalated
///
/// Eligibility is a literal substring test on the label text, so both
/// `very negative` and `slightly negative` count as "negative" while
/// `confused` and `curious` never qualify.
#[derive(Debug, Clone, Copy)]
pub struct EscalationRule {
    negative_above: f64,
    probability: f64,
}

impl EscalationRule {
    pub fn new(config: &ClassifierConfig) -> Self {
        Self {
            negative_above: config.negative_escalation_above_minutes,
            probability: config.escalation_probability,
        }
    }

    /// Label and duration allow escalation
    pub fn is_eligible(&self, sentiment: Sentiment, duration: f64) -> bool {
        let label = sentiment.label();
        label.contains("angry")
            || label.contains("frustrated")
            || (label.contains("negative") && duration > self.negative_above)
    }

    /// Eligibility plus one Bernoulli draw, taken only when eligible
    pub fn decide(&self, sentiment: Sentiment, duration: f64, rng: &mut dyn RandomSource) -> bool {
        self.is_eligible(sentiment, duration) && rng.chance(self.probability)
    }
}

impl Default for EscalationRule {
    fn default() -> Self {
        Self::new(&ClassifierConfig::default())
    }
}
