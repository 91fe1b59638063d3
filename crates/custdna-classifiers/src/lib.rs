//! Customer DNA Classifiers
//!
//! Heuristic classifiers that turn a raw customer interaction into a
//! finished record with an inferred sentiment and escalation flag.
//!
//! The rules run in a fixed priority order:
//! - Content keywords (trouble, appreciation, inquiry)
//! - Duration extremes (long and short interactions)
//! - A uniform fallback over the sentiment vocabulary
//!
//! Missing duration, content and date are generated. All randomness comes
//! from an injected [`custdna_core::RandomSource`].

pub mod classifier;
pub mod config;
pub mod escalation;
pub mod interaction;
pub mod patterns;
pub mod sentiment;
pub mod templates;

pub use classifier::{ClassificationResult, Classifier, DefaultedFields};
pub use config::{ClassifierConfig, DurationRange, KeywordConfig};
pub use escalation::EscalationRule;
pub use interaction::{iso_timestamp, InteractionClassifier};
pub use patterns::KeywordMatcher;
pub use sentiment::{InferenceRule, SentimentRules};
pub use templates::ContentTemplates;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::classifier::{ClassificationResult, Classifier};
    pub use crate::config::ClassifierConfig;
    pub use crate::interaction::InteractionClassifier;
}
