//! Rule-based sentiment inference
//!
//! Content keywords take priority over duration, and the first rule that
//! matches decides the label. Only the duration rules and the final
//! fallback consume randomness.

use crate::config::ClassifierConfig;
use crate::patterns::KeywordMatcher;
use custdna_core::{RandomSource, Result, Sentiment};
use serde::Serialize;

/// Which rule produced a sentiment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InferenceRule {
    /// Content mentions a problem, issue, or breakage
    TroubleKeyword,
    /// Content expresses thanks or praise
    AppreciationKeyword,
    /// Content asks for help or has a question
    InquiryKeyword,
    /// Long interaction
    LongDuration,
    /// Very short interaction
    ShortDuration,
    /// Uniform pick over the vocabulary
    RandomFallback,
}

impl InferenceRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TroubleKeyword => "trouble_keyword",
            Self::AppreciationKeyword => "appreciation_keyword",
            Self::InquiryKeyword => "inquiry_keyword",
            Self::LongDuration => "long_duration",
            Self::ShortDuration => "short_duration",
            Self::RandomFallback => "random_fallback",
        }
    }
}

pub struct SentimentRules {
    trouble: KeywordMatcher,
    appreciation: KeywordMatcher,
    inquiry: KeywordMatcher,
    trouble_frustrated_above: f64,
    long_above: f64,
    long_frustrated_probability: f64,
    short_below: f64,
    short_satisfied_probability: f64,
}

impl SentimentRules {
    pub fn new(config: &ClassifierConfig) -> Result<Self> {
        let keywords = &config.keywords;
        Ok(Self {
            trouble: KeywordMatcher::new("trouble", keywords.trouble.iter().cloned())?,
            appreciation: KeywordMatcher::new(
                "appreciation",
                keywords.appreciation.iter().cloned(),
            )?,
            inquiry: KeywordMatcher::new("inquiry", keywords.inquiry.iter().cloned())?,
            trouble_frustrated_above: config.trouble_frustrated_above_minutes,
            long_above: config.long_call_above_minutes,
            long_frustrated_probability: config.long_call_frustrated_probability,
            short_below: config.short_call_below_minutes,
            short_satisfied_probability: config.short_call_satisfied_probability,
        })
    }

    /// Infer a sentiment label from content and duration
    pub fn infer(
        &self,
        content: &str,
        duration: f64,
        rng: &mut dyn RandomSource,
    ) -> (Sentiment, InferenceRule) {
        if self.trouble.is_match(content) {
            let sentiment = if duration > self.trouble_frustrated_above {
                Sentiment::Frustrated
            } else {
                Sentiment::Disappointed
            };
            return (sentiment, InferenceRule::TroubleKeyword);
        }

        if self.appreciation.is_match(content) {
            return (Sentiment::Grateful, InferenceRule::AppreciationKeyword);
        }

        if self.inquiry.is_match(content) {
            return (Sentiment::Curious, InferenceRule::InquiryKeyword);
        }

        if duration > self.long_above {
            let sentiment = if rng.chance(self.long_frustrated_probability) {
                Sentiment::Frustrated
            } else {
                Sentiment::Neutral
            };
            return (sentiment, InferenceRule::LongDuration);
        }

        if duration < self.short_below {
            let sentiment = if rng.chance(self.short_satisfied_probability) {
                Sentiment::Satisfied
            } else {
                Sentiment::Positive
            };
            return (sentiment, InferenceRule::ShortDuration);
        }

        let sentiment = Sentiment::ALL[rng.index(Sentiment::ALL.len())];
        (sentiment, InferenceRule::RandomFallback)
    }
}
