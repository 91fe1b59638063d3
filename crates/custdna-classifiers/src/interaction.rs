//! The interaction classifier: defaults, sentiment, escalation

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use custdna_core::{Channel, InteractionRecord, RandomSource, RawInteraction, Result};
use std::time::Instant;
use tracing::debug;

use crate::classifier::{ClassificationResult, Classifier, DefaultedFields};
use crate::config::ClassifierConfig;
use crate::escalation::EscalationRule;
use crate::sentiment::SentimentRules;
use crate::templates::ContentTemplates;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Turns raw interactions into finished records
///
/// Random draws happen in a fixed order: duration, content and date
/// (each only when absent), then the sentiment rule, then escalation.
pub struct InteractionClassifier {
    name: String,
    config: ClassifierConfig,
    sentiment: SentimentRules,
    escalation: EscalationRule,
    templates: ContentTemplates,
}

impl InteractionClassifier {
    pub fn new() -> Result<Self> {
        Self::with_config(ClassifierConfig::default())
    }

    pub fn with_config(config: ClassifierConfig) -> Result<Self> {
        Ok(Self {
            name: "interaction".to_string(),
            sentiment: SentimentRules::new(&config)?,
            escalation: EscalationRule::new(&config),
            templates: ContentTemplates::new(),
            config,
        })
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn templates(&self) -> &ContentTemplates {
        &self.templates
    }

    fn default_duration(&self, rng: &mut dyn RandomSource) -> f64 {
        let range = self.config.duration;
        rng.int_inclusive(range.min, range.max) as f64
    }

    fn default_date(&self, now: DateTime<Utc>, rng: &mut dyn RandomSource) -> String {
        let window_ms = self.config.date_window_days as f64 * MILLIS_PER_DAY;
        let offset = Duration::milliseconds((rng.unit() * window_ms) as i64);
        iso_timestamp(now - offset)
    }
}

impl Classifier for InteractionClassifier {
    fn classify_at(
        &self,
        raw: RawInteraction,
        rng: &mut dyn RandomSource,
        now: DateTime<Utc>,
    ) -> Result<ClassificationResult> {
        let start = Instant::now();

        let channel = raw
            .channel
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(Channel::from)
            .ok_or_else(|| custdna_core::Error::validation("channel is required"))?;

        let mut defaulted = DefaultedFields::default();

        let duration = match raw.duration.filter(|d| d.is_finite() && *d > 0.0) {
            Some(duration) => duration,
            None => {
                defaulted.duration = true;
                self.default_duration(rng)
            }
        };

        let content = match raw.content.filter(|c| !c.trim().is_empty()) {
            Some(content) => content,
            None => {
                defaulted.content = true;
                self.templates.pick(&channel, rng)
            }
        };

        let date = match raw.date.filter(|d| !d.trim().is_empty()) {
            Some(date) => date,
            None => {
                defaulted.date = true;
                self.default_date(now, rng)
            }
        };

        let (sentiment, rule) = self.sentiment.infer(&content, duration, rng);
        let escalated = self.escalation.decide(sentiment, duration, rng);

        debug!(
            channel = %channel,
            sentiment = %sentiment,
            escalated,
            rule = rule.as_str(),
            "Classified interaction"
        );

        Ok(ClassificationResult {
            record: InteractionRecord {
                date,
                channel,
                duration,
                content,
                sentiment,
                escalated,
                ai_generated: true,
                generated_at: iso_timestamp(now),
            },
            rule,
            defaulted,
            latency_us: start.elapsed().as_micros() as u64,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Millisecond-precision UTC timestamp with a `Z` suffix
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use custdna_core::{ScriptedRandom, Sentiment};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 14, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_missing_channel_is_rejected() {
        let classifier = InteractionClassifier::new().unwrap();
        let mut rng = ScriptedRandom::default();

        let err = classifier
            .classify_at(RawInteraction::default(), &mut rng, now())
            .unwrap_err();
        assert!(matches!(err, custdna_core::Error::Validation(_)));

        let err = classifier
            .classify_at(RawInteraction::new("  "), &mut rng, now())
            .unwrap_err();
        assert!(matches!(err, custdna_core::Error::Validation(_)));
    }

    #[test]
    fn test_supplied_fields_are_kept() {
        let classifier = InteractionClassifier::new().unwrap();
        let mut rng = ScriptedRandom::default();
        let raw = RawInteraction::new("email")
            .with_duration(45.0)
            .with_content("I have a problem with billing")
            .with_date("2026-09-01T08:00:00.000Z");

        let result = classifier.classify_at(raw, &mut rng, now()).unwrap();
        let record = &result.record;
        assert_eq!(record.sentiment, Sentiment::Frustrated);
        assert_eq!(record.date, "2026-09-01T08:00:00.000Z");
        assert_eq!(record.duration, 45.0);
        assert_eq!(record.generated_at, "2026-10-14T12:00:00.000Z");
        assert!(record.ai_generated);
        assert!(!result.defaulted.any());
    }

    #[test]
    fn test_defaults_consume_draws_in_order() {
        let classifier = InteractionClassifier::new().unwrap();
        // duration -> 5, content -> first chat template, date -> now,
        // then the short-duration rule draws 0.0 -> satisfied
        let mut rng = ScriptedRandom::new([0.0, 0.0, 0.0, 0.0]);

        let result = classifier
            .classify_at(RawInteraction::new("chat"), &mut rng, now())
            .unwrap();
        let record = result.record;

        assert_eq!(record.duration, 5.0);
        assert_eq!(record.content, classifier.templates().bank(&Channel::Chat)[0]);
        assert_eq!(record.date, "2026-10-14T12:00:00.000Z");
        assert_eq!(record.sentiment, Sentiment::Satisfied);
        assert!(!record.escalated);
        assert_eq!(rng.consumed(), 4);
        assert!(result.defaulted.duration && result.defaulted.content && result.defaulted.date);
    }

    #[test]
    fn test_generated_date_stays_in_window() {
        let classifier = InteractionClassifier::new().unwrap();
        let mut rng = ScriptedRandom::new([0.999_999]);
        let raw = RawInteraction::new("phone")
            .with_duration(20.0)
            .with_content("routine follow-up");

        let record = classifier.classify_at(raw, &mut rng, now()).unwrap().record;
        let date = DateTime::parse_from_rfc3339(&record.date).unwrap();
        let age = now() - date.with_timezone(&Utc);
        assert!(age <= Duration::days(30));
        assert!(age > Duration::days(29));
    }

    #[test]
    fn test_invalid_duration_is_defaulted() {
        let classifier = InteractionClassifier::new().unwrap();
        let mut rng = ScriptedRandom::new([0.5]);
        let raw = RawInteraction::new("email")
            .with_duration(-3.0)
            .with_content("thanks!")
            .with_date("2026-10-01T00:00:00Z");

        let result = classifier.classify_at(raw, &mut rng, now()).unwrap();
        assert!(result.defaulted.duration);
        assert_eq!(result.record.duration, 50.0);
        assert_eq!(result.record.sentiment, Sentiment::Grateful);
    }

    #[test]
    fn test_unknown_channel_is_accepted() {
        let classifier = InteractionClassifier::new().unwrap();
        let mut rng = ScriptedRandom::new([0.0]);
        let raw = RawInteraction::new("carrier pigeon")
            .with_duration(20.0)
            .with_date("2026-10-01T00:00:00Z");

        let record = classifier.classify_at(raw, &mut rng, now()).unwrap().record;
        assert_eq!(record.channel, Channel::Other("carrier pigeon".to_string()));
        assert_eq!(record.content, classifier.templates().bank(&Channel::Email)[0]);
    }
}
