//! Core types for Customer DNA

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Communication medium of an interaction
///
/// Only the four named channels get special handling downstream; any other
/// string is carried verbatim as [`Channel::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Channel {
    Email,
    Phone,
    Chat,
    Social,
    Other(String),
}

impl Channel {
    /// The four channels with dedicated templates and symbols
    pub const KNOWN: [Channel; 4] = [Channel::Email, Channel::Phone, Channel::Chat, Channel::Social];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Chat => "chat",
            Self::Social => "social",
            Self::Other(name) => name,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Bounded label for metrics; every free-form channel collapses to `other`
    pub fn metric_label(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Chat => "chat",
            Self::Social => "social",
            Self::Other(_) => "other",
        }
    }
}

impl From<String> for Channel {
    fn from(value: String) -> Self {
        match value.as_str() {
            "email" => Self::Email,
            "phone" => Self::Phone,
            "chat" => Self::Chat,
            "social" => Self::Social,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for Channel {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<Channel> for String {
    fn from(channel: Channel) -> Self {
        match channel {
            Channel::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Polarity bucket of a sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Positive,
    Negative,
    Clarification,
    Other,
}

/// The fixed sentiment vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    #[serde(rename = "very positive")]
    VeryPositive,
    #[serde(rename = "positive")]
    Positive,
    #[serde(rename = "slightly positive")]
    SlightlyPositive,
    #[serde(rename = "neutral")]
    Neutral,
    #[serde(rename = "slightly negative")]
    SlightlyNegative,
    #[serde(rename = "negative")]
    Negative,
    #[serde(rename = "very negative")]
    VeryNegative,
    #[serde(rename = "confused")]
    Confused,
    #[serde(rename = "angry")]
    Angry,
    #[serde(rename = "frustrated")]
    Frustrated,
    #[serde(rename = "satisfied")]
    Satisfied,
    #[serde(rename = "excited")]
    Excited,
    #[serde(rename = "disappointed")]
    Disappointed,
    #[serde(rename = "grateful")]
    Grateful,
    #[serde(rename = "curious")]
    Curious,
}

impl Sentiment {
    /// Every label, in vocabulary order. Uniform picks index into this.
    pub const ALL: [Sentiment; 15] = [
        Sentiment::VeryPositive,
        Sentiment::Positive,
        Sentiment::SlightlyPositive,
        Sentiment::Neutral,
        Sentiment::SlightlyNegative,
        Sentiment::Negative,
        Sentiment::VeryNegative,
        Sentiment::Confused,
        Sentiment::Angry,
        Sentiment::Frustrated,
        Sentiment::Satisfied,
        Sentiment::Excited,
        Sentiment::Disappointed,
        Sentiment::Grateful,
        Sentiment::Curious,
    ];

    /// Label text as stored and displayed
    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryPositive => "very positive",
            Self::Positive => "positive",
            Self::SlightlyPositive => "slightly positive",
            Self::Neutral => "neutral",
            Self::SlightlyNegative => "slightly negative",
            Self::Negative => "negative",
            Self::VeryNegative => "very negative",
            Self::Confused => "confused",
            Self::Angry => "angry",
            Self::Frustrated => "frustrated",
            Self::Satisfied => "satisfied",
            Self::Excited => "excited",
            Self::Disappointed => "disappointed",
            Self::Grateful => "grateful",
            Self::Curious => "curious",
        }
    }

    pub fn bucket(&self) -> Bucket {
        match self {
            Self::VeryPositive
            | Self::Positive
            | Self::SlightlyPositive
            | Self::Satisfied
            | Self::Excited
            | Self::Grateful => Bucket::Positive,
            Self::VeryNegative
            | Self::Negative
            | Self::SlightlyNegative
            | Self::Angry
            | Self::Frustrated
            | Self::Disappointed => Bucket::Negative,
            Self::Confused | Self::Curious => Bucket::Clarification,
            Self::Neutral => Bucket::Other,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Sentiment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|sentiment| sentiment.label() == s)
            .ok_or_else(|| Error::validation(format!("unknown sentiment label: {s}")))
    }
}

/// Inbound interaction as submitted by a caller
///
/// Only `channel` is required; the classifier fills everything else.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawInteraction {
    #[serde(default)]
    pub channel: Option<String>,

    /// Minutes. Accepts a JSON number or a numeric string.
    #[serde(default, deserialize_with = "lenient_duration")]
    pub duration: Option<f64>,

    #[serde(default)]
    pub content: Option<String>,

    /// ISO-8601 timestamp, kept verbatim when supplied
    #[serde(default)]
    pub date: Option<String>,
}

impl RawInteraction {
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            channel: Some(channel.into()),
            ..Default::default()
        }
    }

    pub fn with_duration(mut self, minutes: f64) -> Self {
        self.duration = Some(minutes);
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}

/// Coerce any JSON value into a duration; anything that is not a number
/// or a numeric string becomes `None` and is defaulted later.
fn lenient_duration<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}

/// A finished, immutable interaction record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionRecord {
    #[serde(default)]
    pub date: String,
    pub channel: Channel,
    pub duration: f64,
    #[serde(default)]
    pub content: String,
    pub sentiment: Sentiment,
    pub escalated: bool,
    #[serde(default)]
    pub ai_generated: bool,
    #[serde(default)]
    pub generated_at: String,
}

/// A customer and their interaction history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub interactions: Vec<InteractionRecord>,
}

/// Fields accepted when creating a customer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewCustomer {
    #[serde(default)]
    pub name: Option<String>,
}

impl NewCustomer {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// Returns the trimmed name, rejecting a missing or blank one
    pub fn validated_name(&self) -> crate::Result<String> {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => Ok(name.to_string()),
            _ => Err(Error::validation("name is required")),
        }
    }
}
