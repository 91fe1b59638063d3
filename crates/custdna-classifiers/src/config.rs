//! Configuration for the interaction classifier

use serde::{Deserialize, Serialize};

/// Tunable knobs for defaulting, sentiment and escalation inference
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Range for generated durations, in whole minutes
    pub duration: DurationRange,

    /// Generated dates fall within this many days before now
    pub date_window_days: u32,

    /// Keyword lists for the content rules
    pub keywords: KeywordConfig,

    /// Trouble content above this duration is `frustrated`, otherwise `disappointed`
    pub trouble_frustrated_above_minutes: f64,

    /// Calls above this duration may be `frustrated`
    pub long_call_above_minutes: f64,
    pub long_call_frustrated_probability: f64,

    /// Calls below this duration are likely `satisfied`
    pub short_call_below_minutes: f64,
    pub short_call_satisfied_probability: f64,

    /// Labels containing "negative" only escalate above this duration
    pub negative_escalation_above_minutes: f64,

    /// Probability that an eligible interaction is escalated
    pub escalation_probability: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            duration: DurationRange::default(),
            date_window_days: 30,
            keywords: KeywordConfig::default(),
            trouble_frustrated_above_minutes: 30.0,
            long_call_above_minutes: 60.0,
            long_call_frustrated_probability: 0.3,
            short_call_below_minutes: 10.0,
            short_call_satisfied_probability: 0.7,
            negative_escalation_above_minutes: 45.0,
            escalation_probability: 0.4,
        }
    }
}

impl ClassifierConfig {
    /// Load from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Load from a YAML file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> custdna_core::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
            .map_err(|e| custdna_core::Error::config(format!("invalid classifier config: {e}")))
    }
}

/// Inclusive minute range
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DurationRange {
    pub min: u32,
    pub max: u32,
}

impl Default for DurationRange {
    fn default() -> Self {
        Self { min: 5, max: 95 }
    }
}

/// Keyword lists, matched case-insensitively as substrings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordConfig {
    pub trouble: Vec<String>,
    pub appreciation: Vec<String>,
    pub inquiry: Vec<String>,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            trouble: vec!["problem".into(), "issue".into(), "broken".into()],
            appreciation: vec!["thank".into(), "great".into(), "excellent".into()],
            inquiry: vec!["help".into(), "question".into()],
        }
    }
}
