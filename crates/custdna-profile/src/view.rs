//! Presentation granularities for a profile
//!
//! The detailed and compact views run the same aggregation with different
//! limits and thresholds.

use custdna_core::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named view selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    /// Profile page: more symbols, duration extremes, channel-switcher pattern
    #[default]
    Detailed,
    /// Table row: fewer symbols, only repeated channels
    Compact,
}

impl ViewKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Detailed => "detailed",
            Self::Compact => "compact",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "detailed" => Ok(Self::Detailed),
            "compact" => Ok(Self::Compact),
            other => Err(Error::validation(format!(
                "unknown profile view '{other}', expected 'detailed' or 'compact'"
            ))),
        }
    }
}

/// Limits and thresholds for one view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileView {
    /// Interactions that contribute behavioral symbols
    pub symbol_limit: usize,

    /// Channels that contribute communication symbols
    pub channel_limit: usize,

    /// A channel needs at least this many interactions to get a symbol
    #[serde(default = "default_min_channel_count")]
    pub min_channel_count: usize,

    /// Escalation rate above which the high-escalation pattern fires
    pub escalation_pattern_threshold: f64,

    /// The satisfied pattern needs strictly more interactions than this
    pub min_total_for_satisfied: usize,

    pub include_channel_switcher_pattern: bool,

    /// Emit long/quick markers after each sentiment symbol
    pub include_duration_extremes: bool,

    #[serde(default = "default_channel_switcher_above")]
    pub channel_switcher_above: usize,

    #[serde(default = "default_high_engagement_above")]
    pub high_engagement_above_minutes: f64,

    #[serde(default = "default_long_above")]
    pub long_conversation_above_minutes: f64,

    #[serde(default = "default_quick_below")]
    pub quick_interaction_below_minutes: f64,
}

impl ProfileView {
    pub fn detailed() -> Self {
        Self {
            symbol_limit: 6,
            channel_limit: 4,
            min_channel_count: 1,
            escalation_pattern_threshold: 0.5,
            min_total_for_satisfied: 3,
            include_channel_switcher_pattern: true,
            include_duration_extremes: true,
            channel_switcher_above: default_channel_switcher_above(),
            high_engagement_above_minutes: default_high_engagement_above(),
            long_conversation_above_minutes: default_long_above(),
            quick_interaction_below_minutes: default_quick_below(),
        }
    }

    pub fn compact() -> Self {
        Self {
            symbol_limit: 4,
            channel_limit: 2,
            min_channel_count: 2,
            escalation_pattern_threshold: 0.3,
            min_total_for_satisfied: 2,
            include_channel_switcher_pattern: false,
            include_duration_extremes: false,
            ..Self::detailed()
        }
    }

    pub fn for_kind(kind: ViewKind) -> Self {
        match kind {
            ViewKind::Detailed => Self::detailed(),
            ViewKind::Compact => Self::compact(),
        }
    }
}

impl Default for ProfileView {
    fn default() -> Self {
        Self::detailed()
    }
}

fn default_min_channel_count() -> usize {
    1
}

fn default_channel_switcher_above() -> usize {
    3
}

fn default_high_engagement_above() -> f64 {
    45.0
}

fn default_long_above() -> f64 {
    60.0
}

fn default_quick_below() -> f64 {
    10.0
}
