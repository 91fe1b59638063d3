//! Dominant customer-type label

use serde::{Deserialize, Serialize};

use crate::stats::ProfileAnalysis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerType {
    NewCustomer,
    Escalator,
    HighEngagement,
    ChannelSwitcher,
    LowMaintenance,
    Balanced,
}

impl CustomerType {
    /// First matching rule wins
    pub fn classify(analysis: &ProfileAnalysis) -> Self {
        if analysis.total_interactions == 0 {
            Self::NewCustomer
        } else if analysis.escalation_rate > 0.3 {
            Self::Escalator
        } else if analysis.avg_duration > 45.0 {
            Self::HighEngagement
        } else if analysis.unique_channels > 2 {
            Self::ChannelSwitcher
        } else if analysis.escalation_rate == 0.0 && analysis.avg_duration < 20.0 {
            Self::LowMaintenance
        } else {
            Self::Balanced
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::NewCustomer => "New Customer",
            Self::Escalator => "Escalator",
            Self::HighEngagement => "High Engagement",
            Self::ChannelSwitcher => "Channel Switcher",
            Self::LowMaintenance => "Low Maintenance",
            Self::Balanced => "Balanced Customer",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::NewCustomer => "No interaction history",
            Self::Escalator => "Tends to escalate issues frequently",
            Self::HighEngagement => "Prefers detailed conversations",
            Self::ChannelSwitcher => "Uses multiple communication channels",
            Self::LowMaintenance => "Quick, satisfied interactions",
            Self::Balanced => "Standard interaction patterns",
        }
    }
}

/// Serialized form of a [`CustomerType`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerTypeSummary {
    pub kind: CustomerType,
    pub label: String,
    pub description: String,
}

impl From<CustomerType> for CustomerTypeSummary {
    fn from(kind: CustomerType) -> Self {
        Self {
            kind,
            label: kind.label().to_string(),
            description: kind.description().to_string(),
        }
    }
}
