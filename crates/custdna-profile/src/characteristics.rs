//! Qualitative characteristic tags
//!
//! Tags are independent and non-exclusive. Within a family (escalation,
//! channels, engagement) only the strongest tag applies.

use serde::{Deserialize, Serialize};

use crate::stats::{whole, ProfileAnalysis};

/// Visual weight of a tag, most severe first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    Warning,
    Attention,
    Notice,
    Positive,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacteristicKind {
    NewCustomer,
    HighRiskEscalator,
    Escalator,
    MultiChannelSwitcher,
    ChannelSwitcher,
    DeepEngagement,
    HighEngagement,
    FrequentUser,
    LowMaintenance,
    SatisfiedCustomer,
    QuickResolver,
    BalancedCustomer,
}

impl CharacteristicKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::NewCustomer => "New Customer",
            Self::HighRiskEscalator => "High Risk Escalator",
            Self::Escalator => "The Escalator",
            Self::MultiChannelSwitcher => "Multi-Channel Switcher",
            Self::ChannelSwitcher => "Channel Switcher",
            Self::DeepEngagement => "Deep Engagement",
            Self::HighEngagement => "High Engagement",
            Self::FrequentUser => "Frequent User",
            Self::LowMaintenance => "Low Maintenance",
            Self::SatisfiedCustomer => "Satisfied Customer",
            Self::QuickResolver => "Quick Resolver",
            Self::BalancedCustomer => "Balanced Customer",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::NewCustomer => "🆕",
            Self::HighRiskEscalator => "🚨",
            Self::Escalator => "⚠️",
            Self::MultiChannelSwitcher => "🔄",
            Self::ChannelSwitcher => "🔀",
            Self::DeepEngagement => "🎯",
            Self::HighEngagement => "📈",
            Self::FrequentUser => "🔁",
            Self::LowMaintenance => "✅",
            Self::SatisfiedCustomer => "😊",
            Self::QuickResolver => "⚡",
            Self::BalancedCustomer => "⚖️",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::NewCustomer | Self::BalancedCustomer => "#6c757d",
            Self::HighRiskEscalator => "#dc3545",
            Self::Escalator => "#fd7e14",
            Self::MultiChannelSwitcher => "#6f42c1",
            Self::ChannelSwitcher => "#17a2b8",
            Self::DeepEngagement | Self::LowMaintenance | Self::SatisfiedCustomer => "#28a745",
            Self::HighEngagement => "#20c997",
            Self::FrequentUser => "#007bff",
            Self::QuickResolver => "#ffc107",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::HighRiskEscalator => Severity::Critical,
            Self::Escalator => Severity::Warning,
            Self::MultiChannelSwitcher | Self::DeepEngagement => Severity::Attention,
            Self::ChannelSwitcher | Self::HighEngagement | Self::FrequentUser => Severity::Notice,
            Self::LowMaintenance | Self::SatisfiedCustomer | Self::QuickResolver => {
                Severity::Positive
            }
            Self::NewCustomer | Self::BalancedCustomer => Severity::Neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Characteristic {
    pub kind: CharacteristicKind,
    pub label: String,
    pub description: String,
    pub emoji: String,
    pub color: String,
    pub severity: Severity,
}

impl Characteristic {
    fn new(kind: CharacteristicKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            label: kind.label().to_string(),
            description: description.into(),
            emoji: kind.emoji().to_string(),
            color: kind.color().to_string(),
            severity: kind.severity(),
        }
    }
}

/// All applicable tags in rule order
pub fn characteristics(analysis: &ProfileAnalysis) -> Vec<Characteristic> {
    use CharacteristicKind as K;

    if analysis.total_interactions == 0 {
        return vec![Characteristic::new(
            K::NewCustomer,
            "No interaction history available",
        )];
    }

    let total = analysis.total_interactions;
    let rate = analysis.escalation_rate;
    let avg = analysis.avg_duration;
    let channels = analysis.unique_channels;
    let rate_pct = analysis.escalation_percent();
    let avg_whole = whole(avg);

    let mut tags = Vec::new();

    if rate > 0.5 {
        tags.push(Characteristic::new(
            K::HighRiskEscalator,
            format!("{rate_pct}% escalation rate - Requires immediate attention and senior support"),
        ));
    } else if rate > 0.3 {
        tags.push(Characteristic::new(
            K::Escalator,
            format!("{rate_pct}% escalation rate - Tends to escalate issues frequently, handle with care"),
        ));
    }

    if channels > 3 {
        tags.push(Characteristic::new(
            K::MultiChannelSwitcher,
            format!("Uses {channels} different channels - Ensure consistent experience across all touchpoints"),
        ));
    } else if channels > 1 {
        tags.push(Characteristic::new(
            K::ChannelSwitcher,
            format!("Uses {channels} different channels - Prefers having multiple communication options"),
        ));
    }

    if avg > 60.0 {
        tags.push(Characteristic::new(
            K::DeepEngagement,
            format!("Average {avg_whole} minutes per interaction - Requires comprehensive, detailed support"),
        ));
    } else if avg > 45.0 {
        tags.push(Characteristic::new(
            K::HighEngagement,
            format!("Average {avg_whole} minutes per interaction - Appreciates thorough explanations"),
        ));
    }

    if total > 10 {
        tags.push(Characteristic::new(
            K::FrequentUser,
            format!("{total} total interactions - Regular customer with ongoing needs"),
        ));
    }

    if rate == 0.0 && total > 3 {
        if avg < 15.0 {
            tags.push(Characteristic::new(
                K::LowMaintenance,
                "0% escalation, quick resolutions - Efficient, self-sufficient customer",
            ));
        } else {
            tags.push(Characteristic::new(
                K::SatisfiedCustomer,
                format!("0% escalation rate across {total} interactions - Highly satisfied with service"),
            ));
        }
    }

    if avg < 10.0 && rate < 0.2 {
        tags.push(Characteristic::new(
            K::QuickResolver,
            format!("Average {avg_whole} minutes per interaction - Prefers fast, efficient solutions"),
        ));
    }

    if tags.is_empty() {
        tags.push(Characteristic::new(
            K::BalancedCustomer,
            "Standard interaction patterns - Follow regular support procedures",
        ));
    }

    tags
}
