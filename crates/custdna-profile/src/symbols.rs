//! DNA symbols and the markers that carry them

use custdna_core::{Bucket, Channel};
use serde::{Deserialize, Serialize};

/// Every symbol a profile can contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DnaSymbol {
    // behavioral
    NoHistory,
    PositiveSentiment,
    NegativeSentiment,
    NeedsClarification,
    NeutralSentiment,
    LongConversation,
    QuickInteraction,
    // communication
    Email,
    Phone,
    Chat,
    Social,
    OtherChannel,
    // patterns
    HighEscalation,
    ChannelSwitcher,
    HighEngagement,
    SatisfiedCustomer,
}

/// The three rows of a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DnaTier {
    Behavioral,
    Communication,
    Patterns,
}

impl DnaSymbol {
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::NoHistory => "🔷",
            Self::PositiveSentiment => "🟩",
            Self::NegativeSentiment => "🟥",
            Self::NeedsClarification => "🟨",
            Self::NeutralSentiment => "🟦",
            Self::LongConversation => "🟪",
            Self::QuickInteraction => "🟫",
            Self::Email => "✉️",
            Self::Phone => "📞",
            Self::Chat => "💬",
            Self::Social => "📱",
            Self::OtherChannel => "🔗",
            Self::HighEscalation => "⚠️",
            Self::ChannelSwitcher => "🔄",
            Self::HighEngagement => "🎯",
            Self::SatisfiedCustomer => "✅",
        }
    }

    pub fn tier(&self) -> DnaTier {
        match self {
            Self::NoHistory
            | Self::PositiveSentiment
            | Self::NegativeSentiment
            | Self::NeedsClarification
            | Self::NeutralSentiment
            | Self::LongConversation
            | Self::QuickInteraction => DnaTier::Behavioral,
            Self::Email | Self::Phone | Self::Chat | Self::Social | Self::OtherChannel => {
                DnaTier::Communication
            }
            Self::HighEscalation
            | Self::ChannelSwitcher
            | Self::HighEngagement
            | Self::SatisfiedCustomer => DnaTier::Patterns,
        }
    }

    /// Behavioral symbol for a sentiment bucket
    pub fn for_bucket(bucket: Bucket) -> Self {
        match bucket {
            Bucket::Positive => Self::PositiveSentiment,
            Bucket::Negative => Self::NegativeSentiment,
            Bucket::Clarification => Self::NeedsClarification,
            Bucket::Other => Self::NeutralSentiment,
        }
    }

    /// Communication symbol for a channel
    pub fn for_channel(channel: &Channel) -> Self {
        match channel {
            Channel::Email => Self::Email,
            Channel::Phone => Self::Phone,
            Channel::Chat => Self::Chat,
            Channel::Social => Self::Social,
            Channel::Other(_) => Self::OtherChannel,
        }
    }

    /// Symbols in legend order
    pub const ALL: [DnaSymbol; 16] = [
        DnaSymbol::NoHistory,
        DnaSymbol::PositiveSentiment,
        DnaSymbol::NegativeSentiment,
        DnaSymbol::NeedsClarification,
        DnaSymbol::NeutralSentiment,
        DnaSymbol::LongConversation,
        DnaSymbol::QuickInteraction,
        DnaSymbol::Email,
        DnaSymbol::Phone,
        DnaSymbol::Chat,
        DnaSymbol::Social,
        DnaSymbol::OtherChannel,
        DnaSymbol::HighEscalation,
        DnaSymbol::ChannelSwitcher,
        DnaSymbol::HighEngagement,
        DnaSymbol::SatisfiedCustomer,
    ];
}

/// One symbol in a DNA sequence with its explanation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DnaMarker {
    pub symbol: String,
    pub kind: DnaSymbol,
    pub explanation: String,
}

impl DnaMarker {
    pub fn new(kind: DnaSymbol, explanation: impl Into<String>) -> Self {
        Self {
            symbol: kind.glyph().to_string(),
            kind,
            explanation: explanation.into(),
        }
    }
}
