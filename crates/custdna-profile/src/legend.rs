//! Symbol legend

use serde::{Deserialize, Serialize};

use crate::symbols::{DnaSymbol, DnaTier};
use crate::view::ProfileView;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub symbol: String,
    pub kind: DnaSymbol,
    pub tier: DnaTier,
    pub description: String,
}

/// Every symbol with a human description, thresholds taken from `view`
pub fn legend(view: &ProfileView) -> Vec<LegendEntry> {
    DnaSymbol::ALL
        .iter()
        .map(|&kind| LegendEntry {
            symbol: kind.glyph().to_string(),
            kind,
            tier: kind.tier(),
            description: describe(kind, view),
        })
        .collect()
}

fn describe(kind: DnaSymbol, view: &ProfileView) -> String {
    match kind {
        DnaSymbol::NoHistory => "New customer, no interactions yet".to_string(),
        DnaSymbol::PositiveSentiment => "Positive sentiment".to_string(),
        DnaSymbol::NegativeSentiment => "Negative sentiment".to_string(),
        DnaSymbol::NeedsClarification => "Confused/Curious".to_string(),
        DnaSymbol::NeutralSentiment => "Neutral sentiment".to_string(),
        DnaSymbol::LongConversation => format!(
            "Long conversations (over {} min)",
            view.long_conversation_above_minutes
        ),
        DnaSymbol::QuickInteraction => format!(
            "Very short interactions (under {} min)",
            view.quick_interaction_below_minutes
        ),
        DnaSymbol::Email => "Email interactions".to_string(),
        DnaSymbol::Phone => "Phone calls".to_string(),
        DnaSymbol::Chat => "Live chat".to_string(),
        DnaSymbol::Social => "Social media".to_string(),
        DnaSymbol::OtherChannel => "Other channels".to_string(),
        DnaSymbol::HighEscalation => format!(
            "High escalation rate (over {:.0}%)",
            view.escalation_pattern_threshold * 100.0
        ),
        DnaSymbol::ChannelSwitcher => {
            format!("Channel switcher (more than {} channels)", view.channel_switcher_above)
        }
        DnaSymbol::HighEngagement => format!(
            "Focused interactions (over {} min average)",
            view.high_engagement_above_minutes
        ),
        DnaSymbol::SatisfiedCustomer => "Satisfied customer (no escalations)".to_string(),
    }
}
