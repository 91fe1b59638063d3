//! Behavioral, communication and pattern sequences

use custdna_core::{Bucket, Channel, InteractionRecord};

use crate::stats::{whole, ProfileAnalysis};
use crate::symbols::{DnaMarker, DnaSymbol};
use crate::view::ProfileView;

/// Sentinel sequence for a customer without history
pub fn no_history() -> Vec<DnaMarker> {
    vec![DnaMarker::new(
        DnaSymbol::NoHistory,
        "New customer with no interaction history",
    )]
}

/// One sentiment symbol per leading interaction, plus duration markers
/// when the view asks for them
pub fn behavioral(history: &[InteractionRecord], view: &ProfileView) -> Vec<DnaMarker> {
    let mut markers = Vec::new();

    for (idx, interaction) in history.iter().take(view.symbol_limit).enumerate() {
        let ordinal = idx + 1;
        let bucket = interaction.sentiment.bucket();
        let explanation = match bucket {
            Bucket::Clarification => format!(
                "Interaction {ordinal}: {} - customer needed clarification ({}min via {})",
                interaction.sentiment, interaction.duration, interaction.channel
            ),
            _ => format!(
                "Interaction {ordinal}: {} sentiment ({}min via {})",
                interaction.sentiment, interaction.duration, interaction.channel
            ),
        };
        markers.push(DnaMarker::new(DnaSymbol::for_bucket(bucket), explanation));

        if !view.include_duration_extremes {
            continue;
        }

        if interaction.duration > view.long_conversation_above_minutes {
            markers.push(DnaMarker::new(
                DnaSymbol::LongConversation,
                format!(
                    "Long conversation: {} minutes - customer needed extensive support",
                    interaction.duration
                ),
            ));
        } else if interaction.duration < view.quick_interaction_below_minutes {
            markers.push(DnaMarker::new(
                DnaSymbol::QuickInteraction,
                format!(
                    "Quick interaction: {} minutes - simple query resolved fast",
                    interaction.duration
                ),
            ));
        }
    }

    markers
}

/// Symbols for the most used channels
pub fn communication(analysis: &ProfileAnalysis, view: &ProfileView) -> Vec<DnaMarker> {
    analysis
        .channel_breakdown
        .iter()
        .take(view.channel_limit)
        .filter(|share| share.count >= view.min_channel_count.max(1))
        .map(|share| {
            let count = share.count;
            let pct = share.percentage;
            let explanation = match &share.channel {
                Channel::Email => format!(
                    "Email: {count} interactions ({pct}% of total) - prefers written communication"
                ),
                Channel::Phone => {
                    format!("Phone: {count} calls ({pct}% of total) - prefers voice communication")
                }
                Channel::Chat => {
                    format!("Chat: {count} sessions ({pct}% of total) - likes instant messaging")
                }
                Channel::Social => format!(
                    "Social: {count} interactions ({pct}% of total) - uses social media for support"
                ),
                Channel::Other(name) => format!("{name}: {count} interactions ({pct}% of total)"),
            };
            DnaMarker::new(DnaSymbol::for_channel(&share.channel), explanation)
        })
        .collect()
}

/// Independent pattern indicators
pub fn patterns(analysis: &ProfileAnalysis, view: &ProfileView) -> Vec<DnaMarker> {
    let mut markers = Vec::new();

    if analysis.escalation_rate > view.escalation_pattern_threshold {
        markers.push(DnaMarker::new(
            DnaSymbol::HighEscalation,
            format!(
                "High escalation rate: {}% of interactions escalated - requires careful handling",
                analysis.escalation_percent()
            ),
        ));
    }

    if view.include_channel_switcher_pattern
        && analysis.unique_channels > view.channel_switcher_above
    {
        markers.push(DnaMarker::new(
            DnaSymbol::ChannelSwitcher,
            format!(
                "Channel switcher: Uses {} different channels - ensure consistent experience",
                analysis.unique_channels
            ),
        ));
    }

    if analysis.avg_duration > view.high_engagement_above_minutes {
        markers.push(DnaMarker::new(
            DnaSymbol::HighEngagement,
            format!(
                "High engagement: Average {} minutes per interaction - appreciates detailed support",
                whole(analysis.avg_duration)
            ),
        ));
    }

    if analysis.escalation_rate == 0.0 && analysis.total_interactions > view.min_total_for_satisfied
    {
        markers.push(DnaMarker::new(
            DnaSymbol::SatisfiedCustomer,
            format!(
                "Satisfied customer: {} interactions with 0% escalation rate - low maintenance",
                analysis.total_interactions
            ),
        ));
    }

    markers
}
