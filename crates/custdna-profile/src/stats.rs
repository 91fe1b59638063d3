//! Summary statistics over an interaction history

use custdna_core::{Channel, InteractionRecord};
use serde::{Deserialize, Serialize};

/// Placeholder dominant sentiment for an empty history
pub const NO_DOMINANT_SENTIMENT: &str = "None";

/// One channel's share of the history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelShare {
    pub channel: Channel,
    pub count: usize,
    /// Rounded to the nearest whole percent
    pub percentage: u32,
}

/// Aggregate statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileAnalysis {
    pub total_interactions: usize,
    /// Fraction in `[0, 1]`
    pub escalation_rate: f64,
    /// Mean duration in minutes
    pub avg_duration: f64,
    pub unique_channels: usize,
    pub dominant_sentiment: String,
    /// Every channel, most used first
    pub channel_breakdown: Vec<ChannelShare>,
}

impl ProfileAnalysis {
    pub fn empty() -> Self {
        Self {
            total_interactions: 0,
            escalation_rate: 0.0,
            avg_duration: 0.0,
            unique_channels: 0,
            dominant_sentiment: NO_DOMINANT_SENTIMENT.to_string(),
            channel_breakdown: Vec::new(),
        }
    }

    pub fn from_history(history: &[InteractionRecord]) -> Self {
        if history.is_empty() {
            return Self::empty();
        }

        let total = history.len();
        let escalated = history.iter().filter(|i| i.escalated).count();
        let duration_sum: f64 = history.iter().map(|i| i.duration).sum();

        let sentiments = tally_by_count(history.iter().map(|i| i.sentiment));
        let dominant_sentiment = sentiments
            .first()
            .map(|(sentiment, _)| sentiment.label().to_string())
            .unwrap_or_else(|| NO_DOMINANT_SENTIMENT.to_string());

        let channels = tally_by_count(history.iter().map(|i| i.channel.clone()));
        let channel_breakdown = channels
            .into_iter()
            .map(|(channel, count)| ChannelShare {
                channel,
                count,
                percentage: percent_of(count, total),
            })
            .collect::<Vec<_>>();

        Self {
            total_interactions: total,
            escalation_rate: escalated as f64 / total as f64,
            avg_duration: duration_sum / total as f64,
            unique_channels: channel_breakdown.len(),
            dominant_sentiment,
            channel_breakdown,
        }
    }

    /// Escalation rate as a whole percent
    pub fn escalation_percent(&self) -> i64 {
        whole(self.escalation_rate * 100.0)
    }
}

/// Count occurrences in first-seen order, then stable-sort by descending count,
/// so ties keep the order in which they first appeared.
pub fn tally_by_count<K, I>(items: I) -> Vec<(K, usize)>
where
    K: PartialEq,
    I: IntoIterator<Item = K>,
{
    let mut counts: Vec<(K, usize)> = Vec::new();
    for item in items {
        match counts.iter_mut().find(|(key, _)| *key == item) {
            Some((_, count)) => *count += 1,
            None => counts.push((item, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

pub fn percent_of(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    whole(count as f64 / total as f64 * 100.0) as u32
}

/// Round half away from zero
pub fn whole(value: f64) -> i64 {
    value.round() as i64
}
