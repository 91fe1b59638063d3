//! Profile aggregation

use custdna_core::InteractionRecord;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::characteristics::{characteristics, Characteristic};
use crate::customer_type::{CustomerType, CustomerTypeSummary};
use crate::dna;
use crate::stats::ProfileAnalysis;
use crate::symbols::DnaMarker;
use crate::view::{ProfileView, ViewKind};

/// A customer's behavioral profile, recomputed on every request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnaProfile {
    pub behavioral: Vec<DnaMarker>,
    pub communication: Vec<DnaMarker>,
    pub patterns: Vec<DnaMarker>,
    pub analysis: ProfileAnalysis,
    pub customer_type: CustomerTypeSummary,
    pub characteristics: Vec<Characteristic>,
}

/// Compute a profile for one view
pub fn aggregate(history: &[InteractionRecord], view: &ProfileView) -> DnaProfile {
    let analysis = ProfileAnalysis::from_history(history);
    let customer_type = CustomerType::classify(&analysis).into();
    let characteristics = characteristics(&analysis);

    if history.is_empty() {
        return DnaProfile {
            behavioral: dna::no_history(),
            communication: Vec::new(),
            patterns: Vec::new(),
            analysis,
            customer_type,
            characteristics,
        };
    }

    DnaProfile {
        behavioral: dna::behavioral(history, view),
        communication: dna::communication(&analysis, view),
        patterns: dna::patterns(&analysis, view),
        analysis,
        customer_type,
        characteristics,
    }
}

/// Holds the configured detailed and compact views
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileAggregator {
    #[serde(default = "ProfileView::detailed")]
    pub detailed: ProfileView,
    #[serde(default = "ProfileView::compact")]
    pub compact: ProfileView,
}

impl Default for ProfileAggregator {
    fn default() -> Self {
        Self::new(ProfileView::detailed(), ProfileView::compact())
    }
}

impl ProfileAggregator {
    pub fn new(detailed: ProfileView, compact: ProfileView) -> Self {
        Self { detailed, compact }
    }

    pub fn view(&self, kind: ViewKind) -> &ProfileView {
        match kind {
            ViewKind::Detailed => &self.detailed,
            ViewKind::Compact => &self.compact,
        }
    }

    pub fn profile(&self, history: &[InteractionRecord], kind: ViewKind) -> DnaProfile {
        let profile = aggregate(history, self.view(kind));
        debug!(
            view = %kind,
            interactions = profile.analysis.total_interactions,
            customer_type = profile.customer_type.label.as_str(),
            "Computed profile"
        );
        profile
    }
}
