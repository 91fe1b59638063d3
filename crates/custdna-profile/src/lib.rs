//! Customer DNA Profiles
//!
//! Turns an ordered interaction history into a behavioral profile:
//! - Summary statistics (escalation rate, average duration, channel mix)
//! - Three DNA symbol rows (behavioral, communication, patterns)
//! - A dominant customer-type label
//! - Qualitative characteristic tags
//!
//! Profiles are never stored. Every view recomputes them from the history,
//! at either the detailed or the compact granularity.

pub mod aggregator;
pub mod characteristics;
pub mod customer_type;
pub mod dna;
pub mod legend;
pub mod stats;
pub mod symbols;
pub mod view;

pub use aggregator::{aggregate, DnaProfile, ProfileAggregator};
pub use characteristics::{characteristics, Characteristic, CharacteristicKind, Severity};
pub use customer_type::{CustomerType, CustomerTypeSummary};
pub use legend::{legend, LegendEntry};
pub use stats::{ChannelShare, ProfileAnalysis};
pub use symbols::{DnaMarker, DnaSymbol, DnaTier};
pub use view::{ProfileView, ViewKind};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::aggregator::{aggregate, DnaProfile, ProfileAggregator};
    pub use crate::view::{ProfileView, ViewKind};
}
