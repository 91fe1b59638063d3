//! Shared application state

use custdna_classifiers::InteractionClassifier;
use custdna_core::{CustomerStore, RandomSource, StdRandom};
use custdna_profile::ProfileAggregator;
use metrics_exporter_prometheus::PrometheusHandle;
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Persistence collaborator
    pub store: Arc<dyn CustomerStore>,

    pub classifier: Arc<InteractionClassifier>,

    pub aggregator: Arc<ProfileAggregator>,

    /// Random source shared by every classification
    pub rng: Arc<Mutex<Box<dyn RandomSource>>>,

    /// Renders the `/metrics` exposition
    pub metrics: PrometheusHandle,
}

impl AppState {
    pub fn new(
        store: Arc<dyn CustomerStore>,
        classifier: InteractionClassifier,
        aggregator: ProfileAggregator,
        metrics: PrometheusHandle,
    ) -> Self {
        Self {
            store,
            classifier: Arc::new(classifier),
            aggregator: Arc::new(aggregator),
            rng: Arc::new(Mutex::new(Box::new(StdRandom::from_entropy()))),
            metrics,
        }
    }

    /// Replace the random source, e.g. with a seeded or scripted one
    pub fn with_random(mut self, rng: impl RandomSource + 'static) -> Self {
        self.rng = Arc::new(Mutex::new(Box::new(rng)));
        self
    }
}
