//! One-shot CLI commands

use anyhow::{bail, Context};
use custdna_classifiers::{Classifier, InteractionClassifier};
use custdna_core::{CustomerStore, RawInteraction, StdRandom};
use custdna_profile::ViewKind;
use std::path::Path;

use crate::config::ServerConfig;
use crate::store::JsonFileStore;

/// Classify one interaction; returns the record as pretty JSON
pub fn classify(config: &ServerConfig, raw: RawInteraction, seed: Option<u64>) -> anyhow::Result<String> {
    let classifier = InteractionClassifier::with_config(config.classifier.clone())?;
    let mut rng = match seed {
        Some(seed) => StdRandom::with_seed(seed),
        None => StdRandom::from_entropy(),
    };

    let record = classifier.classify(raw, &mut rng)?.into_record();
    Ok(serde_json::to_string_pretty(&record)?)
}

/// Profile one stored customer; returns the profile as pretty JSON
pub fn profile(
    config: &ServerConfig,
    data: &Path,
    customer_id: u64,
    view: ViewKind,
) -> anyhow::Result<String> {
    if !data.exists() {
        bail!("customer store {} does not exist", data.display());
    }

    let store = JsonFileStore::open(data)
        .with_context(|| format!("failed to open customer store {}", data.display()))?;
    let customer = store.get_customer(customer_id)?;
    let profile = config.profile.profile(&customer.interactions, view);
    Ok(serde_json::to_string_pretty(&profile)?)
}
