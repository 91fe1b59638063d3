//! Logging and metrics setup

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogFormat;

/// Initialize tracing/logging
///
/// `RUST_LOG` wins unless `verbose` is set. Events go to stderr so the
/// one-shot commands can print JSON on stdout.
pub fn init_tracing(verbose: bool, format: LogFormat) {
    let filter = if verbose {
        EnvFilter::new("custdna=debug,tower_http=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("custdna=info"))
    };

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}

/// Install the Prometheus recorder and return the handle used by `/metrics`
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics: {}", e))?;

    describe_metrics();
    info!("Metrics exporter initialized");
    Ok(handle)
}

pub fn describe_metrics() {
    metrics::describe_counter!(
        "custdna_requests_total",
        "Total number of API requests by route"
    );
    metrics::describe_counter!(
        "custdna_interactions_total",
        "Classified interactions by channel and sentiment"
    );
    metrics::describe_counter!(
        "custdna_escalations_total",
        "Interactions flagged as escalated"
    );
    metrics::describe_counter!("custdna_profiles_total", "Profiles computed by view");
    metrics::describe_counter!("custdna_errors_total", "Error responses by type");
    metrics::describe_histogram!(
        "custdna_classify_latency_us",
        metrics::Unit::Microseconds,
        "Classification latency in microseconds"
    );
}
