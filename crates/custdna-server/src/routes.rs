//! HTTP routes and handlers

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use custdna_classifiers::Classifier;
use custdna_core::{Customer, CustomerStore, Error, InteractionRecord, NewCustomer, RawInteraction};
use custdna_profile::{legend, DnaProfile, LegendEntry, ViewKind};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};

use crate::config::CorsConfig;
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .route("/customers", get(list_customers).post(create_customer))
        .route("/customers/:id", get(get_customer))
        .route("/customers/:id/interactions", post(add_interaction))
        .route("/customers/:id/profile", get(customer_profile))
        .route("/profiles", get(list_profiles))
        .route("/legend", get(get_legend))
        .fallback(fallback)
        .with_state(state)
}

/// Router with CORS and request tracing
pub fn build_app(state: AppState, cors: &CorsConfig) -> Router {
    create_router(state)
        .layer(cors_layer(cors))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if cors.allows_any() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = origin.as_str(), "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}

fn count_request(route: &'static str) {
    metrics::counter!("custdna_requests_total", "route" => route).increment(1);
}

/// Run a store write on the blocking pool; file-backed stores do sync I/O
async fn store_write<T, F>(state: &AppState, write: F) -> Result<T, AppError>
where
    T: Send + 'static,
    F: FnOnce(&dyn CustomerStore) -> custdna_core::Result<T> + Send + 'static,
{
    let store = state.store.clone();
    let output = tokio::task::spawn_blocking(move || write(store.as_ref()))
        .await
        .map_err(|e| AppError::InternalError(format!("store task failed: {e}")))??;
    Ok(output)
}

async fn health_check() -> Json<serde_json::Value> {
    count_request("health");
    Json(json!({ "status": "ok" }))
}

async fn metrics(State(state): State<AppState>) -> String {
    count_request("metrics");
    state.metrics.render()
}

async fn list_customers(State(state): State<AppState>) -> Result<Json<Vec<Customer>>, AppError> {
    count_request("list_customers");
    Ok(Json(state.store.list_customers()?))
}

async fn create_customer(
    State(state): State<AppState>,
    payload: Result<Json<NewCustomer>, JsonRejection>,
) -> Result<(StatusCode, Json<Customer>), AppError> {
    count_request("create_customer");
    let Json(fields) = payload?;

    let customer = store_write(&state, move |store| store.create_customer(fields)).await?;
    info!(customer_id = customer.id, "Customer created");
    Ok((StatusCode::CREATED, Json(customer)))
}

async fn get_customer(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<Customer>, AppError> {
    count_request("get_customer");
    let Path(id) = id?;
    Ok(Json(state.store.get_customer(id)?))
}

/// Classify a raw interaction and append it to the customer's history
async fn add_interaction(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<RawInteraction>, JsonRejection>,
) -> Result<(StatusCode, Json<InteractionRecord>), AppError> {
    count_request("add_interaction");
    let Path(id) = id?;

    // Unknown customers are rejected before the body is looked at
    state.store.get_customer(id)?;
    let Json(raw) = payload?;

    let result = {
        let mut rng = state.rng.lock();
        state.classifier.classify(raw, &mut **rng)?
    };

    metrics::histogram!("custdna_classify_latency_us").record(result.latency_us as f64);
    let record = result.into_record();

    let stored = record.clone();
    store_write(&state, move |store| store.append_interaction(id, stored)).await?;

    metrics::counter!(
        "custdna_interactions_total",
        "channel" => record.channel.metric_label(),
        "sentiment" => record.sentiment.label()
    )
    .increment(1);
    if record.escalated {
        metrics::counter!("custdna_escalations_total").increment(1);
    }

    info!(
        customer_id = id,
        channel = %record.channel,
        sentiment = %record.sentiment,
        escalated = record.escalated,
        "Interaction recorded"
    );
    Ok((StatusCode::CREATED, Json(record)))
}

#[derive(Debug, Default, Deserialize)]
struct ProfileQuery {
    view: Option<String>,
}

impl ProfileQuery {
    fn view_or(&self, default: ViewKind) -> Result<ViewKind, Error> {
        match self.view.as_deref() {
            Some(view) => view.parse(),
            None => Ok(default),
        }
    }
}

async fn customer_profile(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    query: Result<Query<ProfileQuery>, QueryRejection>,
) -> Result<Json<DnaProfile>, AppError> {
    count_request("customer_profile");
    let Path(id) = id?;
    let Query(query) = query?;
    let view = query.view_or(ViewKind::Detailed)?;

    let customer = state.store.get_customer(id)?;
    let profile = state.aggregator.profile(&customer.interactions, view);
    metrics::counter!("custdna_profiles_total", "view" => view.as_str()).increment(1);

    Ok(Json(profile))
}

/// One row of the customer table
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub id: u64,
    pub name: String,
    pub interaction_count: usize,
    pub profile: DnaProfile,
}

async fn list_profiles(
    State(state): State<AppState>,
    query: Result<Query<ProfileQuery>, QueryRejection>,
) -> Result<Json<Vec<ProfileSummary>>, AppError> {
    count_request("list_profiles");
    let Query(query) = query?;
    let view = query.view_or(ViewKind::Compact)?;

    let summaries: Vec<ProfileSummary> = state
        .store
        .list_customers()?
        .into_iter()
        .map(|customer| ProfileSummary {
            profile: state.aggregator.profile(&customer.interactions, view),
            interaction_count: customer.interactions.len(),
            id: customer.id,
            name: customer.name,
        })
        .collect();

    metrics::counter!("custdna_profiles_total", "view" => view.as_str())
        .increment(summaries.len() as u64);
    debug!(view = %view, customers = summaries.len(), "Computed profile table");

    Ok(Json(summaries))
}

async fn get_legend(State(state): State<AppState>) -> Json<Vec<LegendEntry>> {
    count_request("legend");
    Json(legend(&state.aggregator.detailed))
}

async fn fallback() -> AppError {
    AppError::NotFound("Route not found".to_string())
}

/// Errors surfaced to HTTP clients as `{"error": {"message", "type"}}`
#[derive(Debug)]
pub enum AppError {
    InvalidRequest(String),
    NotFound(String),
    InternalError(String),
}

impl AppError {
    fn kind(&self) -> &'static str {
        match self {
            AppError::InvalidRequest(_) => "invalid_request_error",
            AppError::NotFound(_) => "not_found_error",
            AppError::InternalError(_) => "internal_error",
        }
    }
}

impl From<Error> for AppError {
    fn from(err: Error) -> Self {
        match err {
            Error::Validation(msg) => AppError::InvalidRequest(msg),
            Error::NotFound { .. } => AppError::NotFound(err.to_string()),
            other => AppError::InternalError(other.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        metrics::counter!("custdna_errors_total", "kind" => kind).increment(1);

        let (status, message) = match self {
            AppError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::InternalError(msg) => {
                error!(error = msg.as_str(), "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };
        if status != StatusCode::INTERNAL_SERVER_ERROR {
            warn!(status = status.as_u16(), error = message.as_str(), "Request rejected");
        }

        let body = json!({
            "error": {
                "message": message,
                "type": kind,
            }
        });

        (status, Json(body)).into_response()
    }
}
