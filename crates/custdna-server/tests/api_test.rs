//! Router-level tests for the Customer DNA HTTP API

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use custdna_classifiers::InteractionClassifier;
use custdna_core::{InMemoryStore, ScriptedRandom};
use custdna_profile::ProfileAggregator;
use custdna_server::{build_state, create_router, AppState, ServerConfig};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn metrics_handle() -> PrometheusHandle {
    PrometheusBuilder::new().build_recorder().handle()
}

fn app_with_draws(draws: Vec<f64>) -> Router {
    let state = AppState::new(
        Arc::new(InMemoryStore::new()),
        InteractionClassifier::new().unwrap(),
        ProfileAggregator::default(),
        metrics_handle(),
    )
    .with_random(ScriptedRandom::new(draws));
    create_router(state)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = app_with_draws(vec![]);
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let app = app_with_draws(vec![]);
    let response = app
        .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_customer_lifecycle() {
    let app = app_with_draws(vec![]);

    let (status, created) = send(&app, Method::POST, "/customers", Some(json!({ "name": "Ada" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created, json!({ "id": 1, "name": "Ada", "interactions": [] }));

    let (status, listed) = send(&app, Method::GET, "/customers", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let (status, fetched) = send(&app, Method::GET, "/customers/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Ada");

    let (status, missing) = send(&app, Method::GET, "/customers/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(missing["error"]["type"], "not_found_error");
    assert_eq!(missing["error"]["message"], "customer 42 not found");
}

#[tokio::test]
async fn test_create_customer_rejects_blank_name() {
    let app = app_with_draws(vec![]);
    let (status, body) = send(&app, Method::POST, "/customers", Some(json!({ "name": "  " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "invalid_request_error");
    assert_eq!(body["error"]["message"], "name is required");
}

#[tokio::test]
async fn test_add_interaction_classifies_and_escalates() {
    // Date draw, then the escalation draw for a frustrated interaction
    let app = app_with_draws(vec![0.5, 0.1]);
    send(&app, Method::POST, "/customers", Some(json!({ "name": "Ada" }))).await;

    let (status, record) = send(
        &app,
        Method::POST,
        "/customers/1/interactions",
        Some(json!({
            "channel": "email",
            "content": "I have a problem with billing",
            "duration": 45
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(record["sentiment"], "frustrated");
    assert_eq!(record["escalated"], true);
    assert_eq!(record["duration"], 45.0);
    assert_eq!(record["aiGenerated"], true);
    assert!(record["date"].as_str().unwrap().ends_with('Z'));

    let (_, customer) = send(&app, Method::GET, "/customers/1", None).await;
    assert_eq!(customer["interactions"].as_array().unwrap().len(), 1);
    assert_eq!(customer["interactions"][0], record);
}

#[tokio::test]
async fn test_add_interaction_fills_missing_fields() {
    let app = app_with_draws(vec![]);
    send(&app, Method::POST, "/customers", Some(json!({ "name": "Ada" }))).await;

    let (status, record) = send(
        &app,
        Method::POST,
        "/customers/1/interactions",
        Some(json!({ "channel": "chat", "content": "Thank you so much for the help" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(record["sentiment"], "grateful");
    assert_eq!(record["escalated"], false);
    let duration = record["duration"].as_f64().unwrap();
    assert!((5.0..=95.0).contains(&duration));
    assert_eq!(duration.fract(), 0.0);
}

#[tokio::test]
async fn test_add_interaction_errors() {
    let app = app_with_draws(vec![]);

    let (status, body) = send(
        &app,
        Method::POST,
        "/customers/9/interactions",
        Some(json!({ "channel": "email" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["type"], "not_found_error");

    send(&app, Method::POST, "/customers", Some(json!({ "name": "Ada" }))).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/customers/1/interactions",
        Some(json!({ "content": "no channel here", "duration": 12 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "channel is required");

    let (_, customer) = send(&app, Method::GET, "/customers/1", None).await;
    assert!(customer["interactions"].as_array().unwrap().is_empty());

    let (status, _) = send(&app, Method::GET, "/customers/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_profile_views() {
    // Each interaction only draws for its date
    let app = app_with_draws(vec![]);
    send(&app, Method::POST, "/customers", Some(json!({ "name": "Ada" }))).await;

    for channel in ["email", "email", "phone"] {
        send(
            &app,
            Method::POST,
            "/customers/1/interactions",
            Some(json!({ "channel": channel, "content": "Thanks, great service", "duration": 8 })),
        )
        .await;
    }

    let (status, detailed) = send(&app, Method::GET, "/customers/1/profile", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detailed["analysis"]["totalInteractions"], 3);
    assert_eq!(
        detailed["analysis"]["channelBreakdown"],
        json!([
            { "channel": "email", "count": 2, "percentage": 67 },
            { "channel": "phone", "count": 1, "percentage": 33 }
        ])
    );
    // sentiment plus quick-interaction marker per interaction
    assert_eq!(detailed["behavioral"].as_array().unwrap().len(), 6);
    assert_eq!(detailed["communication"].as_array().unwrap().len(), 2);

    let (status, compact) = send(&app, Method::GET, "/customers/1/profile?view=compact", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(compact["behavioral"].as_array().unwrap().len(), 3);
    assert_eq!(compact["communication"].as_array().unwrap().len(), 1);
    assert_eq!(compact["patterns"][0]["kind"], "satisfied_customer");

    let (status, body) = send(&app, Method::GET, "/customers/1/profile?view=wide", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "invalid_request_error");

    let (status, _) = send(&app, Method::GET, "/customers/7/profile", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_profile_table_and_legend() {
    let app = app_with_draws(vec![]);
    send(&app, Method::POST, "/customers", Some(json!({ "name": "Ada" }))).await;
    send(&app, Method::POST, "/customers", Some(json!({ "name": "Grace" }))).await;
    send(
        &app,
        Method::POST,
        "/customers/2/interactions",
        Some(json!({ "channel": "phone", "content": "My order is broken", "duration": 20 })),
    )
    .await;

    let (status, rows) = send(&app, Method::GET, "/profiles", None).await;
    assert_eq!(status, StatusCode::OK);
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["interactionCount"], 0);
    assert_eq!(rows[0]["profile"]["behavioral"][0]["kind"], "no_history");
    assert_eq!(rows[1]["name"], "Grace");
    assert_eq!(rows[1]["interactionCount"], 1);
    assert_eq!(rows[1]["profile"]["analysis"]["dominantSentiment"], "disappointed");

    let (status, legend) = send(&app, Method::GET, "/legend", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(legend.as_array().unwrap().len(), 16);
}

#[tokio::test]
async fn test_unknown_route_and_bad_body() {
    let app = app_with_draws(vec![]);

    let (status, body) = send(&app, Method::GET, "/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["type"], "not_found_error");

    let request = Request::post("/customers")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_file_backed_state_persists() {
    let dir = tempfile::tempdir().unwrap();
    let config = ServerConfig {
        data_path: dir.path().join("db.json"),
        ..ServerConfig::default()
    };

    let app = create_router(build_state(&config, metrics_handle()).unwrap());
    send(&app, Method::POST, "/customers", Some(json!({ "name": "Ada" }))).await;
    let (status, _) = send(
        &app,
        Method::POST,
        "/customers/1/interactions",
        Some(json!({ "channel": "social", "duration": 12, "content": "question about pricing" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let on_disk: Value =
        serde_json::from_str(&std::fs::read_to_string(&config.data_path).unwrap()).unwrap();
    assert_eq!(on_disk["customers"][0]["name"], "Ada");
    assert_eq!(on_disk["customers"][0]["interactions"][0]["sentiment"], "curious");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_appends_are_all_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let config = ServerConfig {
        data_path: dir.path().join("db.json"),
        ..ServerConfig::default()
    };

    let app = create_router(build_state(&config, metrics_handle()).unwrap());
    send(&app, Method::POST, "/customers", Some(json!({ "name": "Ada" }))).await;

    let tasks: Vec<_> = (0..16)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move {
                send(
                    &app,
                    Method::POST,
                    "/customers/1/interactions",
                    Some(json!({ "channel": "chat", "content": format!("question {i}"), "duration": 10 })),
                )
                .await
                .0
            })
        })
        .collect();
    for task in tasks {
        assert_eq!(task.await.unwrap(), StatusCode::CREATED);
    }

    let (_, customer) = send(&app, Method::GET, "/customers/1", None).await;
    assert_eq!(customer["interactions"].as_array().unwrap().len(), 16);

    let on_disk: Value =
        serde_json::from_str(&std::fs::read_to_string(&config.data_path).unwrap()).unwrap();
    assert_eq!(on_disk["customers"][0]["interactions"].as_array().unwrap().len(), 16);
}
