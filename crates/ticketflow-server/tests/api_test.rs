//! Integration tests for the Ticketflow API
//!
//! Every test pins the server into fallback mode with a placeholder
//! credential, so no network is touched and responses are deterministic.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use clap::Parser;
use http_body_util::BodyExt;
use metrics_exporter_prometheus::PrometheusBuilder;
use serde_json::{json, Value};
use ticketflow_server::{create_router, AppState, Cli, ServerConfig};
use tower::ServiceExt;

fn fallback_state() -> AppState {
    let mut config = ServerConfig::default();
    // A placeholder key keeps the server in fallback mode even when the
    // test environment carries a real GROQ_API_KEY.
    config.ai.api_key = Some("your_groq_api_key_here".to_string());
    config.audit.capacity = 16;

    let handle = PrometheusBuilder::new().build_recorder().handle();
    AppState::new(config, handle).unwrap()
}

async fn request(state: &AppState, request: Request<Body>) -> (StatusCode, Value) {
    let response = create_router(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&bytes).into_owned(),
        ))
    };
    (status, value)
}

async fn post_json(state: &AppState, path: &str, body: Value) -> (StatusCode, Value) {
    request(
        state,
        Request::post(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

async fn get(state: &AppState, path: &str) -> (StatusCode, Value) {
    request(state, Request::get(path).body(Body::empty()).unwrap()).await
}

#[tokio::test]
async fn health_returns_ok() {
    let state = fallback_state();
    let (status, body) = get(&state, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("OK".to_string()));
}

#[tokio::test]
async fn classify_runs_the_keyword_fallback() {
    let state = fallback_state();
    let (status, body) = post_json(
        &state,
        "/api/classify",
        json!({
            "title": "Cannot log in",
            "description": "This is extremely urgent, I need help now",
            "language": "en"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["priority"], "urgent");
    assert_eq!(body["urgency_score"], 8);
    assert_eq!(body["category"], "general");
    assert!((body["confidence"].as_f64().unwrap() - 0.6).abs() < 1e-6);
    assert!(body["suggested_tags"]
        .as_array()
        .unwrap()
        .contains(&json!("urgent")));
}

#[tokio::test]
async fn classify_rejects_missing_fields() {
    let state = fallback_state();
    let (status, body) = post_json(
        &state,
        "/api/classify",
        json!({"title": "   ", "description": ""}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "invalid_request_error");
}

#[tokio::test]
async fn unsupported_language_falls_back_to_english_tables() {
    let state = fallback_state();
    let (status, body) = post_json(
        &state,
        "/api/classify",
        json!({
            "title": "Billing issue",
            "description": "I was charged twice for my subscription",
            "language": "fr"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], "billing");
    assert_eq!(body["language_detected"], "en");
}

#[tokio::test]
async fn ticket_classify_includes_an_urgent_template_reply() {
    let state = fallback_state();
    let (status, body) = post_json(
        &state,
        "/api/tickets/classify",
        json!({
            "title": "Emergency: production down",
            "description": "Everything is broken, this is critical",
            "language": "en"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["classification"]["priority"], "urgent");
    let reply = body["suggested_response"].as_str().unwrap();
    assert!(reply.contains("within 2 hours"));
}

#[tokio::test]
async fn chat_answers_from_the_canned_fallback() {
    let state = fallback_state();
    let (status, body) = post_json(
        &state,
        "/api/chat",
        json!({"message": "how do I create a ticket?"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["response"].as_str().unwrap().contains("New Ticket"));

    let (status, _) = post_json(&state, "/api/chat", json!({"message": ""})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn admin_stats_reflect_recorded_classifications() {
    let state = fallback_state();

    for _ in 0..2 {
        let (status, _) = post_json(
            &state,
            "/api/classify",
            json!({"title": "Bug report", "description": "The app crashed"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, stats) = get(&state, "/api/admin/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["total"], 2);
    assert_eq!(stats["by_source"]["keyword"], 2);
    assert_eq!(stats["by_category"]["bug"], 2);

    let (status, records) = get(&state, "/api/admin/classifications?limit=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(records.as_array().unwrap().len(), 1);
    assert_eq!(records[0]["source"], "keyword");
}

#[tokio::test]
async fn config_load_applies_cli_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "ai:\n  model: from-file\n  base_url: http://file.example\n").unwrap();

    let cli = Cli::parse_from([
        "ticketflow-server",
        "--config",
        path.to_str().unwrap(),
        "--model",
        "from-cli",
    ]);

    let config = ServerConfig::load(path.to_str().unwrap(), &cli).unwrap();
    assert_eq!(config.ai.model, "from-cli");
    assert_eq!(config.ai.base_url, "http://file.example");
}
