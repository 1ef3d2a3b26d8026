//! HTTP routes and handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Instant;
use ticketflow_ai::ClassificationOutcome;
use ticketflow_core::{Language, TicketClassification, TicketContent};
use ticketflow_telemetry::{self as telemetry, ClassificationRecord};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .route("/api/classify", post(classify))
        .route("/api/tickets/classify", post(classify_ticket))
        .route("/api/chat", post(chat))
        .route("/api/admin/stats", get(admin_stats))
        .route("/api/admin/classifications", get(admin_classifications))
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

async fn metrics(State(state): State<AppState>) -> String {
    state.metrics_handle.render()
}

/// Classification request body
#[derive(Debug, Deserialize)]
struct ClassifyRequest {
    title: String,
    description: String,
    #[serde(default)]
    language: Option<String>,
}

impl ClassifyRequest {
    /// Validate and convert into ticket content
    ///
    /// Unsupported locale codes fall back to English here, at the boundary;
    /// everything past this point works on the closed [`Language`] set.
    fn into_content(self) -> Result<TicketContent, AppError> {
        if self.title.trim().is_empty() || self.description.trim().is_empty() {
            return Err(AppError::InvalidRequest(
                "title and description are required".to_string(),
            ));
        }

        let language = Language::detect(self.language.as_deref().unwrap_or("en"));
        Ok(TicketContent::new(self.title, self.description, language))
    }
}

/// Response body for the ticket-creation flow
#[derive(Debug, Serialize)]
struct ClassifyTicketResponse {
    classification: TicketClassification,
    suggested_response: String,
}

/// Classify ticket content
async fn classify(
    State(state): State<AppState>,
    Json(request): Json<ClassifyRequest>,
) -> Result<Response, AppError> {
    let content = request.into_content()?;
    let outcome = run_classification(&state, &content).await;
    Ok(Json(outcome.classification).into_response())
}

/// Classify ticket content and draft a suggested reply
async fn classify_ticket(
    State(state): State<AppState>,
    Json(request): Json<ClassifyRequest>,
) -> Result<Response, AppError> {
    let content = request.into_content()?;
    let outcome = run_classification(&state, &content).await;

    let suggestion = state
        .suggester
        .suggest_outcome(&content, &outcome.classification)
        .await;
    telemetry::record_suggestion(suggestion.source.as_str());

    Ok(Json(ClassifyTicketResponse {
        classification: outcome.classification,
        suggested_response: suggestion.text,
    })
    .into_response())
}

/// Run the classifier and feed metrics and the audit log
async fn run_classification(state: &AppState, content: &TicketContent) -> ClassificationOutcome {
    let started = Instant::now();
    let outcome = state.classifier.classify_outcome(content).await;
    let latency_ms = started.elapsed().as_millis() as u64;

    info!(
        category = %outcome.classification.category,
        priority = %outcome.classification.priority,
        source = outcome.source.as_str(),
        latency_ms,
        "ticket classified"
    );

    telemetry::record_classification(outcome.source.as_str(), latency_ms);
    state.audit.record(ClassificationRecord::new(
        &outcome.classification,
        content.language.code(),
        outcome.source.as_str(),
        latency_ms,
    ));

    outcome
}

/// Chat request body
#[derive(Debug, Deserialize)]
struct ChatRequest {
    message: String,
    #[serde(default)]
    ticket_context: Option<String>,
}

/// Chat response body
#[derive(Debug, Serialize)]
struct ChatResponse {
    response: String,
}

/// Answer a support-chat message
async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Response, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::InvalidRequest("message is required".to_string()));
    }

    telemetry::record_chat_request();
    let response = state
        .assistant
        .answer(&request.message, request.ticket_context.as_deref())
        .await;

    Ok(Json(ChatResponse { response }).into_response())
}

/// Aggregate classification analytics for the admin dashboard
async fn admin_stats(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.audit.stats())
}

#[derive(Debug, Deserialize)]
struct AdminClassificationsQuery {
    limit: Option<usize>,
}

/// Recent classification records, newest first
async fn admin_classifications(
    State(state): State<AppState>,
    Query(query): Query<AdminClassificationsQuery>,
) -> impl IntoResponse {
    let limit = query.limit.unwrap_or(50);
    Json(state.audit.recent(limit))
}

async fn fallback() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}

/// Error handling
#[derive(Debug)]
enum AppError {
    InvalidRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = json!({
            "error": {
                "message": message,
                "type": "invalid_request_error",
            }
        });

        (status, Json(body)).into_response()
    }
}
