//! Application state

use anyhow::Result;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use ticketflow_ai::{
    CompletionClient, HttpCompletionClient, ResponseSuggester, SupportAssistant, TicketClassifier,
};
use ticketflow_telemetry::AuditLog;
use tracing::{info, warn};

use crate::config::ServerConfig;

/// Application state shared across all requests
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration
    pub config: Arc<ServerConfig>,

    /// AI-first ticket classifier with keyword fallback
    pub classifier: Arc<TicketClassifier>,

    /// Draft-reply suggester
    pub suggester: Arc<ResponseSuggester>,

    /// Support-chat assistant
    pub assistant: Arc<SupportAssistant>,

    /// Classification audit log
    pub audit: Arc<AuditLog>,

    /// Prometheus metrics handle for rendering
    pub metrics_handle: PrometheusHandle,
}

impl AppState {
    /// Initialize application state from configuration
    pub fn new(config: ServerConfig, metrics_handle: PrometheusHandle) -> Result<Self> {
        // One shared HTTP client for every outbound completion call
        let http = reqwest::Client::builder().build()?;

        let client: Option<Arc<dyn CompletionClient>> =
            match HttpCompletionClient::from_config(http, &config.ai) {
                Some(client) => {
                    info!(base_url = %config.ai.base_url, model = %config.ai.model,
                        "completion api client configured");
                    Some(Arc::new(client))
                }
                None => {
                    warn!("no completion api credential configured; running on keyword and template fallbacks only");
                    None
                }
            };

        let classifier = TicketClassifier::new(client.clone())
            .map_err(|e| anyhow::anyhow!("failed to build classifier: {e}"))?;
        let suggester = ResponseSuggester::new(client.clone());
        let assistant = SupportAssistant::new(client);
        let audit = AuditLog::new(config.audit.capacity);

        Ok(Self {
            config: Arc::new(config),
            classifier: Arc::new(classifier),
            suggester: Arc::new(suggester),
            assistant: Arc::new(assistant),
            audit: Arc::new(audit),
            metrics_handle,
        })
    }
}
