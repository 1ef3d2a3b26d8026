//! Prometheus metric definitions
//!
//! Metric names are defined once here; the server installs the recorder and
//! renders `/metrics`, and request handlers record through these helpers.

/// Total classifications, labelled by producing path
pub const CLASSIFICATIONS_TOTAL: &str = "ticketflow_classifications_total";

/// Total suggested replies, labelled by producing path
pub const SUGGESTIONS_TOTAL: &str = "ticketflow_suggestions_total";

/// Total chat requests
pub const CHAT_REQUESTS_TOTAL: &str = "ticketflow_chat_requests_total";

/// End-to-end classification latency
pub const CLASSIFICATION_LATENCY_MS: &str = "ticketflow_classification_latency_ms";

/// Register metric descriptions with the installed recorder
pub fn describe_metrics() {
    metrics::describe_counter!(
        CLASSIFICATIONS_TOTAL,
        "Total number of ticket classifications by source"
    );
    metrics::describe_counter!(
        SUGGESTIONS_TOTAL,
        "Total number of suggested replies by source"
    );
    metrics::describe_counter!(CHAT_REQUESTS_TOTAL, "Total number of chat requests");
    metrics::describe_histogram!(
        CLASSIFICATION_LATENCY_MS,
        metrics::Unit::Milliseconds,
        "End-to-end ticket classification latency in milliseconds"
    );
}

/// Record one finished classification
pub fn record_classification(source: &'static str, latency_ms: u64) {
    metrics::counter!(CLASSIFICATIONS_TOTAL, "source" => source).increment(1);
    metrics::histogram!(CLASSIFICATION_LATENCY_MS).record(latency_ms as f64);
}

/// Record one suggested reply
pub fn record_suggestion(source: &'static str) {
    metrics::counter!(SUGGESTIONS_TOTAL, "source" => source).increment(1);
}

/// Record one chat request
pub fn record_chat_request() {
    metrics::counter!(CHAT_REQUESTS_TOTAL).increment(1);
}
