//! Ticketflow Telemetry
//!
//! Observability for the AI layer: a bounded audit log of classification
//! outcomes feeding the admin analytics endpoints, plus the Prometheus
//! metric definitions recorded by the server.

pub mod audit;
pub mod metrics;

pub use audit::{AuditLog, AuditStats, ClassificationRecord};
pub use self::metrics::{
    describe_metrics, record_chat_request, record_classification, record_suggestion,
};
