//! Classification audit log
//!
//! A bounded in-memory record of classification outcomes backing the admin
//! analytics endpoints. Oldest records are evicted first; the running
//! totals survive eviction.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use std::collections::{HashMap, VecDeque};
use ticketflow_core::{Category, Priority, Sentiment, TicketClassification};
use uuid::Uuid;

/// One classification outcome as seen by the server
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationRecord {
    /// Record identity
    pub id: Uuid,

    /// When the classification completed
    pub recorded_at: DateTime<Utc>,

    /// Declared ticket locale code
    pub language: String,

    /// Assigned category
    pub category: Category,

    /// Assigned priority
    pub priority: Priority,

    /// Detected sentiment
    pub sentiment: Sentiment,

    /// Fine-grained severity heuristic
    pub urgency_score: u8,

    /// Reported confidence
    pub confidence: f32,

    /// Which path produced the result ("completion-api" or "keyword")
    pub source: String,

    /// End-to-end classification latency in milliseconds
    pub latency_ms: u64,
}

impl ClassificationRecord {
    /// Build a record from a finished classification
    pub fn new(
        classification: &TicketClassification,
        language: impl Into<String>,
        source: impl Into<String>,
        latency_ms: u64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            recorded_at: Utc::now(),
            language: language.into(),
            category: classification.category,
            priority: classification.priority,
            sentiment: classification.sentiment,
            urgency_score: classification.urgency_score,
            confidence: classification.confidence,
            source: source.into(),
            latency_ms,
        }
    }
}

/// Aggregate view over the audit log
#[derive(Debug, Clone, Serialize)]
pub struct AuditStats {
    /// Classifications recorded since startup, eviction included
    pub total: u64,

    /// Records currently retained
    pub retained: usize,

    /// Per-source counts over the retained window
    pub by_source: HashMap<String, u64>,

    /// Per-category counts over the retained window
    pub by_category: HashMap<String, u64>,

    /// Per-priority counts over the retained window
    pub by_priority: HashMap<String, u64>,

    /// Mean confidence over the retained window, 0 when empty
    pub average_confidence: f32,
}

struct AuditInner {
    records: VecDeque<ClassificationRecord>,
    total: u64,
}

/// Bounded classification audit log
pub struct AuditLog {
    capacity: usize,
    inner: RwLock<AuditInner>,
}

impl AuditLog {
    /// Create a log retaining at most `capacity` records
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            inner: RwLock::new(AuditInner {
                records: VecDeque::new(),
                total: 0,
            }),
        }
    }

    /// Append a record, evicting the oldest once capacity is reached
    pub fn record(&self, record: ClassificationRecord) {
        tracing::debug!(
            id = %record.id,
            source = %record.source,
            category = %record.category,
            "recording classification"
        );

        let mut inner = self.inner.write();
        while inner.records.len() >= self.capacity {
            inner.records.pop_front();
        }
        inner.records.push_back(record);
        inner.total += 1;
    }

    /// The most recent records, newest first
    pub fn recent(&self, limit: usize) -> Vec<ClassificationRecord> {
        let inner = self.inner.read();
        inner.records.iter().rev().take(limit).cloned().collect()
    }

    /// Number of retained records
    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }

    /// Whether the log holds no records
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Aggregate the retained window for the admin dashboard
    pub fn stats(&self) -> AuditStats {
        let inner = self.inner.read();

        let mut by_source: HashMap<String, u64> = HashMap::new();
        let mut by_category: HashMap<String, u64> = HashMap::new();
        let mut by_priority: HashMap<String, u64> = HashMap::new();
        let mut confidence_sum = 0.0f32;

        for record in &inner.records {
            *by_source.entry(record.source.clone()).or_default() += 1;
            *by_category
                .entry(record.category.as_str().to_string())
                .or_default() += 1;
            *by_priority
                .entry(record.priority.as_str().to_string())
                .or_default() += 1;
            confidence_sum += record.confidence;
        }

        let retained = inner.records.len();
        let average_confidence = if retained == 0 {
            0.0
        } else {
            confidence_sum / retained as f32
        };

        AuditStats {
            total: inner.total,
            retained,
            by_source,
            by_category,
            by_priority,
            average_confidence,
        }
    }
}
