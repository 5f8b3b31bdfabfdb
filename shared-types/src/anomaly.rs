use crate::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Kinds of findings the detectors can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnomalyKind {
    TimeAnomaly,
    LargeTransaction,
    SuspiciousPattern,
}

/// A scored, evidenced finding.
///
/// `severity` is a policy constant per kind, in [0, 1]; it is not a
/// computed risk score. `related_entities` carry the provenance: the
/// spans of source text that justify the finding. `timestamp` is the
/// detection instant, not a property of the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    pub kind: AnomalyKind,
    pub description: String,
    pub severity: f64,
    pub related_entities: Vec<Entity>,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,
}

impl Anomaly {
    pub fn new(
        kind: AnomalyKind,
        description: impl Into<String>,
        severity: f64,
        related_entities: Vec<Entity>,
    ) -> Self {
        Self {
            kind,
            description: description.into(),
            severity,
            related_entities,
            timestamp: Utc::now(),
            details: None,
        }
    }
}
