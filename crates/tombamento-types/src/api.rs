//! Response bodies of the HTTP API

use crate::tombamento::Status;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Current time as RFC 3339 UTC with milliseconds, e.g. `2024-05-01T12:00:00.000Z`
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `GET /health`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub timestamp: String,
    pub tombamentos: usize,
    pub detalhes: usize,
}

impl HealthReport {
    pub fn ok(tombamentos: usize, detalhes: usize) -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: timestamp_now(),
            tombamentos,
            detalhes,
        }
    }
}

/// `GET /stats`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsReport {
    pub total_tombamentos: usize,
    pub total_detalhes: usize,
    /// Keyed by status; serialized with string keys
    pub status_distribution: BTreeMap<Status, usize>,
    pub timestamp: String,
}

/// `POST /detalhes/batch`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub count: usize,
    pub created: usize,
    pub updated: usize,
}

/// Error body. `message` is set for internal errors, `path`/`method` for
/// unmatched routes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
            path: None,
            method: None,
        }
    }
}
