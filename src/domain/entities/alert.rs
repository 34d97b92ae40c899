use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamped behavioral notification from the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub kind: AlertKind,
    pub severity: AlertSeverity,
    pub title: String,
    pub detail: String,
    pub acknowledged: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    CrucialMoment,
    SlumpWarning,
    MarginOfSafety,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    High,
    Medium,
    Low,
    Info,
}
