use crate::domain::entities::edge::EdgeItem;
use crate::domain::values::bql_state::BqlState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregate dashboard metrics for one trading account. Produced entirely
/// by the backend (or the demo fixture) and read-only on this side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardOverview {
    pub bql_state: BqlState,
    /// Behavioral quality score, 0-100.
    pub bql_score: f64,
    /// Monte Carlo simulated edge drift over the window (fraction).
    pub simulated_edge_drift: f64,
    /// Probability of account ruin at current behavior, 0.0..=1.0.
    pub ruin_probability: f64,
    /// Estimated money lost to discipline errors over the last 30 days.
    pub discipline_tax_30d: f64,
    pub discipline_tax_breakdown: Vec<TaxCause>,
    pub trades_30d: u32,
    pub flagged_trades_30d: u32,
    pub edges: Vec<EdgeItem>,
    pub recent_costly_errors: Vec<CostlyError>,
    pub loyalty: LoyaltyProgress,
    pub streak: StreakRecord,
}

/// One slice of the discipline-tax breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxCause {
    pub cause: String,
    pub amount: f64,
}

/// A recent trade flagged as an emotionally-driven error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostlyError {
    pub occurred_at: DateTime<Utc>,
    pub symbol: String,
    pub label: String,
    pub cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoyaltyProgress {
    pub tier: String,
    pub points: u32,
    pub next_tier_at: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreakRecord {
    pub current_clean_days: u32,
    pub best_clean_days: u32,
}
