use crate::domain::values::edge_class::EdgeClass;
use serde::{Deserialize, Serialize};

/// One trading setup/strategy as classified by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeItem {
    pub name: String,
    pub classification: EdgeClass,
    /// Win rate in 0.0..=1.0.
    pub win_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<EdgeStats>,
}

/// Extended statistics, present only when the backend has enough history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeStats {
    pub pnl: f64,
    pub trades: u32,
    pub avg_r: f64,
    pub expectancy: f64,
    pub sharpe: f64,
    pub max_drawdown: f64,
    pub best_month: String,
}
