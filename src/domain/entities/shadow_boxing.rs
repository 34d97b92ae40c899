use serde::{Deserialize, Serialize};

/// One simulated prop-firm challenge outcome: the user's actual trade
/// history replayed against a firm's evaluation rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropFirmSimulation {
    pub firm: String,
    pub account_size: f64,
    pub profit_target_pct: f64,
    pub max_drawdown_pct: f64,
    pub actual_return_pct: f64,
    pub actual_drawdown_pct: f64,
    pub passed: bool,
    pub pass_probability: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_note: Option<String>,
}
