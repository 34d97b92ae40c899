use serde::{Deserialize, Serialize};

/// Whether the account is in a detected slump, and the prescribed
/// restrictions when it is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlumpStatus {
    pub in_slump: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prescription: Option<SlumpPrescription>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlumpPrescription {
    pub max_trades_per_session: u32,
    pub banned_symbols: Vec<String>,
    /// Cap on position size as a percentage of normal sizing.
    pub position_size_cap_pct: f64,
    pub cooldown_hours: u32,
    pub rules: Vec<String>,
    pub recovery_criteria: Vec<String>,
}
