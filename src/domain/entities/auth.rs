use crate::domain::values::activation_status::ActivationStatus;
use serde::{Deserialize, Serialize};

/// Outcome of a login or registration attempt. A rejected attempt (wrong
/// password, taken email) is a `success: false` result, not an error; only
/// transport-level failures surface as `ApiError`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Outcome of an order-code activation check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivationOutcome {
    pub status: ActivationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
