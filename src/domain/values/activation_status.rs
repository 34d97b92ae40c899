use serde::{Deserialize, Serialize};
use std::fmt;

/// State of an order-code activation check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivationStatus {
    Pending,
    Ready,
    Error,
}

impl fmt::Display for ActivationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivationStatus::Pending => write!(f, "pending"),
            ActivationStatus::Ready => write!(f, "ready"),
            ActivationStatus::Error => write!(f, "error"),
        }
    }
}
