use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Behavioral Quality Level state, computed by the backend and displayed
/// as-is. Ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BqlState {
    Elite,
    Solid,
    Mediocre,
    Leaking,
    Tilted,
}

impl fmt::Display for BqlState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BqlState::Elite => write!(f, "ELITE"),
            BqlState::Solid => write!(f, "SOLID"),
            BqlState::Mediocre => write!(f, "MEDIOCRE"),
            BqlState::Leaking => write!(f, "LEAKING"),
            BqlState::Tilted => write!(f, "TILTED"),
        }
    }
}

impl FromStr for BqlState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ELITE" => Ok(BqlState::Elite),
            "SOLID" => Ok(BqlState::Solid),
            "MEDIOCRE" => Ok(BqlState::Mediocre),
            "LEAKING" => Ok(BqlState::Leaking),
            "TILTED" => Ok(BqlState::Tilted),
            _ => Err(format!("Unknown BQL state: {s}")),
        }
    }
}
