use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Backend classification of a trading edge. UI copy and styling branch
/// exhaustively on this, so no catch-all variant exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EdgeClass {
    Prime,
    Stable,
    Decayed,
}

impl fmt::Display for EdgeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeClass::Prime => write!(f, "PRIME"),
            EdgeClass::Stable => write!(f, "STABLE"),
            EdgeClass::Decayed => write!(f, "DECAYED"),
        }
    }
}

impl FromStr for EdgeClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PRIME" => Ok(EdgeClass::Prime),
            "STABLE" => Ok(EdgeClass::Stable),
            "DECAYED" => Ok(EdgeClass::Decayed),
            _ => Err(format!("Unknown edge class: {s}")),
        }
    }
}
