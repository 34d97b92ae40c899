use serde::Serialize;

/// Storage key for the session credential.
pub const SESSION_KEY: &str = "tiltcheck.session";
/// Storage key for the theme preference.
pub const THEME_KEY: &str = "tiltcheck.theme";
/// Storage key for the onboarding-complete flag.
pub const ONBOARDING_KEY: &str = "tiltcheck.onboarded";

/// Reserved credential value that activates demo mode instead of a real
/// session. Kept short and unambiguous so it can never collide with a
/// backend-issued token (tokens are opaque but always longer).
pub const DEMO_SENTINEL: &str = "demo-session";

/// Route unauthenticated users are sent to.
pub const ENTRY_ROUTE: &str = "/activate";

/// Typed view of the stored credential. Demo mode counts as authenticated
/// for routing purposes but is a distinct state for data-sourcing decisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "state", content = "token")]
pub enum SessionState {
    Anonymous,
    Demo,
    Live(String),
}

impl SessionState {
    pub fn from_stored(raw: Option<String>) -> Self {
        match raw {
            None => SessionState::Anonymous,
            Some(value) if value == DEMO_SENTINEL => SessionState::Demo,
            Some(token) => SessionState::Live(token),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        !matches!(self, SessionState::Anonymous)
    }

    pub fn is_demo(&self) -> bool {
        matches!(self, SessionState::Demo)
    }
}
