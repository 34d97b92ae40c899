use crate::application::session::SessionManager;
use crate::domain::values::session_state::ENTRY_ROUTE;
use serde::Serialize;
use std::sync::Arc;

/// What the UI should do with a navigation into the protected route group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "decision")]
pub enum GuardDecision {
    Allow,
    /// Redirect to the entry route, preserving the originally requested
    /// path for the post-login bounce back.
    Redirect { to: String, from: String },
}

/// Protects the dashboard route group. The credential check is synchronous
/// and runs against storage on every evaluation, so a forced teardown is
/// visible on the very next navigation.
pub struct RouteGuard {
    session: Arc<SessionManager>,
}

impl RouteGuard {
    pub fn new(session: Arc<SessionManager>) -> Self {
        Self { session }
    }

    pub fn check(&self, requested_path: &str) -> GuardDecision {
        if self.session.is_authenticated() {
            GuardDecision::Allow
        } else {
            GuardDecision::Redirect {
                to: ENTRY_ROUTE.to_string(),
                from: requested_path.to_string(),
            }
        }
    }
}
