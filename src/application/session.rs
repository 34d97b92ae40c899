use crate::domain::error::ApiError;
use crate::domain::ports::client_store::ClientStore;
use crate::domain::ports::unauthorized::UnauthorizedHandler;
use crate::domain::values::session_state::{
    SessionState, DEMO_SENTINEL, ENTRY_ROUTE, SESSION_KEY,
};
use serde::Serialize;
use std::sync::{Arc, Mutex};

/// Session lifecycle events, delivered to every subscriber.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "event")]
pub enum SessionEvent {
    SignedIn,
    DemoEntered,
    /// Credential removed, UI must navigate to the entry route. Emitted by
    /// explicit logout and by the forced 401 teardown alike.
    SignedOut { redirect_to: &'static str },
}

type Subscriber = Arc<dyn Fn(&SessionEvent) + Send + Sync>;

/// Owns the single session-credential slot and its change notifications.
/// The stored value is read fresh on every query; there is no cached
/// "was authenticated" flag that could go stale after a forced teardown.
pub struct SessionManager {
    store: Arc<dyn ClientStore>,
    subscribers: Mutex<Vec<Subscriber>>,
}

impl SessionManager {
    pub fn new(store: Arc<dyn ClientStore>) -> Self {
        Self {
            store,
            subscribers: Mutex::new(Vec::new()),
        }
    }

    pub fn state(&self) -> SessionState {
        match self.store.get(SESSION_KEY) {
            Ok(raw) => SessionState::from_stored(raw),
            Err(e) => {
                tracing::error!(error = %e, "session store read failed");
                SessionState::Anonymous
            }
        }
    }

    /// True iff any credential is stored. The demo sentinel counts: demo
    /// sessions must pass the route guard.
    pub fn is_authenticated(&self) -> bool {
        self.state().is_authenticated()
    }

    /// True iff the stored credential is exactly the demo sentinel.
    pub fn is_demo_mode(&self) -> bool {
        self.state().is_demo()
    }

    /// Persist a backend-issued token and announce the sign-in.
    pub fn store_token(&self, token: &str) -> Result<(), ApiError> {
        self.store.set(SESSION_KEY, token)?;
        self.emit(&SessionEvent::SignedIn);
        Ok(())
    }

    /// Enter demo mode by writing the reserved sentinel credential.
    pub fn enter_demo(&self) -> Result<(), ApiError> {
        self.store.set(SESSION_KEY, DEMO_SENTINEL)?;
        self.emit(&SessionEvent::DemoEntered);
        Ok(())
    }

    /// Remove the credential and announce the sign-out. Idempotent: a
    /// second call finds nothing to remove and emits nothing.
    pub fn logout(&self) -> Result<(), ApiError> {
        if self.store.remove(SESSION_KEY)? {
            self.emit(&SessionEvent::SignedOut {
                redirect_to: ENTRY_ROUTE,
            });
        }
        Ok(())
    }

    pub fn subscribe(&self, f: impl Fn(&SessionEvent) + Send + Sync + 'static) {
        self.subscribers
            .lock()
            .expect("session subscriber lock poisoned")
            .push(Arc::new(f));
    }

    fn emit(&self, event: &SessionEvent) {
        let subscribers: Vec<Subscriber> = self
            .subscribers
            .lock()
            .expect("session subscriber lock poisoned")
            .clone();
        for subscriber in subscribers {
            subscriber(event);
        }
    }
}

impl UnauthorizedHandler for SessionManager {
    /// Forced teardown on any 401. The atomic remove-if-present guarantees
    /// the signed-out event fires exactly once even when several in-flight
    /// requests fail with 401 at the same time.
    fn on_unauthorized(&self) {
        match self.store.remove(SESSION_KEY) {
            Ok(true) => {
                tracing::warn!("session rejected by backend, clearing credential");
                self.emit(&SessionEvent::SignedOut {
                    redirect_to: ENTRY_ROUTE,
                });
            }
            Ok(false) => {}
            Err(e) => tracing::error!(error = %e, "failed to clear rejected session"),
        }
    }
}
