pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

use crate::application::auth::AuthUseCase;
use crate::application::guard::{GuardDecision, RouteGuard};
use crate::application::preferences::PreferencesUseCase;
use crate::application::session::{SessionEvent, SessionManager};
use crate::domain::entities::alert::Alert;
use crate::domain::entities::auth::{ActivationOutcome, SessionResult};
use crate::domain::entities::edge::EdgeItem;
use crate::domain::entities::overview::DashboardOverview;
use crate::domain::entities::shadow_boxing::PropFirmSimulation;
use crate::domain::entities::site::{CheckoutSession, ContactMessage, ContactReceipt};
use crate::domain::entities::slump::SlumpStatus;
use crate::domain::entities::trades::{SubmitResult, TradePreview, UploadResult};
use crate::domain::error::ApiError;
use crate::domain::ports::client_store::ClientStore;
use crate::domain::ports::dashboard_source::DashboardSource;
use crate::domain::values::session_state::SessionState;
use crate::infrastructure::demo::source::DemoSource;
use crate::infrastructure::http::gateway::HttpGateway;
use crate::infrastructure::http::retry::RetryPolicy;
use crate::infrastructure::storage::sqlite::SqliteClientStore;
use std::sync::Arc;
use std::time::Duration;

const DEFAULT_API_URL: &str = "https://api.tiltcheck.app";

/// Facade over the access layer: session lifecycle, route guarding, and
/// every dashboard operation, with the live HTTP source and the demo
/// fixture source selected per session state so call sites never branch.
pub struct TiltCheck {
    session: Arc<SessionManager>,
    auth_uc: AuthUseCase,
    guard: RouteGuard,
    prefs: PreferencesUseCase,
    live: Arc<HttpGateway>,
    demo: Arc<DemoSource>,
    store: Arc<dyn ClientStore>,
    base_url: String,
}

impl TiltCheck {
    /// Open with a sqlite-backed store at `db_path`; the backend base URL
    /// comes from `TILTCHECK_API_URL`.
    pub fn new(db_path: &str) -> Result<Self, ApiError> {
        let base_url =
            std::env::var("TILTCHECK_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());
        let store = Arc::new(SqliteClientStore::open(db_path)?);
        Ok(Self::with_providers(store, &base_url))
    }

    /// Wire the facade against any store implementation (tests use the
    /// in-memory one).
    pub fn with_providers(store: Arc<dyn ClientStore>, base_url: &str) -> Self {
        let session = Arc::new(SessionManager::new(store.clone()));
        let live = Arc::new(HttpGateway::new(base_url, store.clone(), session.clone()));
        let demo = Arc::new(DemoSource::new());

        Self {
            auth_uc: AuthUseCase::new(live.clone(), session.clone()),
            guard: RouteGuard::new(session.clone()),
            prefs: PreferencesUseCase::new(store.clone()),
            session,
            live,
            demo,
            store,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Override the demo source's artificial latency (tests use zero).
    pub fn with_demo_latency(mut self, latency: Duration) -> Self {
        self.demo = Arc::new(DemoSource::with_latency(latency));
        self
    }

    /// Override the live source's retry policy (tests shrink the delays).
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.live = Arc::new(
            HttpGateway::new(&self.base_url, self.store.clone(), self.session.clone())
                .with_retry_policy(retry),
        );
        self.auth_uc = AuthUseCase::new(self.live.clone(), self.session.clone());
        self
    }

    fn source(&self) -> Arc<dyn DashboardSource> {
        if self.session.is_demo_mode() {
            self.demo.clone()
        } else {
            self.live.clone()
        }
    }

    // Session delegating methods

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn is_demo_mode(&self) -> bool {
        self.session.is_demo_mode()
    }

    pub fn session_state(&self) -> SessionState {
        self.session.state()
    }

    pub fn subscribe_session(&self, f: impl Fn(&SessionEvent) + Send + Sync + 'static) {
        self.session.subscribe(f)
    }

    pub fn session(&self) -> &Arc<SessionManager> {
        &self.session
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<SessionResult, ApiError> {
        self.auth_uc.login(email, password).await
    }

    pub async fn register(&self, email: &str, password: &str) -> Result<SessionResult, ApiError> {
        self.auth_uc.register(email, password).await
    }

    pub fn enter_demo(&self) -> Result<(), ApiError> {
        self.session.enter_demo()
    }

    pub fn logout(&self) -> Result<(), ApiError> {
        self.session.logout()
    }

    pub fn guard_route(&self, requested_path: &str) -> GuardDecision {
        self.guard.check(requested_path)
    }

    // Dashboard delegating methods

    pub async fn overview(&self) -> Result<DashboardOverview, ApiError> {
        self.source().overview().await
    }

    pub async fn alerts(&self) -> Result<Vec<Alert>, ApiError> {
        self.source().alerts().await
    }

    pub async fn edge_portfolio(&self) -> Result<Vec<EdgeItem>, ApiError> {
        self.source().edge_portfolio().await
    }

    pub async fn slump_prescription(&self) -> Result<SlumpStatus, ApiError> {
        self.source().slump_prescription().await
    }

    pub async fn shadow_boxing(&self) -> Result<Vec<PropFirmSimulation>, ApiError> {
        self.source().shadow_boxing().await
    }

    pub async fn verify_activation(&self, order_code: &str) -> Result<ActivationOutcome, ApiError> {
        self.source().verify_activation(order_code).await
    }

    pub async fn preview_trades(&self, pasted: &str) -> Result<TradePreview, ApiError> {
        self.source().preview_trades(pasted).await
    }

    pub async fn upload_csv(
        &self,
        filename: &str,
        contents: Vec<u8>,
    ) -> Result<UploadResult, ApiError> {
        self.source().upload_csv(filename, contents).await
    }

    pub async fn submit_trades(&self, pasted: &str) -> Result<SubmitResult, ApiError> {
        self.source().submit_trades(pasted).await
    }

    pub async fn send_contact(&self, message: &ContactMessage) -> Result<ContactReceipt, ApiError> {
        self.source().send_contact(message).await
    }

    pub async fn create_checkout(&self, plan: &str) -> Result<CheckoutSession, ApiError> {
        self.source().create_checkout(plan).await
    }

    // Preference delegating methods

    pub fn theme(&self) -> Result<Option<String>, ApiError> {
        self.prefs.theme()
    }

    pub fn set_theme(&self, theme: &str) -> Result<(), ApiError> {
        self.prefs.set_theme(theme)
    }

    pub fn has_onboarded(&self) -> Result<bool, ApiError> {
        self.prefs.has_onboarded()
    }

    pub fn mark_onboarded(&self) -> Result<(), ApiError> {
        self.prefs.mark_onboarded()
    }
}
