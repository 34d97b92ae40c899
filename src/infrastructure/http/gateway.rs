use crate::domain::entities::alert::Alert;
use crate::domain::entities::auth::ActivationOutcome;
use crate::domain::entities::edge::EdgeItem;
use crate::domain::entities::overview::DashboardOverview;
use crate::domain::entities::shadow_boxing::PropFirmSimulation;
use crate::domain::entities::site::{CheckoutSession, ContactMessage, ContactReceipt};
use crate::domain::entities::slump::SlumpStatus;
use crate::domain::entities::trades::{SubmitResult, TradePreview, UploadResult};
use crate::domain::error::{extract_body_message, ApiError, FALLBACK_ERROR_MESSAGE};
use crate::domain::ports::auth_gateway::{AuthAttempt, AuthGateway};
use crate::domain::ports::client_store::ClientStore;
use crate::domain::ports::dashboard_source::DashboardSource;
use crate::domain::ports::unauthorized::UnauthorizedHandler;
use crate::domain::values::session_state::SESSION_KEY;
use crate::infrastructure::http::retry::RetryPolicy;
use async_trait::async_trait;
use reqwest::multipart;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Header carrying the session credential.
const API_KEY_HEADER: &str = "X-API-Key";
/// Correlation id header, sent on every request and echoed by the backend.
const REQUEST_ID_HEADER: &str = "x-request-id";

/// Live HTTP source. Owns all network communication: credential injection,
/// bounded retry on transient read failures, error normalization, and the
/// automatic 401 teardown. The 30 s timeout accommodates large uploads.
pub struct HttpGateway {
    client: Client,
    base_url: String,
    store: Arc<dyn ClientStore>,
    unauthorized: Arc<dyn UnauthorizedHandler>,
    retry: RetryPolicy,
}

#[derive(Serialize)]
struct CredentialsBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct ActivationBody<'a> {
    order_code: &'a str,
}

#[derive(Serialize)]
struct PastedTradesBody<'a> {
    pasted: &'a str,
}

#[derive(Serialize)]
struct CheckoutBody<'a> {
    plan: &'a str,
}

impl HttpGateway {
    pub fn new(
        base_url: &str,
        store: Arc<dyn ClientStore>,
        unauthorized: Arc<dyn UnauthorizedHandler>,
    ) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            store,
            unauthorized,
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Credential is read fresh per request: last writer wins, and a
    /// logout racing an in-flight call at worst yields a superseded
    /// response, never a stale header on the next one.
    fn credential(&self) -> Option<String> {
        self.store.get(SESSION_KEY).ok().flatten()
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.retry.run(|| self.get_once(path)).await
    }

    async fn get_once<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request_id = uuid::Uuid::new_v4().to_string();
        let mut req = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .header(REQUEST_ID_HEADER, &request_id);
        if let Some(token) = self.credential() {
            req = req.header(API_KEY_HEADER, token);
        }
        let resp = req
            .send()
            .await
            .map_err(|e| Self::transport_error(e, request_id.clone()))?;
        self.decode(resp, request_id).await
    }

    /// Mutating requests dispatch exactly once; no retry.
    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request_id = uuid::Uuid::new_v4().to_string();
        let mut req = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .header(REQUEST_ID_HEADER, &request_id)
            .json(body);
        if let Some(token) = self.credential() {
            req = req.header(API_KEY_HEADER, token);
        }
        let resp = req
            .send()
            .await
            .map_err(|e| Self::transport_error(e, request_id.clone()))?;
        self.decode(resp, request_id).await
    }

    async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        filename: &str,
        contents: Vec<u8>,
    ) -> Result<T, ApiError> {
        let request_id = uuid::Uuid::new_v4().to_string();
        let part = multipart::Part::bytes(contents)
            .file_name(filename.to_string())
            .mime_str("text/csv")
            .map_err(|e| ApiError::internal(format!("invalid upload part: {e}")))?;
        let form = multipart::Form::new().part("file", part);

        let mut req = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .header(REQUEST_ID_HEADER, &request_id)
            .multipart(form);
        if let Some(token) = self.credential() {
            req = req.header(API_KEY_HEADER, token);
        }
        let resp = req
            .send()
            .await
            .map_err(|e| Self::transport_error(e, request_id.clone()))?;
        self.decode(resp, request_id).await
    }

    fn transport_error(e: reqwest::Error, request_id: String) -> ApiError {
        if e.is_timeout() {
            ApiError::timeout(Some(request_id))
        } else {
            ApiError::network(Some(request_id))
        }
    }

    async fn decode<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
        sent_request_id: String,
    ) -> Result<T, ApiError> {
        let status = resp.status().as_u16();
        let request_id = resp
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
            .unwrap_or(sent_request_id);

        if resp.status().is_success() {
            return resp.json().await.map_err(|e| {
                tracing::error!(status, error = %e, "malformed success response");
                ApiError::new(FALLBACK_ERROR_MESSAGE, status, Some(request_id))
            });
        }

        if status == 401 {
            self.unauthorized.on_unauthorized();
        }

        let body = resp.text().await.unwrap_or_default();
        Err(ApiError::from_status(
            status,
            extract_body_message(&body),
            Some(request_id),
        ))
    }

    /// Rejected credentials come back as a failed attempt, not an error.
    async fn auth_post(&self, path: &str, body: &CredentialsBody<'_>) -> Result<AuthAttempt, ApiError> {
        match self.post_json::<_, AuthAttempt>(path, body).await {
            Ok(attempt) => Ok(attempt),
            Err(e) if matches!(e.status, 400 | 401 | 403 | 422) => Ok(AuthAttempt {
                success: false,
                token: None,
                message: Some(e.message),
            }),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl AuthGateway for HttpGateway {
    async fn login(&self, email: &str, password: &str) -> Result<AuthAttempt, ApiError> {
        self.auth_post("/v1/auth/login", &CredentialsBody { email, password })
            .await
    }

    async fn register(&self, email: &str, password: &str) -> Result<AuthAttempt, ApiError> {
        self.auth_post("/v1/auth/register", &CredentialsBody { email, password })
            .await
    }
}

#[async_trait]
impl DashboardSource for HttpGateway {
    async fn overview(&self) -> Result<DashboardOverview, ApiError> {
        self.get_json("/v1/dashboard/overview").await
    }

    async fn alerts(&self) -> Result<Vec<Alert>, ApiError> {
        self.get_json("/v1/dashboard/alerts").await
    }

    async fn edge_portfolio(&self) -> Result<Vec<EdgeItem>, ApiError> {
        self.get_json("/v1/dashboard/edge-portfolio").await
    }

    async fn slump_prescription(&self) -> Result<SlumpStatus, ApiError> {
        self.get_json("/v1/dashboard/slump-prescription").await
    }

    async fn shadow_boxing(&self) -> Result<Vec<PropFirmSimulation>, ApiError> {
        self.get_json("/v1/dashboard/shadow-boxing").await
    }

    async fn verify_activation(&self, order_code: &str) -> Result<ActivationOutcome, ApiError> {
        self.post_json("/v1/trader/activations/verify", &ActivationBody { order_code })
            .await
    }

    async fn preview_trades(&self, pasted: &str) -> Result<TradePreview, ApiError> {
        self.post_json("/v1/trader/trades/preview", &PastedTradesBody { pasted })
            .await
    }

    async fn upload_csv(&self, filename: &str, contents: Vec<u8>) -> Result<UploadResult, ApiError> {
        self.post_multipart("/v1/dashboard/upload", filename, contents)
            .await
    }

    async fn submit_trades(&self, pasted: &str) -> Result<SubmitResult, ApiError> {
        self.post_json("/v1/dashboard/trades/submit", &PastedTradesBody { pasted })
            .await
    }

    async fn send_contact(&self, message: &ContactMessage) -> Result<ContactReceipt, ApiError> {
        self.post_json("/v1/site/contact", message).await
    }

    async fn create_checkout(&self, plan: &str) -> Result<CheckoutSession, ApiError> {
        self.post_json("/v1/checkout/create-session", &CheckoutBody { plan })
            .await
    }
}
