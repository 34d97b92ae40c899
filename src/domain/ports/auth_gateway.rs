use crate::domain::error::ApiError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Raw outcome of an auth endpoint call. A rejected attempt arrives as
/// `success: false` with a backend message; only transport failures are
/// `ApiError`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthAttempt {
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<AuthAttempt, ApiError>;
    async fn register(&self, email: &str, password: &str) -> Result<AuthAttempt, ApiError>;
}
