use crate::application::session::SessionManager;
use crate::domain::entities::auth::SessionResult;
use crate::domain::error::ApiError;
use crate::domain::ports::auth_gateway::AuthGateway;
use std::sync::Arc;

/// Login/registration flow: on success the returned token becomes the
/// session credential; on rejection nothing is stored and the backend
/// message is passed through.
pub struct AuthUseCase {
    gateway: Arc<dyn AuthGateway>,
    session: Arc<SessionManager>,
}

impl AuthUseCase {
    pub fn new(gateway: Arc<dyn AuthGateway>, session: Arc<SessionManager>) -> Self {
        Self { gateway, session }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<SessionResult, ApiError> {
        let attempt = self.gateway.login(email, password).await?;
        if attempt.success {
            if let Some(token) = attempt.token.as_deref() {
                self.session.store_token(token)?;
            } else {
                return Err(ApiError::internal("login succeeded but no token was issued"));
            }
        }
        Ok(SessionResult {
            success: attempt.success,
            message: attempt.message,
        })
    }

    pub async fn register(&self, email: &str, password: &str) -> Result<SessionResult, ApiError> {
        let attempt = self.gateway.register(email, password).await?;
        if attempt.success {
            if let Some(token) = attempt.token.as_deref() {
                self.session.store_token(token)?;
            } else {
                return Err(ApiError::internal(
                    "registration succeeded but no token was issued",
                ));
            }
        }
        Ok(SessionResult {
            success: attempt.success,
            message: attempt.message,
        })
    }
}
