use crate::domain::error::ApiError;
use std::future::Future;
use std::time::Duration;

/// Bounded retry for transient failures with a linearly increasing delay
/// (`attempt * base_delay`). Applied only to GET-style reads: re-issuing a
/// mutating request could duplicate side effects, so those dispatch once.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(1000),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts,
            base_delay,
        }
    }

    /// Run `op` up to `max_attempts` times. Only retryable failures
    /// (network-level or 5xx) are re-attempted; a 4xx propagates
    /// immediately.
    pub async fn run<T, F, Fut>(&self, mut op: F) -> Result<T, ApiError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let mut attempt: u32 = 1;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(e) if e.is_retryable() && attempt < self.max_attempts => {
                    tracing::warn!(
                        status = e.status,
                        attempt,
                        max_attempts = self.max_attempts,
                        "transient failure, retrying"
                    );
                    tokio::time::sleep(self.base_delay * attempt).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
