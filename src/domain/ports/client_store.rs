use crate::domain::error::ApiError;

/// Client-local key-value storage, the equivalent of the browser's
/// localStorage. Holds the session credential, theme preference, and
/// onboarding flag under fixed namespaced keys. Last writer wins; the
/// credential slot is read at the start of every request.
pub trait ClientStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, ApiError>;
    fn set(&self, key: &str, value: &str) -> Result<(), ApiError>;
    /// Returns true when a value was present and removed. The remove must
    /// be atomic: concurrent callers see at most one `true`.
    fn remove(&self, key: &str) -> Result<bool, ApiError>;
}
