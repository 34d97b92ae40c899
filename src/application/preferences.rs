use crate::domain::error::ApiError;
use crate::domain::ports::client_store::ClientStore;
use crate::domain::values::session_state::{ONBOARDING_KEY, THEME_KEY};
use std::sync::Arc;

/// Theme preference and onboarding flag: opaque strings under fixed keys,
/// no migration or versioning.
pub struct PreferencesUseCase {
    store: Arc<dyn ClientStore>,
}

impl PreferencesUseCase {
    pub fn new(store: Arc<dyn ClientStore>) -> Self {
        Self { store }
    }

    pub fn theme(&self) -> Result<Option<String>, ApiError> {
        self.store.get(THEME_KEY)
    }

    pub fn set_theme(&self, theme: &str) -> Result<(), ApiError> {
        self.store.set(THEME_KEY, theme)
    }

    pub fn has_onboarded(&self) -> Result<bool, ApiError> {
        Ok(self.store.get(ONBOARDING_KEY)?.is_some())
    }

    pub fn mark_onboarded(&self) -> Result<(), ApiError> {
        self.store.set(ONBOARDING_KEY, "true")
    }
}
