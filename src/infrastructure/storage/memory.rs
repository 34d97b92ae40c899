use crate::domain::error::ApiError;
use crate::domain::ports::client_store::ClientStore;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory store for tests and ephemeral sessions. The mutex makes
/// remove-if-present atomic, which the exactly-once 401 teardown relies on.
#[derive(Default)]
pub struct InMemoryClientStore {
    values: Mutex<HashMap<String, String>>,
}

impl ClientStore for InMemoryClientStore {
    fn get(&self, key: &str) -> Result<Option<String>, ApiError> {
        Ok(self
            .values
            .lock()
            .expect("store lock poisoned")
            .get(key)
            .cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ApiError> {
        self.values
            .lock()
            .expect("store lock poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool, ApiError> {
        Ok(self
            .values
            .lock()
            .expect("store lock poisoned")
            .remove(key)
            .is_some())
    }
}
