use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::commands::HostError;
use crate::ports::SecretStorePort;

/// In-process secret store for native hosts and tests. Nothing is persisted.
#[derive(Default)]
pub struct MemorySecretStore {
    secrets: Mutex<HashMap<String, String>>,
}

impl MemorySecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_secret(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store.secrets.lock().insert(key.into(), value.into());
        store
    }
}

#[async_trait(?Send)]
impl SecretStorePort for MemorySecretStore {
    async fn get(&self, key: &str) -> Result<Option<String>, HostError> {
        Ok(self.secrets.lock().get(key).cloned())
    }

    async fn store(&self, key: &str, value: &str) -> Result<(), HostError> {
        self.secrets.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
