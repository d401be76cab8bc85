use async_trait::async_trait;

use crate::domain::commands::HostError;

/// Secret storage offered by the host editor.
#[async_trait(?Send)]
pub trait SecretStorePort {
    async fn get(&self, key: &str) -> Result<Option<String>, HostError>;

    async fn store(&self, key: &str, value: &str) -> Result<(), HostError>;
}
