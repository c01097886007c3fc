use async_trait::async_trait;
use glbot_models::CredentialRecord;

use crate::Result;

#[async_trait]
pub trait DbService: Send + Sync {
    /// Get the credential record for a login.
    async fn credentials_get(&self, login: &str) -> Result<Option<CredentialRecord>>;
    /// Insert a credential record, or replace the existing record with the
    /// same login in place.
    async fn credentials_upsert(&self, instance: CredentialRecord) -> Result<CredentialRecord>;
    /// List all credential records, in storage order.
    async fn credentials_all(&self) -> Result<Vec<CredentialRecord>>;
    async fn health_check(&self) -> Result<()>;
}
