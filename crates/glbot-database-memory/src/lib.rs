use std::sync::RwLock;

use async_trait::async_trait;
use glbot_database_interface::{DbService, Result};
use glbot_models::CredentialRecord;

/// In-memory credential store. Keeps insertion order so an upsert replaces
/// the matching record in place.
#[derive(Debug, Default)]
pub struct MemoryDb {
    credentials: RwLock<Vec<CredentialRecord>>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Default::default()
    }
}

#[async_trait]
impl DbService for MemoryDb {
    async fn credentials_get(&self, login: &str) -> Result<Option<CredentialRecord>> {
        Ok(self
            .credentials
            .read()
            .unwrap()
            .iter()
            .find(|record| record.login == login)
            .cloned())
    }

    async fn credentials_upsert(&self, instance: CredentialRecord) -> Result<CredentialRecord> {
        let mut credentials = self.credentials.write().unwrap();
        match credentials
            .iter_mut()
            .find(|record| record.login == instance.login)
        {
            Some(existing) => *existing = instance.clone(),
            None => credentials.push(instance.clone()),
        }

        Ok(instance)
    }

    async fn credentials_all(&self) -> Result<Vec<CredentialRecord>> {
        Ok(self.credentials.read().unwrap().clone())
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}
