//! JSON file driver for the credential store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use glbot_database_interface::{DatabaseError, DbService, Result};
use glbot_models::CredentialRecord;
use tokio::sync::Mutex;

/// Credential store backed by a single JSON file.
///
/// The collection is loaded lazily on first access; a missing file is
/// initialized to an empty collection and persisted immediately. Every
/// mutate-and-save sequence runs under one lock, so concurrent upserts
/// cannot lose records.
#[derive(Debug)]
pub struct JsonFileDb {
    path: PathBuf,
    state: Mutex<Option<Vec<CredentialRecord>>>,
}

impl JsonFileDb {
    /// Build a JSON file store at the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().into(),
            state: Mutex::new(None),
        }
    }

    async fn load(&self) -> Result<Vec<CredentialRecord>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| DatabaseError::SerializationError { source: e }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let empty = Vec::new();
                self.save(&empty).await?;
                Ok(empty)
            }
            Err(e) => Err(DatabaseError::PersistenceError { source: e }),
        }
    }

    async fn save(&self, credentials: &[CredentialRecord]) -> Result<()> {
        let data = serde_json::to_vec_pretty(credentials)
            .map_err(|e| DatabaseError::SerializationError { source: e })?;
        tokio::fs::write(&self.path, data)
            .await
            .map_err(|e| DatabaseError::PersistenceError { source: e })
    }

    async fn ensure_loaded<'a>(
        &self,
        state: &'a mut Option<Vec<CredentialRecord>>,
    ) -> Result<&'a mut Vec<CredentialRecord>> {
        if state.is_none() {
            *state = Some(self.load().await?);
        }

        Ok(state.get_or_insert_with(Vec::new))
    }
}

#[async_trait]
impl DbService for JsonFileDb {
    async fn credentials_get(&self, login: &str) -> Result<Option<CredentialRecord>> {
        let mut state = self.state.lock().await;
        let credentials = self.ensure_loaded(&mut state).await?;

        Ok(credentials
            .iter()
            .find(|record| record.login == login)
            .cloned())
    }

    async fn credentials_upsert(&self, instance: CredentialRecord) -> Result<CredentialRecord> {
        let mut state = self.state.lock().await;
        let credentials = self.ensure_loaded(&mut state).await?;

        match credentials
            .iter_mut()
            .find(|record| record.login == instance.login)
        {
            Some(existing) => *existing = instance.clone(),
            None => credentials.push(instance.clone()),
        }

        let snapshot = credentials.clone();
        self.save(&snapshot).await?;

        Ok(instance)
    }

    async fn credentials_all(&self) -> Result<Vec<CredentialRecord>> {
        let mut state = self.state.lock().await;
        let credentials = self.ensure_loaded(&mut state).await?;

        Ok(credentials.clone())
    }

    async fn health_check(&self) -> Result<()> {
        let mut state = self.state.lock().await;
        self.ensure_loaded(&mut state).await?;

        Ok(())
    }
}
